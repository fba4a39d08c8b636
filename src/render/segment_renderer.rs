//! Segment-Renderer für Linien, Bögen und den gestrichelten Entwurf.

use super::{to_color32, to_screen};
use crate::core::ArcGeometry;
use crate::shared::{DraftPreview, EditorOptions, RenderSegment};
use glam::Vec2;

/// Renderer für Fäden
#[derive(Debug)]
pub struct SegmentRenderer {
    stroke: egui::Stroke,
    dash_length: f32,
    gap_length: f32,
    arc_segments: usize,
}

impl Default for SegmentRenderer {
    fn default() -> Self {
        let mut renderer = Self {
            stroke: egui::Stroke::NONE,
            dash_length: 0.0,
            gap_length: 0.0,
            arc_segments: 1,
        };
        renderer.update_style(&EditorOptions::default());
        renderer
    }
}

impl SegmentRenderer {
    /// Übernimmt Linienstil und Bogen-Auflösung aus den Optionen.
    pub fn update_style(&mut self, options: &EditorOptions) {
        self.stroke = egui::Stroke::new(options.segment_width, to_color32(options.segment_color));
        self.dash_length = options.draft_dash_length;
        self.gap_length = options.draft_gap_length;
        self.arc_segments = options.arc_segments;
    }

    /// Zeichnet alle festgeschriebenen Segmente als durchgezogene Linien.
    pub fn render(&self, painter: &egui::Painter, origin: egui::Pos2, segments: &[RenderSegment]) {
        for segment in segments {
            let points = self.segment_points(origin, segment);
            painter.add(egui::Shape::line(points, self.stroke));
        }
    }

    /// Zeichnet den Entwurf gestrichelt: als Bogen, wenn ein Mittelpunkt gewählt ist.
    pub fn render_draft(&self, painter: &egui::Painter, origin: egui::Pos2, draft: &DraftPreview) {
        let points = match draft.arc {
            Some((center, geometry)) => self.arc_points(origin, center, &geometry),
            None => vec![to_screen(origin, draft.start), to_screen(origin, draft.pointer)],
        };
        painter.extend(egui::Shape::dashed_line(
            &points,
            self.stroke,
            self.dash_length,
            self.gap_length,
        ));
    }

    fn segment_points(&self, origin: egui::Pos2, segment: &RenderSegment) -> Vec<egui::Pos2> {
        match segment {
            RenderSegment::Line { start, end } => {
                vec![to_screen(origin, *start), to_screen(origin, *end)]
            }
            RenderSegment::Arc { center, geometry } => self.arc_points(origin, *center, geometry),
        }
    }

    fn arc_points(
        &self,
        origin: egui::Pos2,
        center: Vec2,
        geometry: &ArcGeometry,
    ) -> Vec<egui::Pos2> {
        geometry
            .sample(center, self.arc_segments)
            .into_iter()
            .map(|p| to_screen(origin, p))
            .collect()
    }
}
