//! Kreisbogen-Geometrie aus drei Punkten (Start, Mittelpunkt, Ende).

use glam::Vec2;
use std::f32::consts::TAU;

/// Abgeleitete Parameter eines Kreisbogens um einen Mittelpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Abstand Mittelpunkt → Start
    pub radius: f32,
    /// Winkel des Startpunkts (Radiant, atan2-Konvention)
    pub start_angle: f32,
    /// Winkel des Endpunkts (Radiant, atan2-Konvention)
    pub end_angle: f32,
    /// Umlaufrichtung: `true` = Winkel nimmt von Start nach Ende ab
    pub clockwise: bool,
}

/// Berechnet die Bogen-Parameter für Start, Mittelpunkt und Ende.
///
/// Der Radius wird ausschließlich aus `start` abgeleitet. Liegt `end` auf einem
/// anderen Radius, endet der gezeichnete Bogen nur in Richtung von `end`, nicht
/// exakt auf dem Punkt (kein echter Drei-Punkt-Kreis-Fit).
///
/// Die Umlaufrichtung folgt dem Vorzeichen des 2D-Kreuzprodukts von
/// `start − center` und `end − center`: negativ ⇒ `clockwise = true`.
/// Degenerierte Eingaben (kollinear, Radius 0) liefern trotzdem ein Ergebnis.
pub fn compute_arc(start: Vec2, center: Vec2, end: Vec2) -> ArcGeometry {
    let to_start = start - center;
    let to_end = end - center;

    ArcGeometry {
        radius: to_start.length(),
        start_angle: to_start.y.atan2(to_start.x),
        end_angle: to_end.y.atan2(to_end.x),
        clockwise: to_start.perp_dot(to_end) < 0.0,
    }
}

impl ArcGeometry {
    /// Vorzeichenbehafteter Überstreichungswinkel von Start nach Ende in Umlaufrichtung.
    ///
    /// Negativ bei `clockwise`, sonst positiv; der Betrag liegt in `[0, 2π)`.
    pub fn sweep(&self) -> f32 {
        let delta = self.end_angle - self.start_angle;
        if self.clockwise {
            if delta > 0.0 {
                delta - TAU
            } else {
                delta
            }
        } else if delta < 0.0 {
            delta + TAU
        } else {
            delta
        }
    }

    /// Tastet den Bogen in `segments` gleich großen Winkelschritten ab.
    ///
    /// Liefert `segments + 1` Punkte, beginnend beim Startpunkt.
    pub fn sample(&self, center: Vec2, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        let sweep = self.sweep();
        (0..=segments)
            .map(|i| {
                let angle = self.start_angle + sweep * (i as f32 / segments as f32);
                center + Vec2::from_angle(angle) * self.radius
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_negative_cross_product_is_clockwise() {
        // start rechts vom Mittelpunkt, Ende darunter (mathematisch negativ)
        let arc = compute_arc(Vec2::new(10.0, 0.0), Vec2::ZERO, Vec2::new(0.0, -10.0));
        assert!(arc.clockwise);
        assert_relative_eq!(arc.start_angle, 0.0);
        assert_relative_eq!(arc.end_angle, -FRAC_PI_2);
    }

    #[test]
    fn test_positive_cross_product_is_counter_clockwise() {
        let arc = compute_arc(Vec2::new(10.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!(!arc.clockwise);
        assert_relative_eq!(arc.end_angle, FRAC_PI_2);
    }

    #[test]
    fn test_radius_uses_start_not_end() {
        let center = Vec2::new(100.0, 100.0);
        let arc = compute_arc(
            Vec2::new(130.0, 140.0),
            center,
            Vec2::new(100.0, 300.0),
        );
        assert_relative_eq!(arc.radius, 50.0);
    }

    #[test]
    fn test_collinear_input_still_yields_result() {
        let arc = compute_arc(Vec2::new(-5.0, 0.0), Vec2::ZERO, Vec2::new(5.0, 0.0));
        assert!(!arc.clockwise);
        assert_relative_eq!(arc.radius, 5.0);
        assert_relative_eq!(arc.sweep().abs(), PI);
    }

    #[test]
    fn test_zero_radius_does_not_produce_nan() {
        let arc = compute_arc(Vec2::ZERO, Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert_eq!(arc.radius, 0.0);
        assert!(arc.start_angle.is_finite());
        assert!(arc.sample(Vec2::ZERO, 4).iter().all(|p| *p == Vec2::ZERO));
    }

    #[test]
    fn test_sweep_follows_winding() {
        // -90° → 180°: Winkel-Differenz +270°, Umlauf im Uhrzeigersinn ergibt -90°
        let wrapped = compute_arc(Vec2::new(0.0, -10.0), Vec2::ZERO, Vec2::new(-10.0, 0.0));
        assert!(wrapped.clockwise);
        assert_relative_eq!(wrapped.sweep(), -FRAC_PI_2, epsilon = 1e-5);

        let cw = compute_arc(Vec2::new(0.0, 10.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!(cw.clockwise);
        assert_relative_eq!(cw.sweep(), -FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn test_sample_starts_at_start_and_ends_on_end_direction() {
        let center = Vec2::new(50.0, 50.0);
        let arc = compute_arc(Vec2::new(60.0, 50.0), center, Vec2::new(50.0, 80.0));
        let points = arc.sample(center, 16);

        assert_eq!(points.len(), 17);
        assert_relative_eq!(points[0].x, 60.0, epsilon = 1e-4);
        assert_relative_eq!(points[0].y, 50.0, epsilon = 1e-4);
        // Ende liegt auf Radius 10 in Richtung des Endpunkts, nicht auf (50, 80)
        let last = points[16];
        assert_relative_eq!(last.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(last.y, 60.0, epsilon = 1e-4);
    }
}
