//! PinString Editor.
//!
//! Interaktive Zeichenfläche: Pins setzen und mit Fäden (Linien oder Bögen) verbinden.

use eframe::egui;
use pin_string_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("PinString Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("PinString Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "PinString Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        Self {
            state: AppState::with_options(Self::load_options()),
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }

    /// Lädt die Optionen neben der Binary; fehlt die Datei, werden die Standardwerte geschrieben.
    fn load_options() -> EditorOptions {
        let config_path = EditorOptions::config_path();
        if config_path.exists() {
            return EditorOptions::load_from_file(&config_path);
        }

        let defaults = EditorOptions::default();
        if let Err(e) = defaults.save_to_file(&config_path) {
            log::warn!("Standard-Optionen konnten nicht gespeichert werden: {:#}", e);
        }
        defaults
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_status_bar(ctx, &self.state);

        let toolbar_events = ui::render_toolbar(ctx, &self.state);
        self.process_events(toolbar_events);

        self.show_canvas(ctx);

        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn show_canvas(&mut self, ctx: &egui::Context) {
        let background = render::to_color32(self.state.options.background_color);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let events = self.input.collect_canvas_events(ui, &response);
                self.process_events(events);

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                self.renderer
                    .render_scene(&painter, rect.min, &scene, &self.state.options);

                if scene.is_empty() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Werkzeug Pin (2) wählen und klicken, um Pins zu setzen",
                        egui::FontId::proportional(18.0),
                        egui::Color32::GRAY,
                    );
                }
            });
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.view.take_repaint_request() || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
