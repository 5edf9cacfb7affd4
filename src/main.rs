//! AirNet Viewer.
//!
//! 3D-Viewer für Verkabelungsnetze von Flugzeugen: Nodes als Kugeln, Links
//! als Zylinder, Daten aus Tabellen, Netzwerk-XML oder STEP/IGES.

use airnet_viewer::shared::logging;
use airnet_viewer::{render, ui, AppController, AppIntent, AppState, ViewerOptions};
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use std::process::ExitCode;

/// Kommandozeilen-Argumente
#[derive(Debug, Parser)]
#[command(name = "airnet-viewer", version, about = "3D-Viewer für Flugzeug-Verkabelungsnetze")]
struct Args {
    /// Tabelle (.xlsx/.xls/.xlsm/.ods), Netzwerk-XML oder STEP/IGES-Datei
    data_file: Option<PathBuf>,
    /// Ausführliches Logging (Debug-Level)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match AppRunner::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Anwendung mit Fehler beendet: {:#}", e);
            ExitCode::from(1)
        }
    }
}

struct AppRunner;

impl AppRunner {
    fn run(args: Args) -> anyhow::Result<()> {
        if let Err(e) = logging::init(args.debug) {
            eprintln!("Logger konnte nicht initialisiert werden: {:#}", e);
        }

        log::info!("AirNet Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("AirNet Viewer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        let data_file = args.data_file;
        eframe::run_native(
            "AirNet Viewer",
            options,
            Box::new(move |_cc| Ok(Box::new(ViewerApp::new(data_file)))),
        )
        .map_err(|e| anyhow::anyhow!("eframe: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    renderer: render::SceneRenderer,
    input: ui::InputState,
}

impl ViewerApp {
    fn new(data_file: Option<PathBuf>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let mut app = Self {
            state: AppState::with_options(viewer_options),
            controller: AppController::new(),
            renderer: render::SceneRenderer::new(),
            input: ui::InputState::new(),
        };

        if let Some(path) = data_file {
            log::info!("Startdatei: {}", path.display());
            app.process_events(vec![AppIntent::StartupFileRequested { path }]);
        }

        app
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let job_finished = self.poll_background();

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = job_finished
            || events
                .iter()
                .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_tree_panel(ctx, &mut self.state));
        events.extend(ui::render_info_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(
            &mut self.state.ui,
            self.state.kernel.as_ref(),
        ));
        events.extend(ui::show_progress_dialog(ctx, self.state.load_job.as_ref()));
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::show_error_dialog(
            ctx,
            self.state.ui.error_message.as_deref(),
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    !self.state.selection.is_idle(),
                    self.state.is_loading(),
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);
                let painter = ui.painter_at(rect);
                self.renderer.paint(&painter, rect, &scene);

                if !scene.has_shapes() && !self.state.is_loading() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No file loaded. Use File → Open",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn poll_background(&mut self) -> bool {
        match self.controller.poll_background(&mut self.state) {
            Ok(finished) => finished,
            Err(e) => {
                log::error!("Ladevorgang fehlgeschlagen: {:#}", e);
                self.state.ui.show_error(format!("{e:#}"));
                true
            }
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.show_error(format!("{e:#}"));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if self.state.is_loading() {
            // Fortschritt pollen, ohne auf Eingaben zu warten
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        } else if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
