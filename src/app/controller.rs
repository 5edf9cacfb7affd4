//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Command: {:?}", command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestExportFileDialog => handlers::file_io::request_export(state),
            AppCommand::StartLoad { path } => handlers::file_io::start_load(state, path)?,
            AppCommand::LoadFileNow { path } => handlers::file_io::load_now(state, path)?,
            AppCommand::CancelLoad => handlers::file_io::cancel_load(state),
            AppCommand::ExportDocument { path } => handlers::file_io::export(state, path)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Selektion ===
            AppCommand::SelectTreeNode { node } => {
                handlers::selection::select_tree_node(state, node)
            }
            AppCommand::PickAt { screen_pos } => handlers::selection::pick_at(state, screen_pos),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Kamera & Viewport ===
            AppCommand::OrbitCamera {
                delta_yaw,
                delta_pitch,
            } => handlers::view::orbit(state, delta_yaw, delta_pitch),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::ApplyViewPreset { preset } => handlers::view::apply_preset(state, preset),
            AppCommand::FitAll => handlers::view::fit_all(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Dialoge & Optionen ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::DismissError => handlers::dialog::dismiss_error(state),
        }

        Ok(())
    }

    /// Holt fertige Hintergrund-Jobs ab (einmal pro Frame).
    ///
    /// Gibt `Ok(true)` zurück, wenn sich das Dokument geändert hat.
    pub fn poll_background(&mut self, state: &mut AppState) -> anyhow::Result<bool> {
        super::use_cases::file_io::poll_load(state)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene<'a>(
        &self,
        state: &'a AppState,
        viewport_size: [f32; 2],
    ) -> RenderScene<'a> {
        render_scene::build(state, viewport_size)
    }
}
