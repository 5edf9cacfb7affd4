//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Während ein Ladevorgang läuft, ist das Dokument leer; Selektions- und
/// Export-Intents werden dann verworfen.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::StartLoad { path }],
        AppIntent::StartupFileRequested { path } => vec![AppCommand::LoadFileNow { path }],
        AppIntent::CancelLoadRequested => {
            if state.is_loading() {
                vec![AppCommand::CancelLoad]
            } else {
                vec![]
            }
        }
        AppIntent::ExportRequested => {
            if state.is_loading() {
                vec![]
            } else {
                vec![AppCommand::RequestExportFileDialog]
            }
        }
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportDocument { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::TreeNodeClicked { node } => {
            if state.is_loading() {
                vec![]
            } else {
                vec![AppCommand::SelectTreeNode { node }]
            }
        }
        AppIntent::ViewportClicked { screen_pos } => {
            if state.is_loading() {
                vec![]
            } else {
                vec![AppCommand::PickAt { screen_pos }]
            }
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::CameraOrbit { delta } => {
            let rad = state.options.orbit_rad_per_pixel();
            vec![AppCommand::OrbitCamera {
                delta_yaw: -(delta.x as f64) * rad,
                delta_pitch: delta.y as f64 * rad,
            }]
        }
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraScroll { steps } => {
            if steps == 0.0 {
                vec![]
            } else {
                let factor = (state.options.scroll_zoom_step as f64).powf(steps as f64);
                vec![AppCommand::ZoomCamera { factor }]
            }
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            factor: state.options.button_zoom_step as f64,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            factor: 1.0 / state.options.button_zoom_step as f64,
        }],
        AppIntent::ViewPresetRequested { preset } => vec![
            AppCommand::ApplyViewPreset { preset },
            AppCommand::FitAll,
        ],
        AppIntent::FitAllRequested => vec![AppCommand::FitAll],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],

        AppIntent::ErrorDismissed => vec![AppCommand::DismissError],
    }
}
