//! UI-Komponenten: Menü, Tree-Panel, Info-Panel, Input-Handling, Dialoge.

pub mod dialogs;
pub mod info_panel;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Jede Funktion zeichnet eine Komponente und gibt die ausgelösten
/// `AppIntent`s zurück; Zustand wird hier nicht verändert (Ausnahme:
/// einmalige Dialog-/Fokus-Flags im `UiState`).
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod tree_panel;

pub use dialogs::{handle_file_dialogs, show_error_dialog, show_progress_dialog};
pub use info_panel::render_info_panel;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use tree_panel::render_tree_panel;
