//! Datei-Dialoge und modale Fenster.

mod error_dialog;
mod file_dialogs;
mod progress_dialog;

pub use error_dialog::show_error_dialog;
pub use file_dialogs::handle_file_dialogs;
pub use progress_dialog::show_progress_dialog;
