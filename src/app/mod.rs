//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod loader;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dokument, Selektion, View, Jobs).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use loader::{is_supported_path, load_document, LoadJob, LoadResult};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, SelectionPanelState, UiState, ViewState};
