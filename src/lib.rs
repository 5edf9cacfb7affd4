//! AirNet Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod cad;
pub mod core;
pub mod kernel;
pub mod render;
pub mod shared;
pub mod sheet;
pub mod ui;
pub mod xml;

pub use app::{AppCommand, AppController, AppIntent, AppState, LoadJob, UiState, ViewState};
pub use core::{
    Camera3D, Document, Identifier, LinkRecord, LoadError, NodeRecord, RecordStore,
    SelectionController, SelectionState, ShapeRegistry, TreeIndex, ViewPreset,
};
pub use kernel::{CadFormat, GeometryKernel, MeshKernel, Shape, ViewerKernel};
pub use shared::{RenderScene, ViewerOptions};
pub use sheet::load_spreadsheet;
pub use xml::load_network_xml;
