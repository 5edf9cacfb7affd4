//! Core-Domänentypen: Datensätze, Shape Registry, Tree Index, Selektion, Kamera.
//!
//! Alles, was zu einem geladenen Dokument gehört, lebt in [`Document`] und
//! wird bei jedem Laden komplett neu aufgebaut.

pub mod camera;
pub mod document;
pub mod error;
pub mod geometry_builder;
pub mod identifier;
pub mod info;
pub mod network_tree;
pub mod picking;
pub mod progress;
pub mod records;
pub mod registry;
pub mod selection;
pub mod tree;

pub use camera::{Camera3D, ViewPreset};
pub use document::{Document, DocumentSource, LoadSettings};
pub use error::{ExportError, ImportError, LoadError, ParseError};
pub use geometry_builder::{register_network_primitives, PrimitiveRadii, MIN_LINK_LENGTH};
pub use identifier::Identifier;
pub use info::{InfoText, DEFAULT_STATUS};
pub use picking::pick_shape;
pub use progress::{JobProgress, LoadMonitor, Unmonitored};
pub use records::{LinkRecord, LoadReport, NodeRecord, RecordStore, DEFAULT_SECTION};
pub use registry::{RegisteredShape, ShapePalette, ShapeRegistry};
pub use selection::{SelectionChange, SelectionController, SelectionState};
pub use tree::{LazyGroups, TreeIndex, TreeNode, TreeNodeId, DEFAULT_GROUP};
