//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und dem Binary geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod logging;
pub mod options;
mod render_scene;

pub use options::ViewerOptions;
pub use render_scene::RenderScene;
