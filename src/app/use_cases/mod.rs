//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod file_io;
pub mod options;
pub mod selection;
pub mod viewport;
