//! Geometry Builder: Kugeln für Nodes, Zylinder für Links.

use super::{Document, Identifier, LinkRecord, LoadError, LoadMonitor, LoadReport, NodeRecord};
use crate::kernel::{GeometryKernel, KernelError, Shape};

/// Links kürzer als dieser Wert erhalten kein Primitiv.
pub const MIN_LINK_LENGTH: f64 = 1e-6;

/// Radien der Netzwerk-Primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveRadii {
    /// Radius der Node-Kugeln
    pub node: f64,
    /// Radius der Link-Zylinder
    pub link: f64,
}

impl Default for PrimitiveRadii {
    fn default() -> Self {
        Self {
            node: 40.0,
            link: 30.0,
        }
    }
}

/// Kugel für einen Node.
pub fn node_primitive<K: GeometryKernel + ?Sized>(
    kernel: &K,
    node: &NodeRecord,
    radius: f64,
) -> Result<Shape, KernelError> {
    kernel.make_sphere(node.position, radius)
}

/// Zylinder vom Start- zum Endpunkt; `None` bei (nahezu) Länge 0.
pub fn link_primitive<K: GeometryKernel + ?Sized>(
    kernel: &K,
    link: &LinkRecord,
    radius: f64,
) -> Result<Option<Shape>, KernelError> {
    let axis = link.end_pos - link.origin_pos;
    let height = axis.length();
    if height < MIN_LINK_LENGTH {
        return Ok(None);
    }
    kernel
        .make_cylinder(link.origin_pos, axis, radius, height)
        .map(Some)
}

/// Erzeugt Primitive für alle Links und Nodes des Dokuments und registriert sie.
///
/// Fehler einzelner Primitive werden geloggt und übersprungen; nur ein
/// Abbruch über den Monitor beendet den Aufbau.
pub fn register_network_primitives<K: GeometryKernel + ?Sized>(
    doc: &mut Document,
    kernel: &K,
    radii: PrimitiveRadii,
    monitor: &dyn LoadMonitor,
    report: &mut LoadReport,
) -> Result<(), LoadError> {
    monitor.begin("Links", doc.records.link_count());
    for link in doc.records.links() {
        monitor.advance()?;
        match link_primitive(kernel, link, radii.link) {
            Ok(Some(shape)) => {
                doc.registry.register(Identifier::Link(link.index), shape);
                report.shapes += 1;
            }
            Ok(None) => {
                log::warn!(
                    "Link '{}' (ID: {}) hat Länge ~0, kein Zylinder erzeugt",
                    link.name,
                    link.index
                );
                report.skipped_links += 1;
            }
            Err(e) => {
                log::warn!("Link '{}' (ID: {}) übersprungen: {}", link.name, link.index, e);
                report.skipped_links += 1;
            }
        }
    }

    monitor.begin("Nodes", doc.records.node_count());
    for (index, node) in doc.records.nodes().enumerate() {
        monitor.advance()?;
        match node_primitive(kernel, node, radii.node) {
            Ok(shape) => {
                doc.registry.register(Identifier::Node(index), shape);
                report.shapes += 1;
            }
            Err(e) => log::warn!("Node '{}' übersprungen: {}", node.reference, e),
        }
    }

    log::info!(
        "Primitive erzeugt: {} Shapes, {} Links ohne Zylinder",
        report.shapes,
        report.skipped_links
    );
    Ok(())
}
