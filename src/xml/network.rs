//! Parser für Netzwerk-XML (`Net`/`SubNet`/`Segement`/`Network`).
//!
//! Baut Record Store und Tree in einem Durchlauf über die quick-xml-Events.

use crate::core::{
    network_tree, Document, Identifier, LinkRecord, LoadError, LoadMonitor, LoadReport,
    ParseError, TreeIndex, TreeNodeId, DEFAULT_SECTION,
};
use glam::DVec3;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Elemente, die ein Netz (Tree-Gruppe) einleiten.
pub const NET_TAGS: &[&str] = &["Net", "MultiDeviceNet", "TwoDeviceNet"];

#[derive(Debug, Clone)]
struct XmlPoint {
    name: String,
    position: DVec3,
}

#[derive(Debug)]
struct PendingNetwork {
    parent: TreeNodeId,
    record: usize,
    name: String,
    section: String,
    start: Option<XmlPoint>,
    end: Option<XmlPoint>,
}

#[derive(Debug)]
enum Frame {
    Net(TreeNodeId),
    Devices(TreeNodeId),
    Isoelectric(TreeNodeId),
    SubNet { node: TreeNodeId, name: String },
    Segment(TreeNodeId),
    Network(Box<PendingNetwork>),
    Other,
}

struct Attributes(Vec<(String, String)>);

impl Attributes {
    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Erst exakter Name, dann Großschreibung (`x` / `X`).
    fn get_any_case(&self, key: &str) -> Option<&str> {
        self.get(key)
            .or_else(|| self.get(&key.to_ascii_uppercase()))
            .or_else(|| self.get(&key.to_ascii_lowercase()))
    }
}

struct NetworkParser<'a> {
    doc: &'a mut Document,
    report: &'a mut LoadReport,
    monitor: &'a dyn LoadMonitor,
    root: TreeNodeId,
    stack: Vec<Frame>,
    networks: usize,
}

impl<'a> NetworkParser<'a> {
    fn tree(&mut self) -> &mut TreeIndex {
        &mut self.doc.tree
    }

    fn in_net(&self) -> bool {
        self.stack.iter().any(|f| matches!(f, Frame::Net(_)))
    }

    fn subnet_name(&self) -> Option<&str> {
        self.stack.iter().rev().find_map(|f| match f {
            Frame::SubNet { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    fn open(&mut self, tag: &str, attrs: &Attributes) -> Result<(), LoadError> {
        let label = |fallback: &str| attrs.get("name").unwrap_or(fallback).to_string();

        let frame = match (self.stack.last(), tag) {
            (_, t) if NET_TAGS.contains(&t) && !self.in_net() => {
                let root = self.root;
                Frame::Net(self.tree().add_child(root, label(tag)))
            }
            (Some(Frame::Net(net)), "Devices") => {
                let net = *net;
                Frame::Devices(self.tree().add_child(net, "Equloc"))
            }
            (Some(Frame::Devices(devices)), "Device") => {
                let devices = *devices;
                self.tree().add_child(devices, label(tag));
                Frame::Other
            }
            (Some(Frame::Net(net)), "IsoelectricPoints") => {
                let net = *net;
                Frame::Isoelectric(self.tree().add_child(net, "IsoelectricPoints"))
            }
            (Some(Frame::Isoelectric(group)), "IsoelePt") => {
                let group = *group;
                self.tree().add_child(group, label(tag));
                Frame::Other
            }
            (Some(Frame::Net(net)), "SubNet") => {
                let net = *net;
                let name = label(tag);
                let node = self.tree().add_child(net, name.as_str());
                Frame::SubNet { node, name }
            }
            (Some(Frame::SubNet { node, .. }), "NetStartPoint" | "NetEndPoint") => {
                let node = *node;
                let info = self.tree().add_child(node, tag);
                if let Some(name) = attrs.get("name") {
                    self.tree().add_child(info, name);
                }
                Frame::Other
            }
            (Some(Frame::SubNet { node, .. }), "Segement") => {
                let node = *node;
                Frame::Segment(self.tree().add_child(node, label(tag)))
            }
            (Some(Frame::Segment(segment)), "Network") => {
                self.monitor.advance()?;
                let record = self.networks;
                self.networks += 1;
                let parent = *segment;
                let section = self.subnet_name().unwrap_or(DEFAULT_SECTION).to_string();
                let name = match attrs.get("name") {
                    Some(name) => name.to_string(),
                    None => {
                        let fallback = format!("Link_{record}");
                        self.record_error(ParseError::Missing {
                            record,
                            field: "Network.name".into(),
                            fallback: fallback.clone(),
                        });
                        fallback
                    }
                };
                Frame::Network(Box::new(PendingNetwork {
                    parent,
                    record,
                    name,
                    section,
                    start: None,
                    end: None,
                }))
            }
            (Some(Frame::Network(pending)), "StartPoint" | "EndPoint") => {
                let record = pending.record;
                let is_start = tag == "StartPoint";
                let point = self.read_point(record, tag, is_start, attrs);
                if let Some(Frame::Network(pending)) = self.stack.last_mut() {
                    if is_start {
                        pending.start = Some(point);
                    } else {
                        pending.end = Some(point);
                    }
                }
                Frame::Other
            }
            _ => Frame::Other,
        };
        self.stack.push(frame);
        Ok(())
    }

    fn read_point(&mut self, record: usize, tag: &str, is_start: bool, attrs: &Attributes) -> XmlPoint {
        let name = match attrs.get("name") {
            Some(name) => name.to_string(),
            None => {
                let fallback = if is_start {
                    format!("Origin_{record}")
                } else {
                    format!("Extremite_{record}")
                };
                self.record_error(ParseError::Missing {
                    record,
                    field: format!("{tag}.name"),
                    fallback: fallback.clone(),
                });
                fallback
            }
        };
        let mut coord = |axis: &str| -> f64 {
            let field = format!("{tag}.{axis}");
            match attrs.get_any_case(axis) {
                None => {
                    self.record_error(ParseError::Missing {
                        record,
                        field,
                        fallback: "0".into(),
                    });
                    0.0
                }
                Some(raw) => match raw.parse::<f64>() {
                    Ok(value) if value.is_finite() => value,
                    _ => {
                        self.record_error(ParseError::InvalidNumber {
                            record,
                            field,
                            value: raw.to_string(),
                            fallback: 0.0,
                        });
                        0.0
                    }
                },
            }
        };
        let position = DVec3::new(coord("x"), coord("y"), coord("z"));
        XmlPoint { name, position }
    }

    fn record_error(&mut self, error: ParseError) {
        log::warn!("{}", error);
        self.report.parse_errors.push(error);
    }

    fn close(&mut self) {
        if let Some(Frame::Network(pending)) = self.stack.pop() {
            self.finish_network(*pending);
        }
    }

    fn finish_network(&mut self, pending: PendingNetwork) {
        let (Some(start), Some(end)) = (pending.start, pending.end) else {
            log::warn!(
                "Network '{}' ohne StartPoint/EndPoint, kein Link erzeugt",
                pending.name
            );
            self.doc.tree.add_child(pending.parent, pending.name);
            return;
        };

        let mut link = LinkRecord::new(
            pending.name.as_str(),
            start.name.as_str(),
            start.position,
            end.name.as_str(),
            end.position,
        );
        link.length = link.span();
        link.section = pending.section;
        let index = self.doc.records.push_link(link);

        let tree = &mut self.doc.tree;
        let leaf = tree.add_leaf(pending.parent, pending.name, Identifier::Link(index));
        tree.add_child(leaf, start.name);
        tree.add_child(leaf, end.name);
    }
}

/// Zählt `<Network`-Elemente für die Fortschrittsanzeige.
fn count_networks(content: &str) -> usize {
    content
        .match_indices("<Network")
        .filter(|(i, m)| {
            content[i + m.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_whitespace() || c == '>' || c == '/')
        })
        .count()
}

fn read_attributes(
    reader: &Reader<&[u8]>,
    element: &BytesStart<'_>,
) -> Result<(String, Attributes), quick_xml::Error> {
    let name = element.name();
    let tag = reader.decoder().decode(name.as_ref())?.into_owned();
    let mut attrs = Vec::new();
    for attr in element.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }
    Ok((tag, Attributes(attrs)))
}

/// Parst Netzwerk-XML in `doc` (Records + Tree, noch ohne Shapes).
///
/// `path` dient nur Fehlermeldungen und dem Root-Label.
pub fn parse_network_into(
    doc: &mut Document,
    content: &str,
    path: &Path,
    monitor: &dyn LoadMonitor,
    report: &mut LoadReport,
) -> Result<(), LoadError> {
    let malformed = |message: String| LoadError::Malformed {
        path: path.to_path_buf(),
        message,
    };

    let root_label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| network_tree::ROOT_LABEL.to_string());
    let root = doc.tree.add_root(root_label);

    monitor.begin("Networks", count_networks(content));
    let mut parser = NetworkParser {
        doc,
        report,
        monitor,
        root,
        stack: Vec::new(),
        networks: 0,
    };

    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let (tag, attrs) =
                    read_attributes(&reader, e).map_err(|e| malformed(e.to_string()))?;
                parser.open(&tag, &attrs)?;
            }
            Ok(Event::Empty(ref e)) => {
                let (tag, attrs) =
                    read_attributes(&reader, e).map_err(|e| malformed(e.to_string()))?;
                parser.open(&tag, &attrs)?;
                parser.close();
            }
            Ok(Event::End(_)) => parser.close(),
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(malformed(format!(
                    "XML-Fehler an Position {}: {}",
                    reader.error_position(),
                    err
                )))
            }
            _ => {}
        }
    }
    if !parser.stack.is_empty() {
        return Err(malformed("Unerwartetes Dateiende".into()));
    }

    let networks = parser.networks;
    let nodes_group = doc.tree.add_child(root, network_tree::NODES_GROUP_LABEL);
    network_tree::add_node_leaves(&mut doc.tree, nodes_group, &doc.records);

    report.links = doc.records.link_count();
    report.nodes = doc.records.node_count();
    log::info!(
        "Netzwerk-XML geparst: {} Network-Elemente, {} Links, {} Nodes",
        networks,
        report.links,
        report.nodes
    );
    Ok(())
}
