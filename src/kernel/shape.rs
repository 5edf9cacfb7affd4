//! Topologie-Handles des Geometrie-Kernels.
//!
//! Ein [`Shape`] ist ein billig klonbarer Verweis auf eine unveränderliche
//! Topologie-Struktur (Compound → Solid → Shell → Face → Edge → Vertex).
//! Zwei Handles gelten als "gleich" (`is_same`), wenn sie auf dieselbe
//! zugrunde liegende Struktur zeigen – unabhängig davon, wie oft das Handle
//! geklont oder neu verpackt wurde.

use glam::DVec3;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SHAPE_KEY: AtomicU64 = AtomicU64::new(1);

/// Topologische Art eines Shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopoKind {
    /// Beliebige Sammlung von Shapes
    Compound,
    /// Geschlossener Körper
    Solid,
    /// Zusammenhängende Flächenmenge
    Shell,
    /// Einzelne (planare) Facette
    Face,
    /// Kante zwischen zwei Vertices
    Edge,
    /// Punkt
    Vertex,
}

impl TopoKind {
    /// Anzeigename für Tree und Info-Panel.
    pub fn label(self) -> &'static str {
        match self {
            TopoKind::Compound => "Compound",
            TopoKind::Solid => "Solid",
            TopoKind::Shell => "Shell",
            TopoKind::Face => "Face",
            TopoKind::Edge => "Edge",
            TopoKind::Vertex => "Vertex",
        }
    }

    /// Kleingeschriebener Präfix für generierte IDs.
    pub fn slug(self) -> &'static str {
        match self {
            TopoKind::Compound => "compound",
            TopoKind::Solid => "solid",
            TopoKind::Shell => "shell",
            TopoKind::Face => "face",
            TopoKind::Edge => "edge",
            TopoKind::Vertex => "vertex",
        }
    }
}

/// Kernel-native Identität eines Shapes (stabil für die Lebensdauer der Struktur).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeKey(u64);

impl ShapeKey {
    fn next() -> Self {
        Self(NEXT_SHAPE_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Rohwert der Identität.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Geometrie, die an einem Topologie-Element hängt
#[derive(Debug, Clone)]
pub enum Geometry {
    /// Reine Topologie (Compound, Solid, Shell)
    None,
    /// Vertex-Position
    Point(DVec3),
    /// Gerade Kante
    Segment(DVec3, DVec3),
    /// Konvexes, planares Polygon (Face)
    Polygon(Vec<DVec3>),
    /// Tessellierte Kurve (Edge aus einer CAD-Datei)
    Polyline(Vec<DVec3>),
    /// Tessellierte Fläche (Face aus einer CAD-Datei)
    Mesh(Vec<[DVec3; 3]>),
}

#[derive(Debug)]
struct TShape {
    key: ShapeKey,
    kind: TopoKind,
    geometry: Geometry,
    children: Vec<Shape>,
}

/// Handle auf ein Topologie-Element
#[derive(Debug, Clone)]
pub struct Shape(Arc<TShape>);

impl Shape {
    fn new(kind: TopoKind, geometry: Geometry, children: Vec<Shape>) -> Self {
        Self(Arc::new(TShape {
            key: ShapeKey::next(),
            kind,
            geometry,
            children,
        }))
    }

    /// Erstellt einen Vertex.
    pub fn vertex(position: DVec3) -> Self {
        Self::new(TopoKind::Vertex, Geometry::Point(position), Vec::new())
    }

    /// Erstellt eine gerade Kante zwischen zwei Vertices.
    pub fn edge(start: &Shape, end: &Shape) -> Self {
        let a = start.point().unwrap_or(DVec3::ZERO);
        let b = end.point().unwrap_or(DVec3::ZERO);
        Self::new(
            TopoKind::Edge,
            Geometry::Segment(a, b),
            vec![start.clone(), end.clone()],
        )
    }

    /// Erstellt eine planare Facette aus Polygon-Punkten und ihren Randkanten.
    pub fn face(polygon: Vec<DVec3>, edges: Vec<Shape>) -> Self {
        Self::new(TopoKind::Face, Geometry::Polygon(polygon), edges)
    }

    /// Erstellt eine Kante entlang einer tessellierten Kurve.
    ///
    /// `points` enthält Start- und Endpunkt; bei weniger als zwei Punkten
    /// wird die Gerade zwischen den Vertices verwendet.
    pub fn polyline_edge(start: &Shape, end: &Shape, points: Vec<DVec3>) -> Self {
        let points = if points.len() >= 2 {
            points
        } else {
            vec![
                start.point().unwrap_or(DVec3::ZERO),
                end.point().unwrap_or(DVec3::ZERO),
            ]
        };
        Self::new(
            TopoKind::Edge,
            Geometry::Polyline(points),
            vec![start.clone(), end.clone()],
        )
    }

    /// Erstellt eine tessellierte Fläche aus Dreiecken und ihren Randkanten.
    pub fn mesh_face(triangles: Vec<[DVec3; 3]>, edges: Vec<Shape>) -> Self {
        Self::new(TopoKind::Face, Geometry::Mesh(triangles), edges)
    }

    /// Fasst Faces zu einer Shell zusammen.
    pub fn shell(faces: Vec<Shape>) -> Self {
        Self::new(TopoKind::Shell, Geometry::None, faces)
    }

    /// Erstellt einen Solid aus Shells.
    pub fn solid(shells: Vec<Shape>) -> Self {
        Self::new(TopoKind::Solid, Geometry::None, shells)
    }

    /// Fasst beliebige Shapes zu einem Compound zusammen.
    pub fn compound(children: Vec<Shape>) -> Self {
        Self::new(TopoKind::Compound, Geometry::None, children)
    }

    /// Topologische Art.
    pub fn kind(&self) -> TopoKind {
        self.0.kind
    }

    /// Kernel-native Identität.
    pub fn key(&self) -> ShapeKey {
        self.0.key
    }

    /// Angehängte Geometrie.
    pub fn geometry(&self) -> &Geometry {
        &self.0.geometry
    }

    /// Direkte Unter-Shapes.
    pub fn children(&self) -> &[Shape] {
        &self.0.children
    }

    /// Position eines Vertex (sonst `None`).
    pub fn point(&self) -> Option<DVec3> {
        match self.0.geometry {
            Geometry::Point(p) => Some(p),
            _ => None,
        }
    }

    /// Prüft, ob beide Handles dieselbe zugrunde liegende Struktur referenzieren.
    pub fn is_same(&self, other: &Shape) -> bool {
        self.0.key == other.0.key
    }

    /// Hash der Identität im Bereich `1..=upper` (0 bei `upper == 0`).
    pub fn hash_code(&self, upper: u64) -> u64 {
        if upper == 0 {
            return 0;
        }
        // splitmix64-Finalizer, damit aufeinanderfolgende Keys streuen
        let mut z = self.0.key.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        z % upper + 1
    }

    /// Sammelt alle Unter-Shapes der gewünschten Art (Pre-Order).
    ///
    /// Wie ein Topologie-Explorer: in gefundene Shapes wird nicht weiter
    /// abgestiegen, geteilte Unter-Shapes können mehrfach auftauchen.
    pub fn explore(&self, kind: TopoKind) -> Vec<Shape> {
        let mut found = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(current) = stack.pop() {
            if current.kind() == kind {
                found.push(current);
                continue;
            }
            for child in current.children().iter().rev() {
                stack.push(child.clone());
            }
        }
        found
    }

    /// Dreiecke der eigenen Face-Geometrie (Polygone per Fächer).
    pub fn face_triangles(&self) -> Vec<[DVec3; 3]> {
        match self.geometry() {
            Geometry::Polygon(points) => (1..points.len().saturating_sub(1))
                .map(|i| [points[0], points[i], points[i + 1]])
                .collect(),
            Geometry::Mesh(triangles) => triangles.clone(),
            _ => Vec::new(),
        }
    }

    /// Liniensegmente der eigenen Kanten-Geometrie.
    pub fn edge_segments(&self) -> Vec<[DVec3; 2]> {
        match self.geometry() {
            Geometry::Segment(a, b) => vec![[*a, *b]],
            Geometry::Polyline(points) => points.windows(2).map(|w| [w[0], w[1]]).collect(),
            _ => Vec::new(),
        }
    }

    /// Triangulierung aller Faces des Shapes.
    pub fn triangles(&self) -> Vec<[DVec3; 3]> {
        self.explore(TopoKind::Face)
            .iter()
            .flat_map(|face| face.face_triangles())
            .collect()
    }

    /// Liniensegmente aller Kanten, die nicht Teil eines Faces sind.
    ///
    /// Für reine Kanten-Shapes (oder Compounds aus Kanten) die darstellbare Geometrie.
    pub fn free_segments(&self) -> Vec<[DVec3; 2]> {
        if self.kind() == TopoKind::Face || !self.explore(TopoKind::Face).is_empty() {
            return Vec::new();
        }
        self.explore(TopoKind::Edge)
            .iter()
            .flat_map(|edge| edge.edge_segments())
            .collect()
    }

    /// Achsenparallele Bounding-Box über alle Vertices.
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let mut result: Option<(DVec3, DVec3)> = None;
        let mut include = |p: DVec3| {
            result = Some(match result {
                Some((min, max)) => (min.min(p), max.max(p)),
                None => (p, p),
            });
        };

        match self.geometry() {
            Geometry::Point(p) => include(*p),
            Geometry::Segment(a, b) => {
                include(*a);
                include(*b);
            }
            Geometry::Polygon(points) | Geometry::Polyline(points) => {
                points.iter().copied().for_each(&mut include)
            }
            Geometry::Mesh(triangles) => triangles.iter().flatten().copied().for_each(&mut include),
            Geometry::None => {}
        }
        for vertex in self.explore(TopoKind::Vertex) {
            if let Some(p) = vertex.point() {
                include(p);
            }
        }
        result
    }
}
