//! Shape Registry: Zuordnung Bezeichner ↔ Shape-Handle mit Farbzustand.
//!
//! Die Registry besitzt die Geometrie nicht, sie hält nur Handles und den
//! Highlight-Zustand. Farbwechsel bauen keine Geometrie neu auf, sondern
//! erhöhen lediglich die Redraw-Generation (einmal pro Batch).

use super::Identifier;
use crate::kernel::{Shape, ShapeKey};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Farben für registrierte Shapes (RGBA)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePalette {
    /// Node-Kugeln im Normalzustand
    pub node_default: [f32; 4],
    /// Link-Zylinder im Normalzustand
    pub link_default: [f32; 4],
    /// Importierte Sub-Shapes im Normalzustand
    pub imported_default: [f32; 4],
    /// Hervorgehobene Nodes
    pub node_highlight: [f32; 4],
    /// Hervorgehobene Links und importierte Shapes
    pub shape_highlight: [f32; 4],
}

impl Default for ShapePalette {
    fn default() -> Self {
        Self {
            node_default: [1.0, 0.0, 0.0, 1.0],
            link_default: [0.0, 0.0, 1.0, 1.0],
            imported_default: [0.8, 0.8, 0.8, 1.0],
            node_highlight: [0.0, 1.0, 0.0, 1.0],
            shape_highlight: [1.0, 1.0, 0.0, 1.0],
        }
    }
}

impl ShapePalette {
    /// Standardfarbe je Bezeichner-Art.
    pub fn default_for(&self, id: &Identifier) -> [f32; 4] {
        match id {
            Identifier::Node(_) => self.node_default,
            Identifier::Link(_) => self.link_default,
            Identifier::Imported(_) => self.imported_default,
        }
    }

    /// Highlight-Farbe je Bezeichner-Art.
    pub fn highlight_for(&self, id: &Identifier) -> [f32; 4] {
        match id {
            Identifier::Node(_) => self.node_highlight,
            Identifier::Link(_) | Identifier::Imported(_) => self.shape_highlight,
        }
    }
}

#[derive(Debug, Clone)]
struct RegistryEntry {
    shape: Shape,
    highlighted: bool,
}

/// Read-only Sicht auf einen Registry-Eintrag
#[derive(Debug, Clone, Copy)]
pub struct RegisteredShape<'a> {
    /// Bezeichner
    pub id: &'a Identifier,
    /// Shape-Handle
    pub shape: &'a Shape,
    /// Aktuelle Anzeigefarbe
    pub color: [f32; 4],
    /// Highlight-Zustand
    pub highlighted: bool,
}

/// Registry aller darstellbaren Shapes des aktuellen Dokuments.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    entries: IndexMap<Identifier, RegistryEntry>,
    by_key: HashMap<ShapeKey, Identifier>,
    palette: ShapePalette,
    generation: u64,
}

impl ShapeRegistry {
    /// Erstellt eine leere Registry mit der angegebenen Palette.
    pub fn new(palette: ShapePalette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Registriert `shape` unter `id` (überschreibt einen bestehenden Eintrag).
    pub fn register(&mut self, id: Identifier, shape: Shape) {
        let key = shape.key();
        let entry = RegistryEntry {
            shape,
            highlighted: false,
        };
        if let Some(old) = self.entries.insert(id.clone(), entry) {
            let old_key = old.shape.key();
            if self.by_key.get(&old_key) == Some(&id) {
                self.by_key.remove(&old_key);
            }
        }
        self.by_key.insert(key, id);
        self.generation += 1;
    }

    /// Shape zu einem Bezeichner.
    pub fn lookup(&self, id: &Identifier) -> Option<&Shape> {
        self.entries.get(id).map(|e| &e.shape)
    }

    /// Rückwärtssuche über die geometrische Identität.
    ///
    /// Vergleicht die zugrunde liegende Struktur, nicht das Handle selbst.
    /// Ein `None` bedeutet "nicht registriert" und ist kein Fehler.
    pub fn lookup_by_identity(&self, shape: &Shape) -> Option<&Identifier> {
        self.by_key.get(&shape.key())
    }

    /// Gibt `true` zurück, wenn für `id` ein Eintrag existiert.
    pub fn contains(&self, id: &Identifier) -> bool {
        self.entries.contains_key(id)
    }

    /// Setzt den Highlight-Zustand aller `ids`.
    ///
    /// Unbekannte Bezeichner werden übersprungen. Die Redraw-Generation wird
    /// höchstens einmal pro Aufruf erhöht. Gibt die Anzahl geänderter Einträge zurück.
    pub fn set_highlighted(&mut self, ids: &[Identifier], on: bool) -> usize {
        let mut changed = 0;
        for id in ids {
            if let Some(entry) = self.entries.get_mut(id) {
                if entry.highlighted != on {
                    entry.highlighted = on;
                    changed += 1;
                }
            }
        }
        if changed > 0 {
            self.generation += 1;
        }
        changed
    }

    /// Gibt `true` zurück, wenn `id` hervorgehoben ist.
    pub fn is_highlighted(&self, id: &Identifier) -> bool {
        self.entries.get(id).is_some_and(|e| e.highlighted)
    }

    /// Aktuelle Anzeigefarbe eines Eintrags.
    pub fn color_of(&self, id: &Identifier) -> Option<[f32; 4]> {
        self.entries.get(id).map(|entry| self.color(id, entry))
    }

    fn color(&self, id: &Identifier, entry: &RegistryEntry) -> [f32; 4] {
        if entry.highlighted {
            self.palette.highlight_for(id)
        } else {
            self.palette.default_for(id)
        }
    }

    /// Alle Einträge in Registrierungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = RegisteredShape<'_>> {
        self.entries.iter().map(|(id, entry)| RegisteredShape {
            id,
            shape: &entry.shape,
            color: self.color(id, entry),
            highlighted: entry.highlighted,
        })
    }

    /// Alle aktuell hervorgehobenen Bezeichner.
    pub fn highlighted_ids(&self) -> Vec<Identifier> {
        self.entries
            .iter()
            .filter(|(_, e)| e.highlighted)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Anzahl Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn die Registry leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aktive Palette.
    pub fn palette(&self) -> &ShapePalette {
        &self.palette
    }

    /// Ersetzt die Palette (z.B. nach Options-Änderung).
    pub fn set_palette(&mut self, palette: ShapePalette) {
        if self.palette != palette {
            self.palette = palette;
            self.generation += 1;
        }
    }

    /// Redraw-Generation; ändert sich bei jeder sichtbaren Änderung.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Hebt die Generation mindestens auf `floor`.
    pub fn advance_generation_to(&mut self, floor: u64) {
        self.generation = self.generation.max(floor);
    }

    /// Entfernt alle Einträge (vor jedem Reload).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_key.clear();
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn shape() -> Shape {
        Shape::vertex(DVec3::ZERO)
    }

    #[test]
    fn test_register_and_lookup_both_directions() {
        let mut registry = ShapeRegistry::default();
        let s = shape();
        registry.register(Identifier::Link(2), s.clone());

        assert!(registry.lookup(&Identifier::Link(2)).is_some());
        assert_eq!(registry.lookup_by_identity(&s), Some(&Identifier::Link(2)));
        assert_eq!(registry.lookup_by_identity(&shape()), None);
    }

    #[test]
    fn test_register_overwrites_and_drops_old_identity() {
        let mut registry = ShapeRegistry::default();
        let first = shape();
        let second = shape();
        registry.register(Identifier::Node(0), first.clone());
        registry.register(Identifier::Node(0), second.clone());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup_by_identity(&first), None);
        assert_eq!(
            registry.lookup_by_identity(&second),
            Some(&Identifier::Node(0))
        );
    }

    #[test]
    fn test_highlight_round_trip_restores_kind_defaults() {
        let palette = ShapePalette::default();
        let mut registry = ShapeRegistry::new(palette);
        let ids = vec![
            Identifier::Node(0),
            Identifier::Link(0),
            Identifier::Imported("face_0_1".into()),
        ];
        for id in &ids {
            registry.register(id.clone(), shape());
        }

        registry.set_highlighted(&ids, true);
        assert_eq!(registry.color_of(&ids[0]), Some(palette.node_highlight));
        assert_eq!(registry.color_of(&ids[1]), Some(palette.shape_highlight));
        assert_eq!(registry.color_of(&ids[2]), Some(palette.shape_highlight));

        registry.set_highlighted(&ids, false);
        assert_eq!(registry.color_of(&ids[0]), Some(palette.node_default));
        assert_eq!(registry.color_of(&ids[1]), Some(palette.link_default));
        assert_eq!(registry.color_of(&ids[2]), Some([0.8, 0.8, 0.8, 1.0]));
        assert!(registry.highlighted_ids().is_empty());
    }

    #[test]
    fn test_highlight_batch_bumps_generation_once() {
        let mut registry = ShapeRegistry::default();
        registry.register(Identifier::Link(0), shape());
        registry.register(Identifier::Link(1), shape());
        let before = registry.generation();

        let changed = registry.set_highlighted(
            &[Identifier::Link(0), Identifier::Link(1), Identifier::Link(9)],
            true,
        );
        assert_eq!(changed, 2);
        assert_eq!(registry.generation(), before + 1);

        // Erneutes Setzen ändert nichts
        assert_eq!(registry.set_highlighted(&[Identifier::Link(0)], true), 0);
        assert_eq!(registry.generation(), before + 1);
    }

    #[test]
    fn test_clear_forgets_every_identity() {
        let mut registry = ShapeRegistry::default();
        let s = shape();
        registry.register(Identifier::Link(0), s.clone());
        registry.clear();

        assert!(registry.is_empty());
        assert_eq!(registry.lookup_by_identity(&s), None);
    }
}
