//! Selection Controller: Tree-Klicks und Viewport-Picks → Highlight + Info.
//!
//! Beide Eingabequellen laufen durch dieselbe Zustandsmaschine, sodass immer
//! höchstens eine Highlight-Menge aktiv ist.

use super::{info, Document, Identifier, InfoText, TreeNodeId};
use crate::kernel::Shape;

/// Aktueller Selektionszustand
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nichts hervorgehoben
    #[default]
    Idle,
    /// Eine Gruppe oder ein Shape ist hervorgehoben
    Selected {
        /// Hervorgehobene Bezeichner (nur registrierte)
        ids: Vec<Identifier>,
        /// Tree-Node, der die Selektion repräsentiert
        node: Option<TreeNodeId>,
    },
}

/// Ergebnis eines Selektions-Ereignisses für die Anzeige
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Neue Selektion aktiv
    Selected {
        /// Hervorgehobene Bezeichner
        ids: Vec<Identifier>,
        /// Info-Text des ersten Bezeichners
        info: InfoText,
        /// Tree-Node, der fokussiert werden soll
        focus: Option<TreeNodeId>,
    },
    /// Selektion aufgehoben, Standard-Status anzeigen
    Deselected,
    /// Nichts geändert
    Unchanged,
}

/// Zustandsmaschine für die Selektion.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, SelectionState::Idle)
    }

    /// Aktuell hervorgehobene Bezeichner.
    pub fn selected_ids(&self) -> &[Identifier] {
        match &self.state {
            SelectionState::Idle => &[],
            SelectionState::Selected { ids, .. } => ids,
        }
    }

    /// Tree-Node der aktuellen Selektion.
    pub fn selected_node(&self) -> Option<TreeNodeId> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Selected { node, .. } => *node,
        }
    }

    /// Klick auf einen Tree-Node.
    ///
    /// Erneuter Klick auf den selektierten Node hebt die Selektion auf.
    /// Nodes ohne registrierte Bezeichner deselektieren.
    pub fn tree_click(&mut self, doc: &mut Document, node: TreeNodeId) -> SelectionChange {
        if self.selected_node() == Some(node) {
            return self.deselect(doc);
        }

        let ids: Vec<Identifier> = doc
            .tree
            .node(node)
            .map(|n| {
                n.ids
                    .iter()
                    .filter(|id| doc.registry.contains(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if ids.is_empty() {
            log::debug!("Tree-Node {} trägt keine registrierten Shapes", node);
            return self.deselect(doc);
        }
        self.select(doc, ids, Some(node))
    }

    /// Pick im Viewport (`None` = Klick ins Leere).
    ///
    /// Nicht registrierte Shapes deselektieren, erneutes Picken desselben
    /// Bezeichners ändert nichts.
    pub fn pick(&mut self, doc: &mut Document, picked: Option<&Shape>) -> SelectionChange {
        let Some(id) = picked.and_then(|shape| doc.registry.lookup_by_identity(shape)) else {
            return self.deselect(doc);
        };
        let id = id.clone();

        if self.selected_ids() == std::slice::from_ref(&id) {
            return SelectionChange::Unchanged;
        }
        let leaf = doc.tree.leaf_for(&id);
        self.select(doc, vec![id], leaf)
    }

    /// Hebt die aktuelle Selektion auf.
    pub fn deselect(&mut self, doc: &mut Document) -> SelectionChange {
        match std::mem::take(&mut self.state) {
            SelectionState::Idle => SelectionChange::Unchanged,
            SelectionState::Selected { ids, .. } => {
                doc.registry.set_highlighted(&ids, false);
                SelectionChange::Deselected
            }
        }
    }

    /// Vergisst die Selektion ohne Farbänderung (Dokument wurde ersetzt).
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }

    fn select(
        &mut self,
        doc: &mut Document,
        ids: Vec<Identifier>,
        node: Option<TreeNodeId>,
    ) -> SelectionChange {
        if let SelectionState::Selected { ids: previous, .. } = std::mem::take(&mut self.state) {
            doc.registry.set_highlighted(&previous, false);
        }
        doc.registry.set_highlighted(&ids, true);

        let info = info::describe(doc, &ids).unwrap_or_else(|| InfoText {
            body: format!("Selected shape ID: {}", ids[0]),
            status: format!("Selected shape: {}", ids[0]),
        });
        self.state = SelectionState::Selected {
            ids: ids.clone(),
            node,
        };
        SelectionChange::Selected {
            ids,
            info,
            focus: node,
        }
    }
}
