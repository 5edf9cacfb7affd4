use crate::core::TreeNodeId;

/// Selektionsbezogener UI-Zustand (Info-Panel und Tree-Fokus)
#[derive(Debug, Clone, Default)]
pub struct SelectionPanelState {
    /// Inhalt des Info-Panels (leer = keine Selektion)
    pub info_text: String,
    /// Tree-Node, der sichtbar gemacht werden soll (Vorfahren aufklappen)
    pub tree_focus: Option<TreeNodeId>,
}

impl SelectionPanelState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            info_text: String::new(),
            tree_focus: None,
        }
    }

    /// Gibt `true` zurück, wenn das Info-Panel eine Selektion beschreibt.
    pub fn has_info(&self) -> bool {
        !self.info_text.is_empty()
    }

    /// Leert Info-Panel und Tree-Fokus.
    pub fn clear(&mut self) {
        self.info_text.clear();
        self.tree_focus = None;
    }
}
