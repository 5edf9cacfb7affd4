//! Tree-Panel (linke Seitenleiste): hierarchische Sicht auf das Dokument.

use crate::app::{AppIntent, AppState};
use crate::core::{TreeIndex, TreeNodeId};
use std::collections::HashSet;

/// Gemeinsame Parameter für das rekursive Zeichnen.
struct TreeView<'a> {
    tree: &'a TreeIndex,
    selected: Option<TreeNodeId>,
    focus: Option<TreeNodeId>,
    open_path: HashSet<TreeNodeId>,
    salt: String,
}

/// Rendert den Tree Index und gibt Klick-Events zurück.
///
/// Ein gesetzter `tree_focus` klappt einmalig die Vorfahren des Nodes auf
/// und scrollt ihn in den sichtbaren Bereich.
pub fn render_tree_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let focus = state.ui.selection.tree_focus.take();

    egui::SidePanel::left("tree_panel")
        .default_width(260.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Netzwerk");
            ui.separator();

            let tree = &state.document.tree;
            if tree.is_empty() {
                ui.label(if state.is_loading() {
                    "Lädt..."
                } else {
                    "Kein Dokument geladen"
                });
                return;
            }

            let view = TreeView {
                tree,
                selected: state.selection.selected_node(),
                focus,
                open_path: focus
                    .map(|node| tree.ancestors(node).into_iter().collect())
                    .unwrap_or_default(),
                salt: state.document.display_name().unwrap_or_default(),
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for &root in tree.roots() {
                        render_node(ui, &view, root, &mut events);
                    }
                });
        });

    events
}

fn render_node(
    ui: &mut egui::Ui,
    view: &TreeView<'_>,
    node_id: TreeNodeId,
    events: &mut Vec<AppIntent>,
) {
    let Some(node) = view.tree.node(node_id) else {
        return;
    };
    let is_selected = view.selected == Some(node_id);

    if node.children.is_empty() {
        let response = ui.selectable_label(is_selected, node.label.as_str());
        if response.clicked() {
            events.push(AppIntent::TreeNodeClicked { node: node_id });
        }
        if view.focus == Some(node_id) {
            response.scroll_to_me(Some(egui::Align::Center));
        }
        return;
    }

    let mut text = egui::RichText::new(&node.label);
    if is_selected {
        text = text.strong().color(ui.visuals().selection.stroke.color);
    }

    let mut header = egui::CollapsingHeader::new(text).id_salt((&view.salt, node_id));
    if view.open_path.contains(&node_id) {
        header = header.open(Some(true));
    }

    let response = header.show(ui, |ui| {
        for &child in &node.children {
            render_node(ui, view, child, events);
        }
    });

    if response.header_response.clicked() {
        events.push(AppIntent::TreeNodeClicked { node: node_id });
    }
    if view.focus == Some(node_id) {
        response.header_response.scroll_to_me(Some(egui::Align::Center));
    }
}
