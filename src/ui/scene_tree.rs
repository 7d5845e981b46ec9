//! Szenenbaum (linke Seitenleiste): Liste aller Nodes mit Selektion per Klick.

use crate::app::{AppIntent, AppState};
use crate::core::{NodeId, Scene};

/// Rendert den Szenenbaum und gibt erzeugte Events zurück.
///
/// Klick ersetzt die Selektion, Ctrl+Klick schaltet den Node um.
pub fn render_scene_tree_panel(
    ctx: &egui::Context,
    state: &AppState,
    scene: Option<&Scene>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("scene_tree_panel")
        .default_width(180.0)
        .min_width(140.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Szene");
            ui.separator();

            let Some(scene) = scene else {
                ui.label("Keine Szene geladen");
                return;
            };
            if scene.node_count() == 0 {
                ui.label("Szene enthält keine Nodes");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (id, node) in scene.nodes.iter().enumerate() {
                    let icon = if scene.mesh_of(id).is_some() { "⬛" } else { "💡" };
                    let response = ui.selectable_label(
                        state.selection.contains(id),
                        format!("{} {}", icon, node.name),
                    );
                    if response.clicked() {
                        let toggle = ui.input(|i| i.modifiers.command);
                        events.push(node_click_intent(id, toggle));
                    }
                }
            });
        });

    events
}

fn node_click_intent(id: NodeId, toggle: bool) -> AppIntent {
    if toggle {
        AppIntent::ToggleNodeSelectionRequested { id }
    } else {
        AppIntent::SelectNodesRequested { ids: vec![id] }
    }
}
