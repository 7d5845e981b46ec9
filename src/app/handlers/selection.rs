//! Handler für Selektions-Operationen.

use crate::app::AppState;
use crate::core::NodeId;
use crate::editing::{CommandContext, EditCommand, SelectionSet};
use crate::render::RenderPort;
use glam::Vec2;

/// Legt einen Selektions-Command ab, wenn Selektions-Undo aktiv ist und
/// sich die Selektion geändert hat.
fn record_if_selection_changed(
    state: &mut AppState,
    renderer: &mut dyn RenderPort,
    old_selection: SelectionSet,
) {
    if !state.options.selection_undo || &old_selection == state.selection.selected() {
        return;
    }

    let new_selection = state.selection.selected().clone();
    let mut ctx = CommandContext::new(renderer, &mut state.selection);
    state
        .history
        .push(EditCommand::selection(old_selection, new_selection), &mut ctx);
}

/// Hit-Test im Renderer. Treffer wird selektiert, ein Fehlklick ohne
/// Zusatztaste hebt die Selektion auf.
pub fn pick_node(
    state: &mut AppState,
    renderer: &mut dyn RenderPort,
    screen_pos: Vec2,
    additive: bool,
) {
    let old = state.selection.selected().clone();
    match renderer.pick_node(screen_pos) {
        Some(id) => {
            log::debug!("Pick-Treffer: Node {}", id);
            state.selection.select(id, additive);
        }
        None if !additive => state.selection.clear(),
        None => {}
    }
    record_if_selection_changed(state, renderer, old);
}

/// Ersetzt die Selektion durch die gegebenen Nodes.
pub fn select_nodes(state: &mut AppState, renderer: &mut dyn RenderPort, ids: &[NodeId]) {
    let old = state.selection.selected().clone();
    state.selection.select_multiple(ids.iter().copied());
    record_if_selection_changed(state, renderer, old);
}

/// Schaltet die Selektion eines Nodes um.
pub fn toggle(state: &mut AppState, renderer: &mut dyn RenderPort, id: NodeId) {
    let old = state.selection.selected().clone();
    state.selection.toggle(id);
    record_if_selection_changed(state, renderer, old);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState, renderer: &mut dyn RenderPort) {
    let old = state.selection.selected().clone();
    state.selection.clear();
    record_if_selection_changed(state, renderer, old);
}

/// Selektiert alle Nodes der geladenen Szene.
pub fn select_all(state: &mut AppState, renderer: &mut dyn RenderPort) {
    let node_count = state.selection.node_count();
    let old = state.selection.selected().clone();
    state.selection.select_multiple(0..node_count);
    record_if_selection_changed(state, renderer, old);
    log::info!("Alle {} Nodes selektiert", state.selection.len());
}
