//! Handler für die Transform-Geste (Drag mit dem Gizmo).
//!
//! Lebenszyklus: `begin` hält die Start-Transformationen der Selektion fest,
//! `update` schreibt eine Live-Vorschau in den Renderer ohne den Verlauf
//! zu berühren, `end` legt genau einen Undo-Schritt ab, `abort` stellt
//! den Startzustand wieder her.

use crate::app::state::{EditorEvent, TransformGesture};
use crate::app::AppState;
use crate::core::NodeId;
use crate::editing::{CommandContext, EditCommand, GizmoEvent, NodeTransformChange};
use crate::render::RenderPort;
use glam::{Mat4, Vec2};

/// Startet eine Geste für alle selektierten Nodes.
pub fn begin(state: &mut AppState, renderer: &mut dyn RenderPort, screen_pos: Vec2) {
    if state.gesture.is_some() {
        return;
    }
    let Some(scene) = renderer.scene() else {
        log::debug!("Transform-Geste ohne Szene ignoriert");
        return;
    };

    let start: Vec<(NodeId, Mat4)> = state
        .selection
        .ids()
        .filter_map(|id| scene.node(id).map(|node| (id, node.transform)))
        .collect();
    if start.is_empty() {
        return;
    }

    let pivot = state.selection.compute_center(Some(scene));
    state.transform_tool.set_pivot(pivot);
    state
        .transform_tool
        .begin_drag(screen_pos, renderer.camera_basis());

    log::debug!(
        "Transform-Geste gestartet: {} Nodes, Pivot {:?}",
        start.len(),
        pivot
    );
    state.gesture = Some(TransformGesture { start });
}

/// Verarbeitet eine Pointer-Bewegung und aktualisiert die Live-Vorschau.
pub fn update(state: &mut AppState, renderer: &mut dyn RenderPort, screen_pos: Vec2) {
    if state.gesture.is_none() {
        return;
    }

    state.transform_tool.update_drag(screen_pos);
    let events = state.transform_tool.drain_events();
    for event in &events {
        if matches!(event, GizmoEvent::TransformChanged(_)) {
            apply_preview(state, renderer);
        }
    }
    state.events.extend(events.into_iter().map(EditorEvent::Gizmo));
}

/// Schließt die Geste ab und legt die Änderung als einen Undo-Schritt ab.
///
/// Nodes, deren Transformation sich nicht geändert hat, landen nicht im
/// Command. Ohne jede Änderung wird nichts abgelegt.
pub fn end(state: &mut AppState, renderer: &mut dyn RenderPort) {
    let Some(gesture) = state.gesture.take() else {
        return;
    };
    state.transform_tool.end_drag();

    let mut changes: Vec<NodeTransformChange> = gesture
        .start
        .into_iter()
        .filter_map(|(node, old)| {
            let new = renderer.scene()?.node(node)?.transform;
            (new != old).then_some(NodeTransformChange { node, old, new })
        })
        .collect();

    let command = match changes.len() {
        0 => {
            log::debug!("Transform-Geste ohne Änderung, kein Undo-Schritt");
            return;
        }
        1 => EditCommand::TransformNode(changes.remove(0)),
        _ => EditCommand::multi_transform(changes),
    };

    log::info!("Transform abgeschlossen: {}", command.description());
    let mut ctx = CommandContext::new(renderer, &mut state.selection);
    state.history.push(command, &mut ctx);
}

/// Bricht die Geste ab und setzt alle Nodes auf ihre Start-Transformation zurück.
pub fn abort(state: &mut AppState, renderer: &mut dyn RenderPort) {
    let Some(gesture) = state.gesture.take() else {
        return;
    };
    state.transform_tool.cancel_drag();

    let restored = write_changed(renderer, gesture.start);
    log::info!("Transform abgebrochen: {} Nodes zurückgesetzt", restored);
}

/// Verwirft eine laufende Geste ohne Rücksetzen (Szene wurde ersetzt).
pub fn discard(state: &mut AppState) {
    if state.gesture.take().is_some() {
        state.transform_tool.cancel_drag();
        log::debug!("Laufende Transform-Geste verworfen");
    }
}

fn apply_preview(state: &AppState, renderer: &mut dyn RenderPort) {
    let Some(gesture) = state.gesture.as_ref() else {
        return;
    };

    let targets: Vec<(NodeId, Mat4)> = gesture
        .start
        .iter()
        .map(|(node, start)| (*node, state.transform_tool.apply_delta(start)))
        .collect();
    write_changed(renderer, targets);
}

/// Schreibt nur Transformationen, die vom aktuellen Stand abweichen, und
/// invalidiert genau dann, wenn mindestens ein Node geschrieben wurde.
fn write_changed(
    renderer: &mut dyn RenderPort,
    targets: impl IntoIterator<Item = (NodeId, Mat4)>,
) -> usize {
    let changed: Vec<(NodeId, Mat4)> = match renderer.scene() {
        Some(scene) => targets
            .into_iter()
            .filter(|(node, target)| {
                scene
                    .node(*node)
                    .is_some_and(|current| current.transform != *target)
            })
            .collect(),
        None => return 0,
    };

    for (node, transform) in &changed {
        renderer.set_node_transform(*node, *transform);
    }
    if !changed.is_empty() {
        renderer.rebuild_acceleration_structure();
        renderer.reset_accumulation();
    }
    changed.len()
}
