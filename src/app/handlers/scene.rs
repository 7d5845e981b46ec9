//! Handler für Szenen-Bindung, Materialien und Beleuchtung.

use crate::app::AppState;
use crate::core::{LightingParams, Material, MaterialIndex};
use crate::editing::{CommandContext, EditCommand};
use crate::render::RenderPort;
use indexmap::IndexSet;

/// Bindet den Editor an die aktuell im Renderer geladene Szene.
///
/// Eine laufende Geste wird ohne Rücksetzen verworfen, der Verlauf geleert
/// und die Selektion auf die neue Node-Anzahl gebunden.
pub fn bind(state: &mut AppState, renderer: &dyn RenderPort) {
    super::transform::discard(state);
    state.history.clear();

    let node_count = renderer.scene().map_or(0, |scene| scene.node_count());
    state.selection.bind_scene(node_count);
    log::info!("Editor an Szene gebunden: {} Nodes", node_count);
}

/// Ersetzt ein Material als Undo-Schritt. Unveränderte Werte werden ignoriert.
pub fn modify_material(
    state: &mut AppState,
    renderer: &mut dyn RenderPort,
    material_index: MaterialIndex,
    material: Material,
) {
    let Some(old) = renderer
        .scene()
        .and_then(|scene| scene.material(material_index))
        .copied()
    else {
        log::debug!("Material {} existiert nicht", material_index);
        return;
    };
    if old == material {
        return;
    }

    let mut ctx = CommandContext::new(renderer, &mut state.selection);
    state.history.push(
        EditCommand::modify_material(material_index, old, material),
        &mut ctx,
    );
}

/// Weist `material` allen Materialien der selektierten Meshes zu.
///
/// Betroffen ist jeder Material-Slot genau einmal, auch wenn mehrere
/// Nodes ihn teilen. Mehrere Slots werden zu einem Undo-Schritt gebündelt.
pub fn assign_material_to_selection(
    state: &mut AppState,
    renderer: &mut dyn RenderPort,
    material: Material,
) {
    let Some(scene) = renderer.scene() else {
        return;
    };

    let slots: IndexSet<MaterialIndex> = state
        .selection
        .ids()
        .filter_map(|id| scene.mesh_of(id)?.material_index)
        .collect();

    let mut children: Vec<EditCommand> = slots
        .into_iter()
        .filter_map(|index| {
            let old = *scene.material(index)?;
            (old != material).then(|| EditCommand::modify_material(index, old, material))
        })
        .collect();

    let command = match children.len() {
        0 => {
            log::debug!("Materialzuweisung ohne Änderung");
            return;
        }
        1 => children.remove(0),
        n => EditCommand::composite(format!("Material zuweisen ({} Slots)", n), children),
    };

    let mut ctx = CommandContext::new(renderer, &mut state.selection);
    state.history.push(command, &mut ctx);
}

/// Ersetzt die Beleuchtung als Undo-Schritt. Unveränderte Werte werden ignoriert.
pub fn modify_lighting(
    state: &mut AppState,
    renderer: &mut dyn RenderPort,
    lighting: LightingParams,
) {
    let Some(old) = renderer.scene().map(|scene| scene.lighting) else {
        return;
    };
    if old == lighting {
        return;
    }

    let mut ctx = CommandContext::new(renderer, &mut state.selection);
    state
        .history
        .push(EditCommand::modify_lighting(old, lighting), &mut ctx);
}
