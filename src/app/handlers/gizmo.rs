//! Handler für Gizmo-Einstellungen und Werkzeugwahl.

use crate::app::{AppState, EditorTool};
use crate::editing::{AxisMask, GizmoMode};

/// Setzt den Gizmo-Modus.
pub fn set_mode(state: &mut AppState, mode: GizmoMode) {
    state.transform_tool.set_mode(mode);
    log::debug!("Gizmo-Modus: {}", mode.label());
}

/// Schaltet eine Achs-Einschränkung um.
pub fn toggle_axis(state: &mut AppState, axis: AxisMask) {
    state.transform_tool.toggle_axis(axis);
}

/// Wechselt zwischen Welt- und Lokalraum.
pub fn toggle_space(state: &mut AppState) {
    state.transform_tool.toggle_space();
}

/// Setzt die Feinsteuerung.
pub fn set_fine_control(state: &mut AppState, enabled: bool) {
    state.transform_tool.set_fine_control(enabled);
}

/// Setzt das aktive Editor-Werkzeug.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.active_tool = tool;
    log::info!("Werkzeug gewechselt: {:?}", tool);
}
