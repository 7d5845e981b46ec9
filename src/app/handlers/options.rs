//! Handler für Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und wendet Verlaufs- und Gizmo-Werte sofort an.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.history.set_undo_limit(options.undo_limit);
    state
        .transform_tool
        .set_sensitivity(options.transform_sensitivity());
    state.options = options;
}

/// Speichert die aktuellen Optionen neben der Binary.
pub fn save(state: &AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&EditorOptions::config_path())
}
