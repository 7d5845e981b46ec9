//! Toolbar für Werkzeug, Gizmo-Modus und Verlauf.

use crate::app::{AppIntent, AppState, EditorTool};
use crate::editing::GizmoMode;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// `show_options` schaltet die Sichtbarkeit des Options-Dialogs der Shell.
pub fn render_toolbar(
    ctx: &egui::Context,
    state: &AppState,
    show_options: &mut bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.active_tool;
    let mode = state.transform_tool.mode();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            for (tool, label) in [
                (EditorTool::Transform, "Bearbeiten"),
                (EditorTool::Navigate, "Navigieren"),
            ] {
                if ui.selectable_label(active == tool, label).clicked() {
                    events.push(AppIntent::SetEditorToolRequested { tool });
                }
            }

            ui.separator();

            for (candidate, hotkey) in [
                (GizmoMode::Translate, "W"),
                (GizmoMode::Rotate, "E"),
                (GizmoMode::Scale, "R"),
            ] {
                let label = format!("{} ({})", candidate.label(), hotkey);
                if ui.selectable_label(mode == candidate, label).clicked() {
                    events.push(AppIntent::GizmoModeRequested { mode: candidate });
                }
            }

            ui.separator();

            let undo = ui.add_enabled(state.can_undo(), egui::Button::new("↶ Rückgängig"));
            if undo.clicked() {
                events.push(AppIntent::UndoRequested);
            }
            undo.on_hover_text(state.history.undo_text());

            let redo = ui.add_enabled(state.can_redo(), egui::Button::new("↷ Wiederholen"));
            if redo.clicked() {
                events.push(AppIntent::RedoRequested);
            }
            redo.on_hover_text(state.history.redo_text());

            ui.separator();

            ui.toggle_value(show_options, "⚙ Optionen");
        });
    });

    events
}
