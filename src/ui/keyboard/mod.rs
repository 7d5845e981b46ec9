//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Ob ein Intent im aktuellen Zustand greift, entscheidet das Intent-Mapping.

use crate::app::AppIntent;
use crate::editing::{AxisMask, GizmoMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+S (Speicherpunkt), Ctrl+A (Alle selektieren), Escape (Abbrechen)
    let (key_s_pressed, key_a_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::A),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_s_pressed && !modifiers.shift {
        events.push(AppIntent::SaveCheckpointRequested);
    }

    if modifiers.command && key_a_pressed {
        events.push(AppIntent::SelectAllRequested);
    }

    if key_escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    if modifiers.command {
        return events;
    }

    // Gizmo: W/E/R Modus, X/Y/Z Achse, Leertaste Raum
    let (key_w, key_e, key_r, key_x, key_space) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::W),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::X),
            i.key_pressed(egui::Key::Space),
        )
    });

    for (pressed, mode) in [
        (key_w, GizmoMode::Translate),
        (key_e, GizmoMode::Rotate),
        (key_r, GizmoMode::Scale),
    ] {
        if pressed {
            events.push(AppIntent::GizmoModeRequested { mode });
        }
    }

    for (pressed, axis) in [
        (key_x, AxisMask::X),
        (key_y_pressed, AxisMask::Y),
        (key_z_pressed, AxisMask::Z),
    ] {
        if pressed {
            events.push(AppIntent::AxisToggleRequested { axis });
        }
    }

    if key_space {
        events.push(AppIntent::TransformSpaceToggleRequested);
    }

    events
}

#[cfg(test)]
mod tests;
