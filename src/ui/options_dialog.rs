//! Optionen-Dialog für Verlauf, Gizmo-Empfindlichkeit und Picking.

use crate::app::{AppIntent, AppState};
use crate::shared::EditorOptions;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
///
/// `open` gehört der Shell; das Schließen-Kreuz setzt es auf `false`.
pub fn show_options_dialog(
    ctx: &egui::Context,
    state: &AppState,
    open: &mut bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !*open {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .open(open)
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            // ── Verlauf ─────────────────────────────────────────
            ui.collapsing("Verlauf", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Undo-Schritte (0 = unbegrenzt):");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.undo_limit).range(0..=10_000))
                        .changed();
                });
                changed |= ui
                    .checkbox(&mut opts.selection_undo, "Selektion rückgängig machbar")
                    .changed();
            });

            // ── Gizmo ───────────────────────────────────────────
            ui.collapsing("Gizmo", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Verschieben (Einheiten/px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.translate_sensitivity)
                                .range(0.001..=1.0)
                                .speed(0.001),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Drehen (Grad/px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.rotate_sensitivity_deg)
                                .range(0.01..=10.0)
                                .speed(0.01),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Skalieren (Faktor/px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.scale_sensitivity)
                                .range(0.0001..=0.1)
                                .speed(0.0005),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Feinsteuerung (Shift):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.fine_control_factor)
                                .range(0.01..=1.0)
                                .speed(0.01),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Min. Skalierung:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.min_scale_factor)
                                .range(0.001..=0.5)
                                .speed(0.001),
                        )
                        .changed();
                });
            });

            // ── Viewport ────────────────────────────────────────
            ui.collapsing("Viewport", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Pick-Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.pick_radius_px)
                                .range(4.0..=50.0)
                                .speed(0.5),
                        )
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::OptionsChanged {
                        options: Box::new(EditorOptions::default()),
                    });
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}
