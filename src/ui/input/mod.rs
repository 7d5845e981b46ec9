//! Viewport-Input-Handling: Pointer-Drag, Klicks und Shift → AppIntent.
//!
//! Positionen werden relativ zur linken oberen Ecke des Viewports geliefert.

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport (laufender Drag, Feinsteuerung).
#[derive(Debug, Default)]
pub struct ViewportInput {
    primary_drag_active: bool,
    last_pointer: Option<Vec2>,
    fine_control: bool,
}

impl ViewportInput {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Läuft gerade ein Drag mit der primären Maustaste?
    pub fn is_dragging(&self) -> bool {
        self.primary_drag_active
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `response` muss mit `Sense::click_and_drag()` alloziert sein.
    pub fn collect_viewport_intents(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (modifiers, press_origin) = ui.input(|i| (i.modifiers, i.pointer.press_origin()));
        let origin = response.rect.min;
        let to_viewport = |pos: egui::Pos2| Vec2::new(pos.x - origin.x, pos.y - origin.y);

        if modifiers.shift != self.fine_control {
            self.fine_control = modifiers.shift;
            events.push(AppIntent::FineControlChanged {
                enabled: modifiers.shift,
            });
        }

        if response.drag_started_by(egui::PointerButton::Primary) {
            // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle)
            if let Some(pos) = press_origin.or_else(|| response.interact_pointer_pos()) {
                let screen_pos = to_viewport(pos);
                events.push(AppIntent::PointerPressed {
                    screen_pos,
                    additive: modifiers.command,
                });
                self.primary_drag_active = true;
                self.last_pointer = Some(screen_pos);
            }
        }

        if self.primary_drag_active && response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let screen_pos = to_viewport(pos);
                if self.last_pointer != Some(screen_pos) {
                    events.push(AppIntent::PointerMoved { screen_pos });
                    self.last_pointer = Some(screen_pos);
                }
            }
        }

        if self.primary_drag_active && response.drag_stopped_by(egui::PointerButton::Primary) {
            let screen_pos = response
                .interact_pointer_pos()
                .map(to_viewport)
                .or(self.last_pointer)
                .unwrap_or(Vec2::ZERO);
            events.push(AppIntent::PointerReleased { screen_pos });
            self.primary_drag_active = false;
            self.last_pointer = None;
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::NodePickRequested {
                    screen_pos: to_viewport(pos),
                    additive: modifiers.command,
                });
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(input: &mut ViewportInput, modifiers: egui::Modifiers) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let raw_input = egui::RawInput {
            modifiers,
            ..Default::default()
        };

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response =
                    ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
                events = input.collect_viewport_intents(ui, &response);
            });
        });
        events
    }

    #[test]
    fn shift_toggles_fine_control_once() {
        let mut input = ViewportInput::new();
        let shift = egui::Modifiers {
            shift: true,
            ..Default::default()
        };

        let events = run_frame(&mut input, shift);
        assert!(matches!(
            events[..],
            [AppIntent::FineControlChanged { enabled: true }]
        ));

        assert!(run_frame(&mut input, shift).is_empty());

        let events = run_frame(&mut input, egui::Modifiers::default());
        assert!(matches!(
            events[..],
            [AppIntent::FineControlChanged { enabled: false }]
        ));
    }

    #[test]
    fn idle_frame_without_pointer_emits_nothing() {
        let mut input = ViewportInput::new();
        assert!(run_frame(&mut input, egui::Modifiers::default()).is_empty());
        assert!(!input.is_dragging());
    }
}
