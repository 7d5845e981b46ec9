//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::editing::{AxisMask, TransformSpace};

fn axis_label(mask: AxisMask) -> &'static str {
    match mask {
        AxisMask::X => "X",
        AxisMask::Y => "Y",
        AxisMask::Z => "Z",
        AxisMask::XY => "XY",
        AxisMask::XZ => "XZ",
        AxisMask::YZ => "YZ",
        AxisMask::NONE => "-",
        _ => "XYZ",
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let tool = &state.transform_tool;
            let space = match tool.space() {
                TransformSpace::World => "Welt",
                TransformSpace::Local => "Lokal",
            };
            ui.label(format!(
                "Gizmo: {} | Raum: {} | Achsen: {}",
                tool.mode().label(),
                space,
                axis_label(tool.axis_constraint())
            ));
            if tool.fine_control() {
                ui.label("(fein)");
            }

            ui.separator();

            let selected_count = state.selection_count();
            match state.selection.primary() {
                Some(primary) => ui.label(format!(
                    "Selektiert: {} (primär: {})",
                    selected_count, primary
                )),
                None => ui.label("Keine Selektion"),
            };

            ui.separator();

            let dirty = if state.history.is_clean() { "" } else { " *" };
            ui.label(format!(
                "Verlauf: {}/{}{}",
                state.history.index(),
                state.history.len(),
                dirty
            ));
        });
    });
}
