//! Properties-Panel (rechte Seitenleiste) für Selektion, Material und Beleuchtung.

use crate::app::{AppIntent, AppState};
use crate::core::{LightingParams, Scene};
use glam::Vec3;

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
///
/// Werte werden auf Arbeitskopien editiert; jede Änderung erzeugt einen
/// Intent mit dem vollständigen neuen Wert.
pub fn render_properties_panel(
    ctx: &egui::Context,
    state: &AppState,
    scene: Option<&Scene>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            let Some(scene) = scene else {
                ui.label("Keine Szene geladen");
                return;
            };

            render_selection_info(ui, state, scene, &mut events);

            ui.separator();
            render_lighting(ui, &scene.lighting, &mut events);
        });

    events
}

fn render_selection_info(
    ui: &mut egui::Ui,
    state: &AppState,
    scene: &Scene,
    events: &mut Vec<AppIntent>,
) {
    let Some(primary) = state.selection.primary() else {
        ui.label("Keine Selektion");
        return;
    };

    if state.selection_count() > 1 {
        ui.label(format!("{} Nodes selektiert", state.selection_count()));
    }

    let Some(node) = scene.node(primary) else {
        return;
    };
    ui.label(format!("Node {}: {}", primary, node.name));
    let pos = node.world_position();
    ui.label(format!("Position: ({:.2}, {:.2}, {:.2})", pos.x, pos.y, pos.z));

    let Some(material_index) = scene.mesh_of(primary).and_then(|mesh| mesh.material_index)
    else {
        ui.label("Kein Material");
        return;
    };
    let Some(material) = scene.material(material_index) else {
        return;
    };

    ui.separator();
    ui.label(format!("Material #{}", material_index));

    let mut edited = *material;
    let mut changed = color_edit(ui, "Grundfarbe:", &mut edited.base_color);
    changed |= drag_value(ui, "Rauheit:", &mut edited.roughness, 0.0..=1.0, 0.01);
    changed |= drag_value(ui, "Metallisch:", &mut edited.metallic, 0.0..=1.0, 0.01);
    changed |= drag_value(ui, "IOR:", &mut edited.ior, 1.0..=3.0, 0.01);
    changed |= drag_value(ui, "Transmission:", &mut edited.transmission, 0.0..=1.0, 0.01);

    if changed {
        events.push(AppIntent::MaterialEditRequested {
            material_index,
            material: edited,
        });
    }

    if state.selection_count() > 1 && ui.button("Material auf Selektion anwenden").clicked() {
        events.push(AppIntent::AssignMaterialToSelectionRequested { material: edited });
    }
}

fn render_lighting(ui: &mut egui::Ui, lighting: &LightingParams, events: &mut Vec<AppIntent>) {
    ui.collapsing("Beleuchtung", |ui| {
        let mut edited = *lighting;
        let mut changed = drag_value(ui, "Sonne:", &mut edited.sun_intensity, 0.0..=20.0, 0.05);
        changed |= color_edit(ui, "Sonnenfarbe:", &mut edited.sun_color);
        changed |= drag_value(ui, "Himmel:", &mut edited.sky_intensity, 0.0..=5.0, 0.01);
        changed |= drag_value(ui, "Ambient:", &mut edited.ambient, 0.0..=1.0, 0.005);

        if changed {
            events.push(AppIntent::LightingEditRequested { lighting: edited });
        }
    });
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für lineares RGB.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut Vec3) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut rgb = color.to_array();
        if ui.color_edit_button_rgb(&mut rgb).changed() {
            *color = Vec3::from_array(rgb);
            changed = true;
        }
    });
    changed
}
