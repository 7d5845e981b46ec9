//! Spectral Scene Editor.
//!
//! Desktop-Shell um den Editier-Kern: Selektion, Transform-Gizmo und
//! Undo/Redo über einer orthografischen Vorschau der Szene.

use eframe::egui;
use glam::{Mat4, Vec2, Vec3};
use spectral_scene_editor::core::{Aabb, Material, Mesh, Scene, SceneNode};
use spectral_scene_editor::shared::PREVIEW_PIXELS_PER_UNIT;
use spectral_scene_editor::{
    ui, AppController, AppIntent, AppState, EditorOptions, PreviewRenderer, RenderPort,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Spectral Scene Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Spectral Scene Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Spectral Scene Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: PreviewRenderer,
    input: ui::ViewportInput,
    show_options: bool,
    pending: Vec<AppIntent>,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut renderer =
            PreviewRenderer::new(PREVIEW_PIXELS_PER_UNIT, editor_options.pick_radius_px);
        renderer.load_scene(demo_scene());

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer,
            input: ui::ViewportInput::new(),
            show_options: false,
            // Selektion und Verlauf an die geladene Szene binden
            pending: vec![AppIntent::SceneReloaded],
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = std::mem::take(&mut self.pending);
        events.extend(self.collect_ui_events(ctx));

        let has_events = !events.is_empty();

        self.process_events(events);

        // Beobachter (Panels) lesen den Zustand direkt, Events nur fürs Log
        for event in self.state.take_events() {
            log::trace!("{:?}", event);
        }

        self.renderer.set_pick_radius(self.state.options.pick_radius_px);

        if has_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state, &mut self.show_options));
        events.extend(ui::render_scene_tree_panel(
            ctx,
            &self.state,
            self.renderer.scene(),
        ));
        events.extend(ui::render_properties_panel(
            ctx,
            &self.state,
            self.renderer.scene(),
        ));
        events.extend(ui::show_options_dialog(
            ctx,
            &self.state,
            &mut self.show_options,
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                self.renderer
                    .set_viewport_size(Vec2::new(rect.width(), rect.height()));

                events.extend(ui::collect_keyboard_intents(ui));
                events.extend(self.input.collect_viewport_intents(ui, &response));

                self.paint_preview(ui.painter(), rect);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) =
                self.controller
                    .handle_intent(&mut self.state, &mut self.renderer, event)
            {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn paint_preview(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

        let Some(scene) = self.renderer.scene() else {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Keine Szene geladen",
                egui::FontId::proportional(20.0),
                egui::Color32::WHITE,
            );
            return;
        };

        let to_screen = |p: Vec2| rect.min + egui::vec2(p.x, p.y);
        let primary = self.state.selection.primary();

        for (id, node) in scene.nodes.iter().enumerate() {
            let selected = self.state.selection.contains(id);
            let color = match (selected, primary == Some(id)) {
                (true, true) => egui::Color32::from_rgb(255, 170, 40),
                (true, false) => egui::Color32::from_rgb(230, 200, 90),
                _ => egui::Color32::from_gray(170),
            };

            if let Some(bounds) = scene.mesh_of(id).and_then(Mesh::local_bounds) {
                let (min, max) = self
                    .renderer
                    .project_bounds(&bounds.transformed(&node.transform));
                painter.rect_stroke(
                    egui::Rect::from_min_max(to_screen(min), to_screen(max)),
                    0.0,
                    egui::Stroke::new(1.5, color),
                    egui::StrokeKind::Middle,
                );
            }

            let center = to_screen(self.renderer.project(node.world_position()));
            painter.circle_filled(center, 4.0, color);
            painter.text(
                center + egui::vec2(6.0, -6.0),
                egui::Align2::LEFT_BOTTOM,
                &node.name,
                egui::FontId::proportional(12.0),
                color,
            );
        }

        let bounds = self.state.selection.compute_bounds(Some(scene));
        if bounds != Aabb::ZERO {
            let (min, max) = self.renderer.project_bounds(&bounds);
            painter.rect_stroke(
                egui::Rect::from_min_max(to_screen(min), to_screen(max)).expand(4.0),
                2.0,
                egui::Stroke::new(1.0, egui::Color32::from_rgb(80, 160, 255)),
                egui::StrokeKind::Outside,
            );
        }
    }
}

/// Kleine Beispielszene: drei Quader und ein Licht-Node ohne Mesh.
fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    let red = scene.add_material(Material {
        base_color: Vec3::new(0.8, 0.1, 0.1),
        ..Material::default()
    });
    let glass = scene.add_material(Material {
        base_color: Vec3::splat(0.95),
        roughness: 0.05,
        transmission: 0.9,
        ..Material::default()
    });
    let metal = scene.add_material(Material {
        base_color: Vec3::new(0.9, 0.75, 0.4),
        roughness: 0.2,
        metallic: 1.0,
        ..Material::default()
    });

    let unit = |material| Mesh::cuboid(Vec3::splat(-1.0), Vec3::splat(1.0), Some(material));
    let red_mesh = scene.add_mesh(unit(red));
    let glass_mesh = scene.add_mesh(unit(glass));
    let metal_mesh = scene.add_mesh(Mesh::cuboid(
        Vec3::new(-2.0, -0.5, -1.0),
        Vec3::new(2.0, 0.5, 1.0),
        Some(metal),
    ));

    scene.add_node(SceneNode::new(
        "Würfel",
        Mat4::from_translation(Vec3::new(-5.0, 0.0, 0.0)),
        Some(red_mesh),
    ));
    scene.add_node(SceneNode::new(
        "Glasblock",
        Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)),
        Some(glass_mesh),
    ));
    scene.add_node(SceneNode::new(
        "Messingbalken",
        Mat4::from_translation(Vec3::new(5.0, -2.0, 0.0)),
        Some(metal_mesh),
    ));
    scene.add_node(SceneNode::new(
        "Punktlicht",
        Mat4::from_translation(Vec3::new(0.0, 6.0, 2.0)),
        None,
    ));

    scene
}
