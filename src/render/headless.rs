//! In-Memory-Renderer ohne GPU für Tests, Benchmarks und Headless-Betrieb.

use super::RenderPort;
use crate::core::{CameraBasis, LightingParams, Material, MaterialIndex, NodeId, Scene};
use glam::{Mat4, Vec2};

/// Renderer-Attrappe, die den Szenenzustand hält und Invalidierungen zählt.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    scene: Option<Scene>,
    camera: CameraBasis,
    pick_target: Option<NodeId>,
    sample_count: u32,
    rebuild_count: usize,
    accumulation_resets: usize,
}

impl HeadlessRenderer {
    /// Erstellt einen Renderer ohne Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Renderer mit bereits geladener Szene.
    pub fn with_scene(scene: Scene) -> Self {
        let mut renderer = Self::new();
        renderer.load_scene(scene);
        renderer
    }

    /// Lädt eine Szene und setzt alle Zähler zurück.
    pub fn load_scene(&mut self, scene: Scene) {
        log::info!("Szene geladen: {} Nodes", scene.node_count());
        self.scene = Some(scene);
        self.sample_count = 0;
        self.rebuild_count = 0;
        self.accumulation_resets = 0;
    }

    /// Setzt die Kamera-Basis.
    pub fn set_camera(&mut self, camera: CameraBasis) {
        self.camera = camera;
        self.reset_accumulation();
    }

    /// Legt fest, welchen Node der nächste Hit-Test liefert.
    pub fn set_pick_target(&mut self, target: Option<NodeId>) {
        self.pick_target = target;
    }

    /// Simuliert einen gerenderten Frame (ein Sample pro Pixel mehr).
    pub fn accumulate_frame(&mut self) {
        if self.scene.is_some() {
            self.sample_count += 1;
        }
    }

    /// Bisher akkumulierte Samples seit dem letzten Reset.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Anzahl der BVH-Neuaufbauten seit dem Laden.
    pub fn rebuild_count(&self) -> usize {
        self.rebuild_count
    }

    /// Anzahl der Akkumulations-Resets seit dem Laden.
    pub fn accumulation_reset_count(&self) -> usize {
        self.accumulation_resets
    }

    /// Transformation eines Nodes, `None` bei ungültigem Index.
    pub fn node_transform(&self, node: NodeId) -> Option<Mat4> {
        self.scene
            .as_ref()
            .and_then(|scene| scene.node(node))
            .map(|n| n.transform)
    }
}

impl RenderPort for HeadlessRenderer {
    fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    fn camera_basis(&self) -> CameraBasis {
        self.camera
    }

    fn set_node_transform(&mut self, node: NodeId, transform: Mat4) {
        match self.scene.as_mut().and_then(|scene| scene.nodes.get_mut(node)) {
            Some(target) => target.transform = transform,
            None => log::debug!("set_node_transform: Node {} existiert nicht", node),
        }
    }

    fn update_material(&mut self, index: MaterialIndex, material: &Material) {
        match self
            .scene
            .as_mut()
            .and_then(|scene| scene.materials.get_mut(index))
        {
            Some(target) => *target = *material,
            None => log::debug!("update_material: Material {} existiert nicht", index),
        }
    }

    fn set_lighting(&mut self, lighting: &LightingParams) {
        if let Some(scene) = self.scene.as_mut() {
            scene.lighting = *lighting;
        }
    }

    fn rebuild_acceleration_structure(&mut self) {
        if self.scene.is_some() {
            self.rebuild_count += 1;
        }
    }

    fn reset_accumulation(&mut self) {
        self.sample_count = 0;
        self.accumulation_resets += 1;
    }

    fn pick_node(&self, _screen_pos: Vec2) -> Option<NodeId> {
        self.pick_target
    }
}
