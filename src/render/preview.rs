//! Orthografische 2D-Vorschau für die Desktop-Shell.
//!
//! Hält den Szenenzustand in einem `HeadlessRenderer` und projiziert Nodes
//! entlang der Kamera-Basis auf den Viewport. Der Pick-Index wird bei jedem
//! Neuaufbau der Beschleunigungsstruktur mit aktualisiert.

use super::pick_index::PickIndex;
use super::{HeadlessRenderer, RenderPort};
use crate::core::{Aabb, CameraBasis, LightingParams, Material, MaterialIndex, NodeId, Scene};
use glam::{Mat4, Vec2, Vec3};

/// Vorschau-Renderer mit Screen-Space-Picking.
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    inner: HeadlessRenderer,
    viewport_size: Vec2,
    pixels_per_unit: f32,
    pick_radius_px: f32,
    pick_index: PickIndex,
}

impl PreviewRenderer {
    /// Erstellt eine Vorschau mit gegebenem Maßstab und Pick-Radius.
    pub fn new(pixels_per_unit: f32, pick_radius_px: f32) -> Self {
        Self {
            inner: HeadlessRenderer::new(),
            viewport_size: Vec2::ZERO,
            pixels_per_unit,
            pick_radius_px,
            pick_index: PickIndex::empty(),
        }
    }

    /// Lädt eine Szene und baut den Pick-Index auf.
    pub fn load_scene(&mut self, scene: Scene) {
        self.inner.load_scene(scene);
        self.rebuild_pick_index();
    }

    /// Setzt die Kamera-Basis.
    pub fn set_camera(&mut self, camera: CameraBasis) {
        self.inner.set_camera(camera);
        self.rebuild_pick_index();
    }

    /// Aktualisiert die Viewport-Größe (Pixel). Baut den Index nur bei Änderung neu.
    pub fn set_viewport_size(&mut self, size: Vec2) {
        if self.viewport_size != size {
            self.viewport_size = size;
            self.rebuild_pick_index();
        }
    }

    /// Ändert den Pick-Radius (Pixel).
    pub fn set_pick_radius(&mut self, radius_px: f32) {
        self.pick_radius_px = radius_px;
    }

    /// Darunterliegender Zustandsspeicher (Zähler für Statusanzeige).
    pub fn inner(&self) -> &HeadlessRenderer {
        &self.inner
    }

    /// Projiziert einen Weltpunkt auf Viewport-Pixel (Ursprung oben links).
    pub fn project(&self, world: Vec3) -> Vec2 {
        let camera = self.inner.camera_basis();
        let rel = world - camera.position;
        let center = self.viewport_size * 0.5;
        center + Vec2::new(rel.dot(camera.right), -rel.dot(camera.up)) * self.pixels_per_unit
    }

    /// Projizierte 2D-Hülle einer Welt-Bounding-Box.
    pub fn project_bounds(&self, bounds: &Aabb) -> (Vec2, Vec2) {
        bounds.corners().iter().map(|c| self.project(*c)).fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(p), max.max(p)),
        )
    }

    fn rebuild_pick_index(&mut self) {
        let points: Vec<(NodeId, Vec2)> = self
            .inner
            .scene()
            .map(|scene| {
                scene
                    .nodes
                    .iter()
                    .enumerate()
                    .map(|(id, node)| (id, self.project(node.world_position())))
                    .collect()
            })
            .unwrap_or_default();
        self.pick_index = PickIndex::from_points(points);
    }
}

impl RenderPort for PreviewRenderer {
    fn scene(&self) -> Option<&Scene> {
        self.inner.scene()
    }

    fn camera_basis(&self) -> CameraBasis {
        self.inner.camera_basis()
    }

    fn set_node_transform(&mut self, node: NodeId, transform: Mat4) {
        self.inner.set_node_transform(node, transform);
    }

    fn update_material(&mut self, index: MaterialIndex, material: &Material) {
        self.inner.update_material(index, material);
    }

    fn set_lighting(&mut self, lighting: &LightingParams) {
        self.inner.set_lighting(lighting);
    }

    fn rebuild_acceleration_structure(&mut self) {
        self.inner.rebuild_acceleration_structure();
        self.rebuild_pick_index();
    }

    fn reset_accumulation(&mut self) {
        self.inner.reset_accumulation();
    }

    fn pick_node(&self, screen_pos: Vec2) -> Option<NodeId> {
        self.pick_index
            .nearest_within(screen_pos, self.pick_radius_px)
            .map(|hit| hit.node)
    }
}
