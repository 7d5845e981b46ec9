//! Vertrag zwischen Editor und externem Renderer.

use crate::core::{CameraBasis, LightingParams, Material, MaterialIndex, NodeId, Scene};
use glam::{Mat4, Vec2};

/// Schnittstelle des Renderers, über die der Editor Szenenzustand liest und mutiert.
///
/// Alle Aufrufe sind synchron und kehren zurück, bevor das nächste
/// Eingabe-Event verarbeitet wird. Mutationen mit identischem Wert sind
/// idempotent. Ungültige Indizes werden vom Renderer ignoriert.
///
/// Invalidierung ist explizit: Wer Geometrie ändert, ruft
/// `rebuild_acceleration_structure()`, wer bildrelevante Parameter ändert,
/// ruft `reset_accumulation()`.
pub trait RenderPort {
    /// Aktuell geladene Szene (read-only), `None` vor dem ersten Laden.
    fn scene(&self) -> Option<&Scene>;

    /// Aktuelle Kamera-Basis.
    fn camera_basis(&self) -> CameraBasis;

    /// Setzt die Welttransformation eines Nodes.
    fn set_node_transform(&mut self, node: NodeId, transform: Mat4);

    /// Ersetzt ein Material.
    fn update_material(&mut self, index: MaterialIndex, material: &Material);

    /// Ersetzt die globale Beleuchtung.
    fn set_lighting(&mut self, lighting: &LightingParams);

    /// Baut die Beschleunigungsstruktur (BVH/TLAS) neu auf.
    fn rebuild_acceleration_structure(&mut self);

    /// Setzt den Sample-Akkumulator auf Null zurück.
    fn reset_accumulation(&mut self);

    /// Hit-Test an einer Viewport-Position (Pixel, Ursprung oben links).
    fn pick_node(&self, _screen_pos: Vec2) -> Option<NodeId> {
        None
    }
}
