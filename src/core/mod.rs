//! Core-Domänentypen: Szene, Nodes, Meshes, Materialien, Kamera-Basis, Bounding-Boxen.

pub mod bounds;
pub mod camera;
pub mod material;
/// Szenengraph-Datenmodell
///
/// - Scene: Container für Nodes, Meshes, Materialien und Beleuchtung
/// - SceneNode: Node mit Welttransformation und optionalem Mesh
/// - Mesh: lokale Geometrie, liefert die lokale Bounding-Box
pub mod scene;

pub use bounds::Aabb;
pub use camera::CameraBasis;
pub use material::{LightingParams, Material};
pub use scene::{MaterialIndex, Mesh, MeshIndex, NodeId, Scene, SceneNode};
