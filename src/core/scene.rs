//! Szenengraph, wie ihn der Renderer dem Editor zur Verfügung stellt.
//!
//! Nodes werden über ihren Index im `nodes`-Array adressiert. Indizes sind
//! für die Lebensdauer einer geladenen Szene stabil.

use super::bounds::Aabb;
use super::material::{LightingParams, Material};
use glam::{Mat4, Vec3};

/// Index eines Nodes im Node-Array der Szene.
pub type NodeId = usize;
/// Index eines Meshes im Mesh-Array der Szene.
pub type MeshIndex = usize;
/// Index eines Materials im Material-Array der Szene.
pub type MaterialIndex = usize;

/// Geometrie eines Meshes im lokalen Koordinatensystem.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex-Positionen (lokal)
    pub positions: Vec<Vec3>,
    /// Zugewiesenes Material
    pub material_index: Option<MaterialIndex>,
}

impl Mesh {
    /// Erstellt ein Mesh aus Vertex-Positionen.
    pub fn new(positions: Vec<Vec3>, material_index: Option<MaterialIndex>) -> Self {
        Self {
            positions,
            material_index,
        }
    }

    /// Quader-Mesh zwischen zwei gegenüberliegenden Ecken (8 Vertices).
    pub fn cuboid(a: Vec3, b: Vec3, material_index: Option<MaterialIndex>) -> Self {
        Self::new(
            Aabb::from_corners(a, b).corners().to_vec(),
            material_index,
        )
    }

    /// Lokale Bounding-Box aller Vertices. `None` für leere Meshes.
    pub fn local_bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter().copied())
    }
}

/// Einzelner Szenen-Node mit Welttransformation.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Anzeigename
    pub name: String,
    /// Welttransformation (Spalte 3 = Translation)
    pub transform: Mat4,
    /// Referenziertes Mesh (Lichter/Gruppen haben keins)
    pub mesh_index: Option<MeshIndex>,
}

impl SceneNode {
    /// Erstellt einen Node.
    pub fn new(name: impl Into<String>, transform: Mat4, mesh_index: Option<MeshIndex>) -> Self {
        Self {
            name: name.into(),
            transform,
            mesh_index,
        }
    }

    /// Weltposition (Translationsspalte der Transformation).
    pub fn world_position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }
}

/// Geladene Szene: Nodes, Meshes, Materialien und Beleuchtung.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Alle Nodes, adressiert über `NodeId`
    pub nodes: Vec<SceneNode>,
    /// Alle Meshes, adressiert über `MeshIndex`
    pub meshes: Vec<Mesh>,
    /// Alle Materialien, adressiert über `MaterialIndex`
    pub materials: Vec<Material>,
    /// Globale Beleuchtung
    pub lighting: LightingParams,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Material hinzu und gibt dessen Index zurück.
    pub fn add_material(&mut self, material: Material) -> MaterialIndex {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Fügt ein Mesh hinzu und gibt dessen Index zurück.
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshIndex {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Fügt einen Node hinzu und gibt dessen ID zurück.
    pub fn add_node(&mut self, node: SceneNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Anzahl der Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node per ID, `None` bei ungültigem Index.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Mesh eines Nodes, falls vorhanden und gültig.
    pub fn mesh_of(&self, id: NodeId) -> Option<&Mesh> {
        self.node(id)
            .and_then(|node| node.mesh_index)
            .and_then(|mesh_index| self.meshes.get(mesh_index))
    }

    /// Material per Index.
    pub fn material(&self, index: MaterialIndex) -> Option<&Material> {
        self.materials.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_of_ignores_dangling_mesh_index() {
        let mut scene = Scene::new();
        let valid = scene.add_mesh(Mesh::cuboid(Vec3::ZERO, Vec3::ONE, None));
        let with_mesh = scene.add_node(SceneNode::new("a", Mat4::IDENTITY, Some(valid)));
        let dangling = scene.add_node(SceneNode::new("b", Mat4::IDENTITY, Some(7)));
        let empty = scene.add_node(SceneNode::new("licht", Mat4::IDENTITY, None));

        assert!(scene.mesh_of(with_mesh).is_some());
        assert!(scene.mesh_of(dangling).is_none());
        assert!(scene.mesh_of(empty).is_none());
        assert!(scene.mesh_of(99).is_none());
    }

    #[test]
    fn cuboid_local_bounds_match_corners() {
        let mesh = Mesh::cuboid(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 0.0), None);
        let bounds = mesh.local_bounds().expect("Bounds vorhanden");
        assert_eq!(bounds.min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 3.0));
        assert!(Mesh::default().local_bounds().is_none());
    }

    #[test]
    fn world_position_reads_translation_column() {
        let node = SceneNode::new("n", Mat4::from_translation(Vec3::new(4.0, 5.0, 6.0)), None);
        assert_eq!(node.world_position(), Vec3::new(4.0, 5.0, 6.0));
    }
}
