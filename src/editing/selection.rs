//! Selektionsmodell: einzige Quelle der Wahrheit für selektierte Nodes.

use crate::core::{Aabb, NodeId, Scene};
use glam::Vec3;
use indexmap::IndexSet;

/// Menge selektierter Node-IDs in Einfüge-Reihenfolge.
///
/// Gleichheit ist Mengengleichheit, die Reihenfolge bestimmt nur die
/// primäre Selektion und die Iterationsreihenfolge.
pub type SelectionSet = IndexSet<NodeId>;

/// Benachrichtigungen des Selektionsmodells.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// Selektion hat sich geändert (neue Menge)
    Changed(SelectionSet),
    /// Genau ein Node wurde nicht-additiv neu selektiert
    NodeSelected(NodeId),
    /// Selektion ist jetzt leer
    Cleared,
}

/// Verwaltet die Menge selektierter Nodes der aktuell geladenen Szene.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    selected: SelectionSet,
    node_count: usize,
    events: Vec<SelectionEvent>,
}

impl SelectionModel {
    /// Erstellt ein leeres Modell ohne gebundene Szene (alle IDs ungültig).
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindet das Modell an eine neu geladene Szene und leert die Selektion.
    pub fn bind_scene(&mut self, node_count: usize) {
        self.clear();
        self.node_count = node_count;
    }

    /// Anzahl der Nodes der gebundenen Szene.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Gibt es mindestens einen selektierten Node?
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Anzahl selektierter Nodes.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Ist der Node selektiert?
    pub fn contains(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    /// Primäre Selektion: der zuerst selektierte Node.
    pub fn primary(&self) -> Option<NodeId> {
        self.selected.first().copied()
    }

    /// Read-only Sicht auf die Selektion.
    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    /// Selektierte IDs in Einfüge-Reihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.selected.iter().copied()
    }

    /// Entnimmt alle seit dem letzten Aufruf angefallenen Events.
    pub fn drain_events(&mut self) -> Vec<SelectionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Selektiert einen Node.
    ///
    /// Nicht-additiv ersetzt die Selektion durch `{id}` (No-op, wenn `id`
    /// bereits das einzige Element ist). Additiv fügt `id` hinzu.
    pub fn select(&mut self, id: NodeId, additive: bool) {
        if !self.is_valid(id) {
            log::debug!("select: Node {} außerhalb der Szene, ignoriert", id);
            return;
        }

        if !additive {
            if self.selected.len() == 1 && self.selected.contains(&id) {
                return;
            }
            self.selected.clear();
        }

        if self.selected.insert(id) {
            self.emit_changed();
            if !additive {
                self.events.push(SelectionEvent::NodeSelected(id));
            }
        }
    }

    /// Ersetzt die Selektion komplett. Ungültige IDs werden verworfen.
    pub fn select_multiple(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        let node_count = self.node_count;
        let next: SelectionSet = ids.into_iter().filter(|&id| id < node_count).collect();
        if next == self.selected {
            return;
        }

        self.selected = next;
        self.emit_changed();
    }

    /// Schaltet die Selektion eines Nodes um.
    pub fn toggle(&mut self, id: NodeId) {
        if !self.is_valid(id) {
            log::debug!("toggle: Node {} außerhalb der Szene, ignoriert", id);
            return;
        }

        if !self.selected.shift_remove(&id) {
            self.selected.insert(id);
        }

        self.emit_changed();
        if self.selected.is_empty() {
            self.events.push(SelectionEvent::Cleared);
        }
    }

    /// Entfernt einen Node aus der Selektion.
    pub fn deselect(&mut self, id: NodeId) {
        if self.selected.shift_remove(&id) {
            self.emit_changed();
            if self.selected.is_empty() {
                self.events.push(SelectionEvent::Cleared);
            }
        }
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }

        self.selected.clear();
        self.emit_changed();
        self.events.push(SelectionEvent::Cleared);
    }

    /// Mittelwert der Weltpositionen aller selektierten Nodes.
    ///
    /// Nullvektor bei leerer Selektion oder fehlender Szene.
    pub fn compute_center(&self, scene: Option<&Scene>) -> Vec3 {
        let Some(scene) = scene else {
            return Vec3::ZERO;
        };

        let (sum, count) = self
            .selected
            .iter()
            .filter_map(|&id| scene.node(id))
            .fold((Vec3::ZERO, 0usize), |(sum, count), node| {
                (sum + node.world_position(), count + 1)
            });

        if count == 0 {
            Vec3::ZERO
        } else {
            sum / count as f32
        }
    }

    /// Welt-AABB über die Meshes aller selektierten Nodes.
    ///
    /// Jede lokale Mesh-Box wird über ihre 8 Ecken in Weltkoordinaten
    /// transformiert. Degenerierte Null-Box im Ursprung, wenn nichts beiträgt.
    pub fn compute_bounds(&self, scene: Option<&Scene>) -> Aabb {
        let Some(scene) = scene else {
            return Aabb::ZERO;
        };

        self.selected
            .iter()
            .filter_map(|&id| {
                let node = scene.node(id)?;
                let local = scene.mesh_of(id)?.local_bounds()?;
                Some(local.transformed(&node.transform))
            })
            .reduce(|acc, bounds| acc.union(&bounds))
            .unwrap_or(Aabb::ZERO)
    }

    fn is_valid(&self, id: NodeId) -> bool {
        id < self.node_count
    }

    fn emit_changed(&mut self) {
        self.events
            .push(SelectionEvent::Changed(self.selected.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Mesh, SceneNode};
    use glam::Mat4;

    fn model_with_nodes(count: usize) -> SelectionModel {
        let mut model = SelectionModel::new();
        model.bind_scene(count);
        model
    }

    fn changed_count(events: &[SelectionEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, SelectionEvent::Changed(_)))
            .count()
    }

    #[test]
    fn select_same_sole_node_twice_emits_once() {
        let mut model = model_with_nodes(10);

        model.select(5, false);
        let first = model.drain_events();
        assert_eq!(changed_count(&first), 1);
        assert!(first.contains(&SelectionEvent::NodeSelected(5)));

        model.select(5, false);
        assert!(model.drain_events().is_empty());
    }

    #[test]
    fn additive_select_does_not_emit_node_selected() {
        let mut model = model_with_nodes(10);
        model.select(1, false);
        model.drain_events();

        model.select(2, true);
        let events = model.drain_events();
        assert_eq!(changed_count(&events), 1);
        assert!(!events
            .iter()
            .any(|e| matches!(e, SelectionEvent::NodeSelected(_))));

        // bereits enthalten → keine Änderung
        model.select(2, true);
        assert!(model.drain_events().is_empty());
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn non_additive_select_of_member_replaces_multi_selection() {
        let mut model = model_with_nodes(10);
        model.select_multiple([3, 5]);
        model.drain_events();

        model.select(5, false);
        let events = model.drain_events();
        assert_eq!(changed_count(&events), 1);
        assert!(events.contains(&SelectionEvent::NodeSelected(5)));
        assert_eq!(model.ids().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn out_of_range_ids_are_ignored_silently() {
        let mut model = model_with_nodes(3);
        model.select(3, false);
        model.toggle(7);
        model.deselect(9);
        assert!(model.is_empty());
        assert!(model.drain_events().is_empty());
    }

    #[test]
    fn select_multiple_uses_set_equality() {
        let mut model = model_with_nodes(10);
        model.select_multiple([1, 2, 3]);
        model.drain_events();

        model.select_multiple([3, 2, 1]);
        assert!(model.drain_events().is_empty());

        model.select_multiple([1, 2, 42]);
        let events = model.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn toggle_always_emits_and_reports_cleared() {
        let mut model = model_with_nodes(5);
        model.toggle(2);
        let events = model.drain_events();
        assert_eq!(changed_count(&events), 1);
        assert!(!events.contains(&SelectionEvent::Cleared));

        model.toggle(2);
        let events = model.drain_events();
        assert_eq!(changed_count(&events), 1);
        assert!(events.contains(&SelectionEvent::Cleared));
    }

    #[test]
    fn deselect_and_clear_only_emit_on_change() {
        let mut model = model_with_nodes(5);
        model.clear();
        model.deselect(1);
        assert!(model.drain_events().is_empty());

        model.select_multiple([1, 2]);
        model.drain_events();
        model.deselect(1);
        assert_eq!(model.drain_events().len(), 1);

        model.clear();
        let events = model.drain_events();
        assert_eq!(
            events,
            vec![
                SelectionEvent::Changed(SelectionSet::new()),
                SelectionEvent::Cleared
            ]
        );
    }

    #[test]
    fn primary_is_first_selected_and_survives_removal_of_others() {
        let mut model = model_with_nodes(10);
        assert_eq!(model.primary(), None);
        model.select(4, false);
        model.select(1, true);
        model.select(7, true);
        assert_eq!(model.primary(), Some(4));

        model.deselect(4);
        assert_eq!(model.primary(), Some(1));
    }

    #[test]
    fn bind_scene_clears_selection() {
        let mut model = model_with_nodes(10);
        model.select(9, false);
        model.bind_scene(4);
        assert!(model.is_empty());

        model.select(9, false);
        assert!(model.is_empty(), "ID jenseits der neuen Szene muss ignoriert werden");
    }

    #[test]
    fn compute_center_averages_translations() {
        let mut scene = Scene::new();
        scene.add_node(SceneNode::new(
            "a",
            Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0)),
            None,
        ));
        scene.add_node(SceneNode::new(
            "b",
            Mat4::from_translation(Vec3::new(0.0, 4.0, -2.0)),
            None,
        ));
        let mut model = model_with_nodes(scene.node_count());

        assert_eq!(model.compute_center(Some(&scene)), Vec3::ZERO);
        model.select_multiple([0, 1]);
        assert_eq!(model.compute_center(Some(&scene)), Vec3::new(1.0, 2.0, -1.0));
        assert_eq!(model.compute_center(None), Vec3::ZERO);
    }

    #[test]
    fn compute_bounds_unions_transformed_mesh_boxes() {
        let mut scene = Scene::new();
        let unit_cube = scene.add_mesh(Mesh::cuboid(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
            None,
        ));
        let corner_cube = scene.add_mesh(Mesh::cuboid(Vec3::ZERO, Vec3::ONE, None));
        scene.add_node(SceneNode::new(
            "a",
            Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)),
            Some(unit_cube),
        ));
        scene.add_node(SceneNode::new(
            "b",
            Mat4::from_scale_rotation_translation(
                Vec3::splat(2.0),
                glam::Quat::IDENTITY,
                Vec3::new(0.0, 5.0, 0.0),
            ),
            Some(corner_cube),
        ));
        scene.add_node(SceneNode::new("licht", Mat4::IDENTITY, None));

        let mut model = model_with_nodes(scene.node_count());
        model.select_multiple([0, 1, 2]);

        let bounds = model.compute_bounds(Some(&scene));
        // a: (9,-1,-1)..(11,1,1), b: (0,5,0)..(2,7,2)
        assert_eq!(bounds.min, Vec3::new(0.0, -1.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(11.0, 7.0, 2.0));
    }

    #[test]
    fn compute_bounds_without_meshes_is_degenerate_at_origin() {
        let mut scene = Scene::new();
        scene.add_node(SceneNode::new(
            "licht",
            Mat4::from_translation(Vec3::splat(3.0)),
            None,
        ));
        let mut model = model_with_nodes(1);
        model.select(0, false);

        assert_eq!(model.compute_bounds(Some(&scene)), Aabb::ZERO);
        assert_eq!(model.compute_bounds(None), Aabb::ZERO);
    }
}
