//! Screen-Space-Index (KD-Tree) für Klick-Selektion in der Vorschau.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::NodeId;

/// Treffer einer Pick-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickMatch {
    /// Getroffener Node
    pub node: NodeId,
    /// Abstand zum Suchpunkt in Pixeln
    pub distance: f32,
}

/// Read-only Index über die projizierten Node-Positionen eines Frames.
#[derive(Debug, Clone)]
pub struct PickIndex {
    tree: KdTree<f64, 2>,
    node_ids: Vec<NodeId>,
}

impl Default for PickIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl PickIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            node_ids: Vec::new(),
        }
    }

    /// Baut den Index aus `(NodeId, Screen-Position)`-Paaren.
    pub fn from_points(points: impl IntoIterator<Item = (NodeId, Vec2)>) -> Self {
        let (node_ids, entries): (Vec<NodeId>, Vec<[f64; 2]>) = points
            .into_iter()
            .map(|(id, pos)| (id, [pos.x as f64, pos.y as f64]))
            .unzip();

        Self {
            tree: (&entries).into(),
            node_ids,
        }
    }

    /// Anzahl indexierter Nodes.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// `true`, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Nächster Node innerhalb von `radius` Pixeln um `query`.
    pub fn nearest_within(&self, query: Vec2, radius: f32) -> Option<PickMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let distance = (result.distance as f32).sqrt();
        if distance > radius {
            return None;
        }

        let node = *self.node_ids.get(result.item as usize)?;
        Some(PickMatch { node, distance })
    }
}
