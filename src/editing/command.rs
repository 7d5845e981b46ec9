//! Umkehrbare Editier-Operationen auf Szene und Selektion.

use super::selection::{SelectionModel, SelectionSet};
use crate::core::{LightingParams, Material, MaterialIndex, NodeId};
use crate::render::RenderPort;
use glam::Mat4;
use std::fmt;

/// Alles, was ein Command beim Ausführen/Rückgängigmachen mutieren darf.
pub struct CommandContext<'a> {
    /// Renderer mit der geteilten Szene
    pub renderer: &'a mut dyn RenderPort,
    /// Selektionsmodell des Editors
    pub selection: &'a mut SelectionModel,
}

impl<'a> CommandContext<'a> {
    /// Bündelt Renderer und Selektion für einen Aufruf.
    pub fn new(renderer: &'a mut dyn RenderPort, selection: &'a mut SelectionModel) -> Self {
        Self {
            renderer,
            selection,
        }
    }
}

/// Kennung für zusammenführbare Commands gleicher Art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeId {
    /// Transformation eines einzelnen Nodes
    TransformNode,
    /// Änderung eines Materials
    ModifyMaterial,
    /// Änderung der Beleuchtung
    ModifyLighting,
}

/// Alte und neue Transformation eines Nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransformChange {
    /// Betroffener Node
    pub node: NodeId,
    /// Transformation vor der Änderung
    pub old: Mat4,
    /// Transformation nach der Änderung
    pub new: Mat4,
}

/// Callback eines [`EditCommand::Lambda`].
pub type CommandFn = Box<dyn FnMut(&mut CommandContext<'_>)>;

/// Geschlossene Menge aller undo-fähigen Editier-Operationen.
///
/// `execute` und `undo` sind exakte Inverse: nach `execute` gefolgt von
/// `undo` ist der Zustand bitgleich zum Zustand davor.
pub enum EditCommand {
    /// Ein Node bekommt eine neue Transformation.
    TransformNode(NodeTransformChange),
    /// Mehrere Nodes in einer Geste (Undo in umgekehrter Reihenfolge).
    MultiTransform(Vec<NodeTransformChange>),
    /// Ein Material wird ersetzt.
    ModifyMaterial {
        material_index: MaterialIndex,
        old: Material,
        new: Material,
    },
    /// Die Szenenbeleuchtung wird ersetzt.
    ModifyLighting {
        old: LightingParams,
        new: LightingParams,
    },
    /// Die Selektion wird ersetzt.
    Selection { old: SelectionSet, new: SelectionSet },
    /// Geordnete Gruppe von Commands als ein Undo-Schritt.
    Composite {
        description: String,
        children: Vec<EditCommand>,
    },
    /// Einmalige Operation aus zwei Closures.
    Lambda {
        description: String,
        execute: CommandFn,
        undo: CommandFn,
    },
}

impl EditCommand {
    /// Transformation eines einzelnen Nodes.
    pub fn transform_node(node: NodeId, old: Mat4, new: Mat4) -> Self {
        Self::TransformNode(NodeTransformChange { node, old, new })
    }

    /// Transformation mehrerer Nodes.
    pub fn multi_transform(entries: Vec<NodeTransformChange>) -> Self {
        Self::MultiTransform(entries)
    }

    /// Materialänderung.
    pub fn modify_material(material_index: MaterialIndex, old: Material, new: Material) -> Self {
        Self::ModifyMaterial {
            material_index,
            old,
            new,
        }
    }

    /// Beleuchtungsänderung.
    pub fn modify_lighting(old: LightingParams, new: LightingParams) -> Self {
        Self::ModifyLighting { old, new }
    }

    /// Selektionsänderung.
    pub fn selection(old: SelectionSet, new: SelectionSet) -> Self {
        Self::Selection { old, new }
    }

    /// Gruppe mehrerer Commands.
    pub fn composite(description: impl Into<String>, children: Vec<EditCommand>) -> Self {
        Self::Composite {
            description: description.into(),
            children,
        }
    }

    /// Command aus zwei Closures.
    pub fn lambda(
        description: impl Into<String>,
        execute: impl FnMut(&mut CommandContext<'_>) + 'static,
        undo: impl FnMut(&mut CommandContext<'_>) + 'static,
    ) -> Self {
        Self::Lambda {
            description: description.into(),
            execute: Box::new(execute),
            undo: Box::new(undo),
        }
    }

    /// Menschenlesbare Beschreibung für Undo/Redo-Menüs.
    pub fn description(&self) -> String {
        match self {
            Self::TransformNode(_) => "Node transformieren".to_string(),
            Self::MultiTransform(entries) => format!("{} Nodes transformieren", entries.len()),
            Self::ModifyMaterial { .. } => "Material ändern".to_string(),
            Self::ModifyLighting { .. } => "Beleuchtung ändern".to_string(),
            Self::Selection { .. } => "Selektion ändern".to_string(),
            Self::Composite { description, .. } | Self::Lambda { description, .. } => {
                description.clone()
            }
        }
    }

    /// Merge-Kennung, `None` für nicht zusammenführbare Commands.
    pub fn merge_id(&self) -> Option<MergeId> {
        match self {
            Self::TransformNode(_) => Some(MergeId::TransformNode),
            Self::ModifyMaterial { .. } => Some(MergeId::ModifyMaterial),
            Self::ModifyLighting { .. } => Some(MergeId::ModifyLighting),
            _ => None,
        }
    }

    /// Übernimmt den neuen Zustand von `other`, wenn beide dasselbe Ziel haben.
    ///
    /// Der eigene alte Zustand bleibt erhalten. Gibt `false` zurück, wenn
    /// nicht zusammengeführt werden kann.
    pub fn merge_with(&mut self, other: &EditCommand) -> bool {
        match (self, other) {
            (Self::TransformNode(mine), Self::TransformNode(theirs)) if mine.node == theirs.node => {
                mine.new = theirs.new;
                true
            }
            (
                Self::ModifyMaterial {
                    material_index,
                    new,
                    ..
                },
                Self::ModifyMaterial {
                    material_index: other_index,
                    new: other_new,
                    ..
                },
            ) if *material_index == *other_index => {
                *new = *other_new;
                true
            }
            (Self::ModifyLighting { new, .. }, Self::ModifyLighting { new: other_new, .. }) => {
                *new = *other_new;
                true
            }
            _ => false,
        }
    }

    /// `true`, wenn alter und neuer Zustand identisch sind.
    ///
    /// Composite und Lambda gelten nie als leer.
    pub fn is_noop(&self) -> bool {
        match self {
            Self::TransformNode(change) => change.old == change.new,
            Self::MultiTransform(entries) => entries.iter().all(|e| e.old == e.new),
            Self::ModifyMaterial { old, new, .. } => old == new,
            Self::ModifyLighting { old, new } => old == new,
            Self::Selection { old, new } => old == new,
            Self::Composite { .. } | Self::Lambda { .. } => false,
        }
    }

    /// Wendet die Änderung an.
    pub fn execute(&mut self, ctx: &mut CommandContext<'_>) {
        match self {
            Self::TransformNode(change) => {
                apply_transforms(ctx, std::iter::once((change.node, change.new)));
            }
            Self::MultiTransform(entries) => {
                apply_transforms(ctx, entries.iter().map(|e| (e.node, e.new)));
            }
            Self::ModifyMaterial {
                material_index,
                new,
                ..
            } => apply_material(ctx, *material_index, new),
            Self::ModifyLighting { new, .. } => apply_lighting(ctx, new),
            Self::Selection { new, .. } => {
                ctx.selection.select_multiple(new.iter().copied());
            }
            Self::Composite { children, .. } => {
                for child in children.iter_mut() {
                    child.execute(ctx);
                }
            }
            Self::Lambda { execute, .. } => execute(ctx),
        }
    }

    /// Macht die Änderung rückgängig.
    pub fn undo(&mut self, ctx: &mut CommandContext<'_>) {
        match self {
            Self::TransformNode(change) => {
                apply_transforms(ctx, std::iter::once((change.node, change.old)));
            }
            Self::MultiTransform(entries) => {
                apply_transforms(ctx, entries.iter().rev().map(|e| (e.node, e.old)));
            }
            Self::ModifyMaterial {
                material_index,
                old,
                ..
            } => apply_material(ctx, *material_index, old),
            Self::ModifyLighting { old, .. } => apply_lighting(ctx, old),
            Self::Selection { old, .. } => {
                ctx.selection.select_multiple(old.iter().copied());
            }
            Self::Composite { children, .. } => {
                for child in children.iter_mut().rev() {
                    child.undo(ctx);
                }
            }
            Self::Lambda { undo, .. } => undo(ctx),
        }
    }
}

impl fmt::Debug for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransformNode(change) => f.debug_tuple("TransformNode").field(change).finish(),
            Self::MultiTransform(entries) => {
                f.debug_tuple("MultiTransform").field(entries).finish()
            }
            Self::ModifyMaterial {
                material_index,
                old,
                new,
            } => f
                .debug_struct("ModifyMaterial")
                .field("material_index", material_index)
                .field("old", old)
                .field("new", new)
                .finish(),
            Self::ModifyLighting { old, new } => f
                .debug_struct("ModifyLighting")
                .field("old", old)
                .field("new", new)
                .finish(),
            Self::Selection { old, new } => f
                .debug_struct("Selection")
                .field("old", old)
                .field("new", new)
                .finish(),
            Self::Composite {
                description,
                children,
            } => f
                .debug_struct("Composite")
                .field("description", description)
                .field("children", children)
                .finish(),
            Self::Lambda { description, .. } => f
                .debug_struct("Lambda")
                .field("description", description)
                .finish_non_exhaustive(),
        }
    }
}

/// Schreibt Transformationen gültiger Nodes und invalidiert einmal, falls
/// mindestens eine angewendet wurde.
fn apply_transforms(
    ctx: &mut CommandContext<'_>,
    transforms: impl Iterator<Item = (NodeId, Mat4)>,
) {
    let node_count = ctx.renderer.scene().map_or(0, |scene| scene.node_count());
    let mut applied = 0usize;

    for (node, transform) in transforms {
        if node >= node_count {
            log::debug!("Transform für ungültigen Node {} übersprungen", node);
            continue;
        }
        ctx.renderer.set_node_transform(node, transform);
        applied += 1;
    }

    if applied > 0 {
        ctx.renderer.rebuild_acceleration_structure();
        ctx.renderer.reset_accumulation();
    }
}

fn apply_material(ctx: &mut CommandContext<'_>, index: MaterialIndex, material: &Material) {
    let exists = ctx
        .renderer
        .scene()
        .is_some_and(|scene| scene.material(index).is_some());
    if !exists {
        log::debug!("Material {} existiert nicht, Änderung übersprungen", index);
        return;
    }

    ctx.renderer.update_material(index, material);
    ctx.renderer.reset_accumulation();
}

fn apply_lighting(ctx: &mut CommandContext<'_>, lighting: &LightingParams) {
    if ctx.renderer.scene().is_none() {
        return;
    }

    ctx.renderer.set_lighting(lighting);
    ctx.renderer.reset_accumulation();
}
