//! Spectral Scene Editor Library.
//! Editier-Kern (Selektion, Gizmo, Undo/Redo) als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod editing;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorEvent, EditorTool};
pub use core::{
    Aabb, CameraBasis, LightingParams, Material, MaterialIndex, Mesh, MeshIndex, NodeId, Scene,
    SceneNode,
};
pub use editing::{
    AxisMask, CommandContext, CommandHistory, EditCommand, GizmoEvent, GizmoMode, HistoryEvent,
    SelectionEvent, SelectionModel, SelectionSet, TransformDelta, TransformSpace, TransformTool,
};
pub use render::{HeadlessRenderer, PreviewRenderer, RenderPort};
pub use shared::EditorOptions;
