//! Editier-Kern: Selektion, Transform-Werkzeug, Commands und Undo-Verlauf.

pub mod command;
pub mod history;
pub mod selection;
pub mod transform_tool;

pub use command::{CommandContext, CommandFn, EditCommand, MergeId, NodeTransformChange};
pub use history::{CommandHistory, HistoryEvent, DEFAULT_UNDO_LIMIT};
pub use selection::{SelectionEvent, SelectionModel, SelectionSet};
pub use transform_tool::{
    AxisMask, GizmoEvent, GizmoMode, TransformDelta, TransformSensitivity, TransformSpace,
    TransformTool,
};
