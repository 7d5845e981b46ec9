//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Während einer Transform-Geste werden Undo/Redo sowie Modus- und
/// Raumwechsel verworfen, damit die Geste als ein Schritt abgeschlossen wird.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let dragging = state.is_dragging();
    let editing = state.active_tool == EditorTool::Transform;

    match intent {
        AppIntent::SceneReloaded => vec![AppCommand::BindScene],

        AppIntent::PointerPressed {
            screen_pos,
            additive,
        } => {
            if !editing || dragging {
                vec![]
            } else if state.selection.has_selection() && !additive {
                vec![AppCommand::BeginTransformDrag { screen_pos }]
            } else {
                vec![AppCommand::PickNode {
                    screen_pos,
                    additive,
                }]
            }
        }
        AppIntent::PointerMoved { screen_pos } => {
            if dragging {
                vec![AppCommand::UpdateTransformDrag { screen_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { screen_pos } => {
            if dragging {
                vec![
                    AppCommand::UpdateTransformDrag { screen_pos },
                    AppCommand::EndTransformDrag,
                ]
            } else {
                vec![]
            }
        }
        AppIntent::NodePickRequested {
            screen_pos,
            additive,
        } => {
            if !editing || dragging {
                vec![]
            } else {
                vec![AppCommand::PickNode {
                    screen_pos,
                    additive,
                }]
            }
        }

        AppIntent::CancelRequested => {
            if dragging {
                vec![AppCommand::AbortTransformDrag, AppCommand::ClearSelection]
            } else if state.selection.has_selection() {
                vec![AppCommand::ClearSelection]
            } else {
                vec![]
            }
        }
        AppIntent::UndoRequested if !dragging => vec![AppCommand::Undo],
        AppIntent::RedoRequested if !dragging => vec![AppCommand::Redo],
        AppIntent::UndoRequested | AppIntent::RedoRequested => {
            log::debug!("Undo/Redo während einer Transform-Geste ignoriert");
            vec![]
        }
        AppIntent::SaveCheckpointRequested => vec![AppCommand::MarkClean],

        AppIntent::SelectAllRequested => vec![AppCommand::SelectAllNodes],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::SelectNodesRequested { ids } => vec![AppCommand::SelectNodes { ids }],
        AppIntent::ToggleNodeSelectionRequested { id } => {
            vec![AppCommand::ToggleNodeSelection { id }]
        }

        AppIntent::GizmoModeRequested { mode } if !dragging => {
            vec![AppCommand::SetGizmoMode { mode }]
        }
        AppIntent::TransformSpaceToggleRequested if !dragging => {
            vec![AppCommand::ToggleTransformSpace]
        }
        AppIntent::GizmoModeRequested { .. } | AppIntent::TransformSpaceToggleRequested => vec![],
        AppIntent::AxisToggleRequested { axis } => vec![AppCommand::ToggleAxis { axis }],
        AppIntent::FineControlChanged { enabled } => vec![AppCommand::SetFineControl { enabled }],
        AppIntent::SetEditorToolRequested { tool } => {
            let mut commands = Vec::with_capacity(2);
            if dragging && tool != state.active_tool {
                commands.push(AppCommand::AbortTransformDrag);
            }
            commands.push(AppCommand::SetEditorTool { tool });
            commands
        }

        AppIntent::MaterialEditRequested {
            material_index,
            material,
        } => vec![AppCommand::ModifyMaterial {
            material_index,
            material,
        }],
        AppIntent::AssignMaterialToSelectionRequested { material } => {
            vec![AppCommand::AssignMaterialToSelection { material }]
        }
        AppIntent::LightingEditRequested { lighting } => {
            vec![AppCommand::ModifyLighting { lighting }]
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}
