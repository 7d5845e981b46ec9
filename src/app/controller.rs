//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::render::RenderPort;

/// Orchestriert UI-Events und Editier-Operationen auf den AppState.
///
/// Der Renderer wird pro Aufruf geliehen, der Controller hält keinen Zustand.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        renderer: &mut dyn RenderPort,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, renderer, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        renderer: &mut dyn RenderPort,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Szene ===
            AppCommand::BindScene => handlers::scene::bind(state, renderer),

            // === Transform-Geste ===
            AppCommand::BeginTransformDrag { screen_pos } => {
                handlers::transform::begin(state, renderer, screen_pos)
            }
            AppCommand::UpdateTransformDrag { screen_pos } => {
                handlers::transform::update(state, renderer, screen_pos)
            }
            AppCommand::EndTransformDrag => handlers::transform::end(state, renderer),
            AppCommand::AbortTransformDrag => handlers::transform::abort(state, renderer),

            // === Selektion ===
            AppCommand::PickNode {
                screen_pos,
                additive,
            } => handlers::selection::pick_node(state, renderer, screen_pos, additive),
            AppCommand::SelectNodes { ids } => {
                handlers::selection::select_nodes(state, renderer, &ids)
            }
            AppCommand::ToggleNodeSelection { id } => {
                handlers::selection::toggle(state, renderer, id)
            }
            AppCommand::SelectAllNodes => handlers::selection::select_all(state, renderer),
            AppCommand::ClearSelection => handlers::selection::clear(state, renderer),

            // === Verlauf ===
            AppCommand::Undo => handlers::history::undo(state, renderer),
            AppCommand::Redo => handlers::history::redo(state, renderer),
            AppCommand::MarkClean => handlers::history::mark_clean(state),

            // === Gizmo ===
            AppCommand::SetGizmoMode { mode } => handlers::gizmo::set_mode(state, mode),
            AppCommand::ToggleAxis { axis } => handlers::gizmo::toggle_axis(state, axis),
            AppCommand::ToggleTransformSpace => handlers::gizmo::toggle_space(state),
            AppCommand::SetFineControl { enabled } => {
                handlers::gizmo::set_fine_control(state, enabled)
            }
            AppCommand::SetEditorTool { tool } => handlers::gizmo::set_editor_tool(state, tool),

            // === Szenen-Parameter ===
            AppCommand::ModifyMaterial {
                material_index,
                material,
            } => handlers::scene::modify_material(state, renderer, material_index, material),
            AppCommand::AssignMaterialToSelection { material } => {
                handlers::scene::assign_material_to_selection(state, renderer, material)
            }
            AppCommand::ModifyLighting { lighting } => {
                handlers::scene::modify_lighting(state, renderer, lighting)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, *options),
            AppCommand::SaveOptions => handlers::options::save(state)?,
        }

        state.collect_component_events();
        Ok(())
    }
}
