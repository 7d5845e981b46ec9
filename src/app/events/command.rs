use crate::app::state::EditorTool;
use crate::core::{LightingParams, Material, MaterialIndex, NodeId};
use crate::editing::{AxisMask, GizmoMode};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Mutierende App-Commands, ausgeführt vom Controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Szene ===
    /// Selektion, Geste und Verlauf an die neu geladene Szene binden
    BindScene,

    // === Transform-Geste ===
    /// Geste starten: Start-Transformationen der Selektion festhalten
    BeginTransformDrag { screen_pos: Vec2 },
    /// Geste fortsetzen: Live-Vorschau aktualisieren
    UpdateTransformDrag { screen_pos: Vec2 },
    /// Geste abschließen und als ein Undo-Schritt ablegen
    EndTransformDrag,
    /// Geste abbrechen und Start-Transformationen wiederherstellen
    AbortTransformDrag,

    // === Selektion ===
    /// Hit-Test im Renderer und Node selektieren
    PickNode { screen_pos: Vec2, additive: bool },
    /// Selektion ersetzen
    SelectNodes { ids: Vec<NodeId> },
    /// Selektion eines Nodes umschalten
    ToggleNodeSelection { id: NodeId },
    /// Alle Nodes selektieren
    SelectAllNodes,
    /// Selektion aufheben
    ClearSelection,

    // === Verlauf ===
    /// Undo-Schritt
    Undo,
    /// Redo-Schritt
    Redo,
    /// Aktuellen Verlaufsstand als gespeichert markieren
    MarkClean,

    // === Gizmo ===
    /// Gizmo-Modus setzen
    SetGizmoMode { mode: GizmoMode },
    /// Achs-Einschränkung umschalten
    ToggleAxis { axis: AxisMask },
    /// Transform-Raum umschalten
    ToggleTransformSpace,
    /// Feinsteuerung setzen
    SetFineControl { enabled: bool },
    /// Editor-Werkzeug setzen
    SetEditorTool { tool: EditorTool },

    // === Szenen-Parameter ===
    /// Material ersetzen
    ModifyMaterial {
        material_index: MaterialIndex,
        material: Material,
    },
    /// Material allen selektierten Meshes zuweisen
    AssignMaterialToSelection { material: Material },
    /// Beleuchtung ersetzen
    ModifyLighting { lighting: LightingParams },

    // === Optionen ===
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen speichern
    SaveOptions,
}
