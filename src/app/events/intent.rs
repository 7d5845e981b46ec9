use crate::app::state::EditorTool;
use crate::core::{LightingParams, Material, MaterialIndex, NodeId};
use crate::editing::{AxisMask, GizmoMode};
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Renderer hat eine neue Szene geladen
    SceneReloaded,

    /// Primäre Maustaste im Viewport gedrückt (Beginn einer möglichen Geste)
    PointerPressed { screen_pos: Vec2, additive: bool },
    /// Pointer bewegt (nur während einer Geste relevant)
    PointerMoved { screen_pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased { screen_pos: Vec2 },
    /// Einfacher Klick ohne Drag: Node unter dem Pointer selektieren
    NodePickRequested { screen_pos: Vec2, additive: bool },

    /// Escape: laufende Geste abbrechen oder Selektion aufheben
    CancelRequested,
    /// Rückgängig (Ctrl+Z)
    UndoRequested,
    /// Wiederholen (Ctrl+Y / Ctrl+Shift+Z)
    RedoRequested,
    /// Szene wurde extern gespeichert: aktuellen Stand als sauber markieren
    SaveCheckpointRequested,

    /// Alle Nodes selektieren
    SelectAllRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Selektion durch die gegebenen Nodes ersetzen (z.B. aus einer Szenenliste)
    SelectNodesRequested { ids: Vec<NodeId> },
    /// Selektion eines einzelnen Nodes umschalten
    ToggleNodeSelectionRequested { id: NodeId },

    /// Gizmo-Modus wählen (W/E/R)
    GizmoModeRequested { mode: GizmoMode },
    /// Achs-Einschränkung umschalten (X/Y/Z)
    AxisToggleRequested { axis: AxisMask },
    /// Zwischen Welt- und Lokalraum wechseln (Leertaste)
    TransformSpaceToggleRequested,
    /// Feinsteuerung (Shift) an/aus
    FineControlChanged { enabled: bool },
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },

    /// Material im Eigenschaften-Panel geändert
    MaterialEditRequested {
        material_index: MaterialIndex,
        material: Material,
    },
    /// Material allen selektierten Meshes zuweisen
    AssignMaterialToSelectionRequested { material: Material },
    /// Beleuchtung geändert
    LightingEditRequested { lighting: LightingParams },

    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen dauerhaft speichern
    SaveOptionsRequested,
}
