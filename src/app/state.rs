//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::NodeId;
use crate::editing::{
    CommandHistory, GizmoEvent, HistoryEvent, SelectionEvent, SelectionModel, TransformTool,
};
use crate::shared::EditorOptions;
use glam::Mat4;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Nodes selektieren und mit dem Gizmo transformieren
    #[default]
    Transform,
    /// Nur Kamera-Navigation, Pointer-Eingaben editieren nichts
    Navigate,
}

/// Laufende Transform-Geste.
#[derive(Debug, Clone, Default)]
pub struct TransformGesture {
    /// Start-Transformation jedes beteiligten Nodes
    pub start: Vec<(NodeId, Mat4)>,
}

/// Benachrichtigung an Beobachter des Editors (Panels, Statuszeile).
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Aus dem Selektionsmodell
    Selection(SelectionEvent),
    /// Aus dem Transform-Werkzeug
    Gizmo(GizmoEvent),
    /// Aus dem Undo-Verlauf
    History(HistoryEvent),
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Selektierte Nodes
    pub selection: SelectionModel,
    /// Gizmo-Zustand
    pub transform_tool: TransformTool,
    /// Undo/Redo-Verlauf
    pub history: CommandHistory,
    /// Aktive Transform-Geste (None = keine)
    pub gesture: Option<TransformGesture>,
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Command-Log
    pub command_log: CommandLog,
    /// Gesammelte Events seit dem letzten `take_events`
    pub events: Vec<EditorEvent>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            selection: SelectionModel::new(),
            transform_tool: TransformTool::with_sensitivity(options.transform_sensitivity()),
            history: CommandHistory::new(options.undo_limit),
            gesture: None,
            active_tool: EditorTool::default(),
            options,
            command_log: CommandLog::new(),
            events: Vec::new(),
        }
    }

    /// Läuft gerade eine Transform-Geste?
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Gibt die Anzahl selektierter Nodes zurück.
    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Prüft ob Undo verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Übernimmt ausstehende Events aller Komponenten in `events`.
    pub fn collect_component_events(&mut self) {
        self.events.extend(
            self.selection
                .drain_events()
                .into_iter()
                .map(EditorEvent::Selection),
        );
        self.events.extend(
            self.transform_tool
                .drain_events()
                .into_iter()
                .map(EditorEvent::Gizmo),
        );
        self.events.extend(
            self.history
                .drain_events()
                .into_iter()
                .map(EditorEvent::History),
        );
    }

    /// Entnimmt alle gesammelten Events.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
