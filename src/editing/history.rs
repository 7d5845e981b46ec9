//! Linearer Undo/Redo-Verlauf auf Basis von [`EditCommand`]s.

use super::command::{CommandContext, EditCommand};

/// Standard-Obergrenze für gespeicherte Undo-Schritte.
pub const DEFAULT_UNDO_LIMIT: usize = 100;

/// Benachrichtigungen des Verlaufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// Undo möglich ja/nein
    CanUndoChanged(bool),
    /// Redo möglich ja/nein
    CanRedoChanged(bool),
    /// Verlauf steht am Speicherpunkt ja/nein
    CleanChanged(bool),
    /// Neue Cursor-Position
    IndexChanged(usize),
}

/// Command-basierter Undo/Redo-Manager.
///
/// `cursor` zeigt hinter den zuletzt ausgeführten Command. Alles ab
/// `cursor` ist der Redo-Zweig, der beim nächsten `push` verworfen wird.
#[derive(Debug)]
pub struct CommandHistory {
    commands: Vec<EditCommand>,
    cursor: usize,
    clean_mark: Option<usize>,
    limit: usize,
    events: Vec<HistoryEvent>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LIMIT)
    }
}

impl CommandHistory {
    /// Erstellt einen leeren Verlauf. `limit == 0` bedeutet unbegrenzt.
    pub fn new(limit: usize) -> Self {
        Self {
            commands: Vec::new(),
            cursor: 0,
            clean_mark: Some(0),
            limit,
            events: Vec::new(),
        }
    }

    /// Führt `command` aus und legt ihn im Verlauf ab.
    ///
    /// Ein direkt vorangehender Command mit gleicher Merge-Kennung und
    /// gleichem Ziel absorbiert den neuen, statt einen Eintrag anzulegen.
    /// Wirkungslose Commands werden nicht abgelegt, auch nicht als Ergebnis
    /// einer Zusammenführung.
    pub fn push(&mut self, mut command: EditCommand, ctx: &mut CommandContext<'_>) {
        if command.is_noop() {
            log::debug!("Wirkungsloser Command ignoriert: {}", command.description());
            return;
        }
        command.execute(ctx);

        if self.cursor < self.commands.len() {
            self.commands.truncate(self.cursor);
            if self.clean_mark.is_some_and(|mark| mark > self.cursor) {
                self.clean_mark = None;
            }
        }

        if self.try_merge(&command) {
            if self.commands.last().is_some_and(EditCommand::is_noop) {
                self.commands.pop();
                self.cursor = self.commands.len();
                log::debug!("Zusammengeführter Command ist wirkungslos und entfällt");
            } else {
                log::debug!("Command zusammengeführt: {}", command.description());
            }
        } else {
            log::debug!("Command abgelegt: {}", command.description());
            self.commands.push(command);
            self.cursor = self.commands.len();
            self.enforce_limit();
        }

        self.emit_state();
    }

    /// Macht den letzten Command rückgängig. `false`, wenn nichts zu tun war.
    pub fn undo(&mut self, ctx: &mut CommandContext<'_>) -> bool {
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        let command = &mut self.commands[self.cursor];
        command.undo(ctx);
        log::info!("Rückgängig: {}", command.description());

        self.emit_state();
        true
    }

    /// Stellt den nächsten Command wieder her. `false`, wenn nichts zu tun war.
    pub fn redo(&mut self, ctx: &mut CommandContext<'_>) -> bool {
        let Some(command) = self.commands.get_mut(self.cursor) else {
            return false;
        };

        command.execute(ctx);
        log::info!("Wiederholen: {}", command.description());
        self.cursor += 1;

        self.emit_state();
        true
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Merkt die aktuelle Position als Speicherpunkt.
    pub fn set_clean(&mut self) {
        let was_clean = self.is_clean();
        self.clean_mark = Some(self.cursor);
        if !was_clean {
            self.events.push(HistoryEvent::CleanChanged(true));
        }
    }

    /// Steht der Verlauf am Speicherpunkt?
    pub fn is_clean(&self) -> bool {
        self.clean_mark == Some(self.cursor)
    }

    /// Verwirft alle Commands. Der leere Verlauf gilt als sauber.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
        self.clean_mark = Some(0);
        self.emit_state();
    }

    /// Ändert die Obergrenze und kürzt sofort. `0` bedeutet unbegrenzt.
    pub fn set_undo_limit(&mut self, limit: usize) {
        self.limit = limit;
        if self.enforce_limit() {
            self.emit_state();
        }
    }

    /// Aktuelle Obergrenze.
    pub fn undo_limit(&self) -> usize {
        self.limit
    }

    /// Anzahl gespeicherter Commands (inklusive Redo-Zweig).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Gibt `true` zurück, wenn keine Commands gespeichert sind.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Cursor-Position (Anzahl aktuell angewendeter Commands).
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Command an Position `index`.
    pub fn command(&self, index: usize) -> Option<&EditCommand> {
        self.commands.get(index)
    }

    /// Menütext für Undo, leer wenn nichts rückgängig zu machen ist.
    pub fn undo_text(&self) -> String {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.commands.get(i))
            .map(|c| format!("Rückgängig: {}", c.description()))
            .unwrap_or_default()
    }

    /// Menütext für Redo, leer wenn nichts wiederherzustellen ist.
    pub fn redo_text(&self) -> String {
        self.commands
            .get(self.cursor)
            .map(|c| format!("Wiederholen: {}", c.description()))
            .unwrap_or_default()
    }

    /// Entnimmt alle seit dem letzten Aufruf angefallenen Events.
    pub fn drain_events(&mut self) -> Vec<HistoryEvent> {
        std::mem::take(&mut self.events)
    }

    fn try_merge(&mut self, command: &EditCommand) -> bool {
        let Some(merge_id) = command.merge_id() else {
            return false;
        };
        let Some(previous) = self.commands.last_mut() else {
            return false;
        };
        if previous.merge_id() != Some(merge_id) || !previous.merge_with(command) {
            return false;
        }

        // Der Zustand nach dem zusammengeführten Command ist ein anderer.
        if self.clean_mark == Some(self.commands.len()) {
            self.clean_mark = None;
        }
        true
    }

    /// Entfernt die ältesten Commands über dem Limit. `true`, wenn gekürzt wurde.
    fn enforce_limit(&mut self) -> bool {
        if self.limit == 0 || self.commands.len() <= self.limit {
            return false;
        }

        let excess = self.commands.len() - self.limit;
        self.commands.drain(..excess);
        self.cursor = self.cursor.saturating_sub(excess);
        self.clean_mark = self.clean_mark.and_then(|mark| mark.checked_sub(excess));
        log::debug!("Undo-Limit {}: {} alte Commands verworfen", self.limit, excess);
        true
    }

    fn emit_state(&mut self) {
        self.events.extend([
            HistoryEvent::CanUndoChanged(self.can_undo()),
            HistoryEvent::CanRedoChanged(self.can_redo()),
            HistoryEvent::CleanChanged(self.is_clean()),
            HistoryEvent::IndexChanged(self.cursor),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Material, Scene, SceneNode};
    use crate::editing::SelectionModel;
    use crate::render::{HeadlessRenderer, RenderPort};
    use glam::{Mat4, Quat, Vec3};

    struct Fixture {
        renderer: HeadlessRenderer,
        selection: SelectionModel,
        history: CommandHistory,
    }

    impl Fixture {
        fn new(node_count: usize, limit: usize) -> Self {
            let mut scene = Scene::new();
            for i in 0..node_count {
                scene.add_node(SceneNode::new(format!("n{i}"), Mat4::IDENTITY, None));
            }
            scene.add_material(Material::default());
            let mut selection = SelectionModel::new();
            selection.bind_scene(node_count);
            Self {
                renderer: HeadlessRenderer::with_scene(scene),
                selection,
                history: CommandHistory::new(limit),
            }
        }

        fn push(&mut self, command: EditCommand) {
            let mut ctx = CommandContext::new(&mut self.renderer, &mut self.selection);
            self.history.push(command, &mut ctx);
        }

        fn undo(&mut self) -> bool {
            let mut ctx = CommandContext::new(&mut self.renderer, &mut self.selection);
            self.history.undo(&mut ctx)
        }

        fn redo(&mut self) -> bool {
            let mut ctx = CommandContext::new(&mut self.renderer, &mut self.selection);
            self.history.redo(&mut ctx)
        }

        fn transform(&self, node: usize) -> Mat4 {
            self.renderer.node_transform(node).expect("Node vorhanden")
        }

        /// Verschiebt `node` von seiner aktuellen Lage nach `target`.
        fn move_node(&mut self, node: usize, target: Mat4) {
            let old = self.transform(node);
            self.push(EditCommand::transform_node(node, old, target));
        }
    }

    fn odd_transform(seed: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(1.0 + seed * 0.1, 0.7, 1.3),
            Quat::from_euler(glam::EulerRot::XYZ, seed * 0.37, 0.11, seed * 0.05),
            Vec3::new(seed * 1.1, -seed * 0.3, 0.5 / (seed + 1.0)),
        )
    }

    #[test]
    fn undo_all_then_redo_all_restores_exact_values() {
        let mut f = Fixture::new(3, DEFAULT_UNDO_LIMIT);
        let initial: Vec<Mat4> = (0..3).map(|n| f.transform(n)).collect();

        for (i, node) in [0, 1, 2, 0, 1].into_iter().enumerate() {
            // Wechselnde Nodes, damit nichts zusammengeführt wird
            f.move_node(node, odd_transform(i as f32 + 1.0));
        }
        let mut changed_material = Material::default();
        changed_material.metallic = 0.9;
        f.push(EditCommand::modify_material(
            0,
            Material::default(),
            changed_material,
        ));
        assert_eq!(f.history.len(), 6);

        let after_push: Vec<Mat4> = (0..3).map(|n| f.transform(n)).collect();

        while f.undo() {}
        let undone: Vec<Mat4> = (0..3).map(|n| f.transform(n)).collect();
        assert_eq!(undone, initial);
        assert_eq!(
            f.renderer.scene().and_then(|s| s.material(0)),
            Some(&Material::default())
        );

        while f.redo() {}
        let redone: Vec<Mat4> = (0..3).map(|n| f.transform(n)).collect();
        assert_eq!(redone, after_push);
        assert_eq!(
            f.renderer.scene().and_then(|s| s.material(0)),
            Some(&changed_material)
        );
    }

    #[test]
    fn push_after_undo_truncates_redo_branch() {
        let mut f = Fixture::new(3, DEFAULT_UNDO_LIMIT);
        f.move_node(0, odd_transform(1.0));
        f.move_node(1, odd_transform(2.0));
        f.move_node(2, odd_transform(3.0));

        assert!(f.undo());
        assert_eq!(f.history.index(), 2);

        f.move_node(0, odd_transform(4.0));
        assert!(!f.history.can_redo());
        assert_eq!(f.history.len(), 3);
    }

    #[test]
    fn retention_limit_drops_oldest() {
        let mut f = Fixture::new(3, 2);
        f.move_node(0, odd_transform(1.0));
        f.move_node(1, odd_transform(2.0));
        f.move_node(2, odd_transform(3.0));

        assert_eq!(f.history.len(), 2);
        assert!(f.undo());
        assert!(f.undo());
        assert!(!f.undo());
        // Der älteste Command ist weg, Node 0 bleibt verschoben
        assert_eq!(f.transform(0), odd_transform(1.0));
    }

    #[test]
    fn same_node_transforms_merge_into_one_entry() {
        let mut f = Fixture::new(1, DEFAULT_UNDO_LIMIT);
        let start = f.transform(0);
        for i in 1..=5 {
            f.move_node(0, odd_transform(i as f32));
        }

        assert_eq!(f.history.len(), 1);
        assert_eq!(f.transform(0), odd_transform(5.0));
        assert!(f.undo());
        assert_eq!(f.transform(0), start);
        assert!(f.redo());
        assert_eq!(f.transform(0), odd_transform(5.0));
    }

    #[test]
    fn merge_back_to_start_removes_entry() {
        let mut f = Fixture::new(2, DEFAULT_UNDO_LIMIT);
        f.move_node(1, odd_transform(1.0));
        f.history.set_clean();
        let start = f.transform(0);

        f.move_node(0, odd_transform(2.0));
        f.move_node(0, start);

        assert_eq!(f.history.len(), 1);
        assert_eq!(f.history.index(), 1);
        assert!(f.history.is_clean());
        assert_eq!(f.history.undo_text(), "Rückgängig: Node transformieren");
    }

    #[test]
    fn noop_command_is_not_recorded() {
        let mut f = Fixture::new(1, DEFAULT_UNDO_LIMIT);
        let current = f.transform(0);
        f.push(EditCommand::transform_node(0, current, current));

        assert!(f.history.is_empty());
        assert!(f.history.drain_events().is_empty());
        assert_eq!(f.renderer.rebuild_count(), 0);
    }

    #[test]
    fn lambda_commands_never_merge() {
        let mut f = Fixture::new(1, DEFAULT_UNDO_LIMIT);
        f.push(EditCommand::lambda("a", |_| {}, |_| {}));
        f.push(EditCommand::lambda("b", |_| {}, |_| {}));
        assert_eq!(f.history.len(), 2);
        assert_eq!(f.history.undo_text(), "Rückgängig: b");
        assert_eq!(f.history.redo_text(), "");
        f.undo();
        assert_eq!(f.history.redo_text(), "Wiederholen: b");
    }

    #[test]
    fn undo_and_redo_on_empty_history_are_noops() {
        let mut f = Fixture::new(1, DEFAULT_UNDO_LIMIT);
        assert!(!f.undo());
        assert!(!f.redo());
        assert!(f.history.drain_events().is_empty());
        assert_eq!(f.history.undo_text(), "");
    }

    #[test]
    fn push_emits_state_notifications() {
        let mut f = Fixture::new(1, DEFAULT_UNDO_LIMIT);
        f.move_node(0, odd_transform(1.0));
        assert_eq!(
            f.history.drain_events(),
            vec![
                HistoryEvent::CanUndoChanged(true),
                HistoryEvent::CanRedoChanged(false),
                HistoryEvent::CleanChanged(false),
                HistoryEvent::IndexChanged(1),
            ]
        );
    }

    #[test]
    fn clean_mark_follows_cursor() {
        let mut f = Fixture::new(2, DEFAULT_UNDO_LIMIT);
        assert!(f.history.is_clean());

        f.move_node(0, odd_transform(1.0));
        assert!(!f.history.is_clean());
        f.history.drain_events();

        f.history.set_clean();
        assert!(f.history.is_clean());
        assert_eq!(f.history.drain_events(), vec![HistoryEvent::CleanChanged(true)]);
        f.history.set_clean();
        assert!(f.history.drain_events().is_empty());

        f.move_node(1, odd_transform(2.0));
        assert!(!f.history.is_clean());
        f.undo();
        assert!(f.history.is_clean());
    }

    #[test]
    fn truncating_past_clean_mark_makes_clean_unreachable() {
        let mut f = Fixture::new(2, DEFAULT_UNDO_LIMIT);
        f.move_node(0, odd_transform(1.0));
        f.move_node(1, odd_transform(2.0));
        f.history.set_clean();

        f.undo();
        f.move_node(0, odd_transform(3.0));
        assert!(!f.history.is_clean());
        f.undo();
        assert!(!f.history.is_clean());
        f.redo();
        assert!(!f.history.is_clean());
    }

    #[test]
    fn merging_into_clean_command_makes_clean_unreachable() {
        let mut f = Fixture::new(1, DEFAULT_UNDO_LIMIT);
        f.move_node(0, odd_transform(1.0));
        f.history.set_clean();

        f.move_node(0, odd_transform(2.0));
        assert_eq!(f.history.len(), 1);
        assert!(!f.history.is_clean());
    }

    #[test]
    fn limit_moves_clean_mark_and_drops_it_at_zero() {
        let mut f = Fixture::new(3, 2);
        f.move_node(0, odd_transform(1.0));
        f.history.set_clean();
        f.move_node(1, odd_transform(2.0));
        f.move_node(2, odd_transform(3.0));

        // Speicherpunkt lag nach Command 0 → jetzt Index 0 → erreichbar
        f.undo();
        f.undo();
        assert!(f.history.is_clean());

        let mut g = Fixture::new(3, 2);
        g.history.set_clean();
        g.move_node(0, odd_transform(1.0));
        g.move_node(1, odd_transform(2.0));
        g.move_node(2, odd_transform(3.0));
        while g.undo() {}
        assert!(!g.history.is_clean());
    }

    #[test]
    fn set_undo_limit_enforces_immediately() {
        let mut f = Fixture::new(3, 0);
        f.move_node(0, odd_transform(1.0));
        f.move_node(1, odd_transform(2.0));
        f.move_node(2, odd_transform(3.0));
        assert_eq!(f.history.len(), 3);

        f.history.set_undo_limit(1);
        assert_eq!(f.history.len(), 1);
        assert_eq!(f.history.index(), 1);
        assert_eq!(f.history.undo_limit(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut f = Fixture::new(2, DEFAULT_UNDO_LIMIT);
        f.move_node(0, odd_transform(1.0));
        f.move_node(1, odd_transform(2.0));
        f.undo();

        f.history.clear();
        assert!(f.history.is_empty());
        assert!(!f.history.can_undo());
        assert!(!f.history.can_redo());
        assert!(f.history.is_clean());
        assert!(f.history.command(0).is_none());
    }
}
