//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;
use crate::editing::CommandContext;
use crate::render::RenderPort;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState, renderer: &mut dyn RenderPort) {
    let mut ctx = CommandContext::new(renderer, &mut state.selection);
    if !state.history.undo(&mut ctx) {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState, renderer: &mut dyn RenderPort) {
    let mut ctx = CommandContext::new(renderer, &mut state.selection);
    if !state.history.redo(&mut ctx) {
        log::debug!("Redo: nichts zu tun");
    }
}

/// Markiert den aktuellen Verlaufsstand als gespeichert.
pub fn mark_clean(state: &mut AppState) {
    state.history.set_clean();
    log::info!("Speicherpunkt gesetzt (Index {})", state.history.index());
}
