//! Use-Cases: Undo/Redo über Snapshot-History.

use crate::app::notify::{Notifier, Severity};
use crate::app::state::EditorState;

/// Macht den letzten Commit rückgängig.
///
/// Am Anfang der History: No-op mit Advisory, kein Fehler.
pub fn undo(state: &mut EditorState, notifier: &mut dyn Notifier) {
    let Some(snapshot) = state.history.undo() else {
        notifier.advise("Nichts mehr rückgängig zu machen", Severity::Info);
        return;
    };
    log::debug!("Undo auf '{}'", snapshot.label);
    state.curve = snapshot.curve;
    prune_selection(state);
    super::session::autosave(state, notifier);
}

/// Stellt den zuletzt rückgängig gemachten Commit wieder her.
pub fn redo(state: &mut EditorState, notifier: &mut dyn Notifier) {
    let Some(snapshot) = state.history.redo() else {
        notifier.advise("Nichts wiederherzustellen", Severity::Info);
        return;
    };
    log::debug!("Redo auf '{}'", snapshot.label);
    state.curve = snapshot.curve;
    prune_selection(state);
    super::session::autosave(state, notifier);
}

/// Entfernt Selektion/Primary von Punkten, die der wiederhergestellte
/// Zustand nicht mehr kennt.
fn prune_selection(state: &mut EditorState) {
    let stale: Vec<String> = state
        .selection
        .sorted_names()
        .into_iter()
        .filter(|n| !state.curve.contains(n))
        .collect();
    for name in &stale {
        state.selection.ids_mut().remove(name);
    }
    if let Some(primary) = state.selection.primary.as_deref() {
        if !state.curve.contains(primary) {
            state.selection.primary = None;
        }
    }
}
