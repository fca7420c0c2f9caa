//! Use-Cases: Punkt hinzufügen/löschen/umschalten/umbenennen.

use crate::app::notify::{Notifier, Severity};
use crate::app::state::EditorState;
use crate::core::AnchorPoint;
use glam::Vec2;

/// Fügt einen neuen Sharp-Punkt auf der Baseline hinzu.
///
/// Mit selektiertem Primär-Punkt wird 100 Einheiten rechts davon platziert
/// (geklemmt auf den rechten Rand); kollidiert das mit bestehender Dichte,
/// zentriert die Gap-Suche im ersten Intervall ≥ Mindest-Gap danach. Ohne
/// Selektion läuft die Gap-Suche global, sonst wird hinter dem rechtesten
/// Punkt angehängt. Ohne jede Lücke wird an den Rand gepinnt und eine
/// nicht-blockierende "Canvas überfüllt"-Advisory gemeldet.
pub fn add_point(state: &mut EditorState, notifier: &mut dyn Notifier) {
    let anchor_x = state
        .selection
        .primary
        .as_deref()
        .and_then(|name| state.curve.get(name))
        .map(|p| p.position.x);

    let placement = state
        .curve
        .placement_x(anchor_x, state.options.min_point_gap);
    if placement.crowded {
        notifier.advise(
            "Canvas überfüllt: Punkt an den rechten Rand gepinnt",
            Severity::Info,
        );
    }

    let name = state.curve.next_free_name();
    let position = Vec2::new(placement.x, state.canvas().baseline_y);
    let point = AnchorPoint::sharp(&name, position, state.options.point_color_default);

    if let Err(e) = state.curve_mut().insert_point(point) {
        notifier.advise(&e.to_string(), Severity::Warning);
        return;
    }

    state.selection.clear();
    state.selection.ids_mut().insert(name.clone());
    state.selection.primary = Some(name.clone());

    log::info!(
        "Punkt '{}' bei ({:.1}, {:.1}) hinzugefügt",
        name,
        position.x,
        position.y
    );
    state.commit("Punkt hinzugefügt", notifier);
}

/// Löscht einen Punkt.
///
/// Verweigert mit Advisory (Zustand unverändert), wenn nur noch zwei
/// Punkte existieren.
pub fn delete_point(state: &mut EditorState, name: &str, notifier: &mut dyn Notifier) {
    // Minimum vorab prüfen, damit kein CoW-Klon für einen No-op anfällt
    if state.curve.len() <= 2 {
        notifier.advise(
            "Löschen verweigert: Kurve benötigt mindestens zwei Punkte",
            Severity::Warning,
        );
        return;
    }

    if let Err(e) = state.curve_mut().delete_point(name) {
        notifier.advise(&e.to_string(), Severity::Warning);
        return;
    }

    if state.selection.is_selected(name) {
        state.selection.ids_mut().remove(name);
    }
    if state.selection.primary.as_deref() == Some(name) {
        state.selection.primary = None;
    }

    log::info!("Punkt '{}' gelöscht", name);
    state.commit("Punkt gelöscht", notifier);
}

/// Löscht alle selektierten Punkte (soweit das Minimum es erlaubt).
pub fn delete_selected(state: &mut EditorState, notifier: &mut dyn Notifier) {
    let names = state.selection.sorted_names();
    if names.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }
    let mut deleted = 0usize;
    for name in &names {
        if state.curve.len() <= 2 {
            notifier.advise(
                "Löschen gestoppt: Kurve benötigt mindestens zwei Punkte",
                Severity::Warning,
            );
            break;
        }
        if state.curve_mut().delete_point(name).is_ok() {
            state.selection.ids_mut().remove(name);
            if state.selection.primary.as_deref() == Some(name.as_str()) {
                state.selection.primary = None;
            }
            deleted += 1;
        }
    }
    if deleted > 0 {
        log::info!("{} Punkt(e) gelöscht", deleted);
        state.commit("Punkte gelöscht", notifier);
    }
}

/// Schaltet den Punkt-Typ um (smooth ⇔ sharp).
pub fn toggle_point_kind(state: &mut EditorState, name: &str, notifier: &mut dyn Notifier) {
    if let Err(e) = state.curve_mut().toggle_point_kind(name) {
        notifier.advise(&e.to_string(), Severity::Warning);
        return;
    }
    state.commit("Punkt-Typ umgeschaltet", notifier);
}

/// Schaltet die Stern-Markierung um (kein geometrischer Effekt).
pub fn toggle_star(state: &mut EditorState, name: &str, notifier: &mut dyn Notifier) {
    if let Err(e) = state.curve_mut().toggle_star(name) {
        notifier.advise(&e.to_string(), Severity::Warning);
        return;
    }
    state.commit("Markierung umgeschaltet", notifier);
}

/// Setzt alle selektierten Punkte auf die Baseline.
pub fn snap_selected_to_baseline(state: &mut EditorState, notifier: &mut dyn Notifier) {
    let names = state.selection.sorted_names();
    if names.is_empty() {
        return;
    }
    state.curve_mut().snap_to_baseline(&names);
    log::info!("{} Punkt(e) auf Baseline gesetzt", names.len());
    state.commit("Auf Baseline gesetzt", notifier);
}

/// Benennt einen Punkt um; der Name bleibt eindeutiger Schlüssel.
pub fn rename_point(
    state: &mut EditorState,
    old: &str,
    new: &str,
    notifier: &mut dyn Notifier,
) {
    if let Err(e) = state.curve_mut().rename_point(old, new) {
        notifier.advise(&e.to_string(), Severity::Warning);
        return;
    }
    if state.selection.ids_mut().remove(old) {
        state.selection.ids_mut().insert(new.to_string());
    }
    if state.selection.primary.as_deref() == Some(old) {
        state.selection.primary = Some(new.to_string());
    }
    state.commit("Punkt umbenannt", notifier);
}
