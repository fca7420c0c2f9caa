//! Use-Cases: Picking und Selektion.

use crate::app::state::{EditorState, HandleKind};
use crate::core::CurveStore;
use glam::Vec2;

/// Ergebnis eines Picks an einer Screen-Position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickTarget {
    /// Anker-Punkt getroffen
    Anchor(String),
    /// Handle des primären Smooth-Punkts getroffen
    Handle(String, HandleKind),
}

/// Pickt das Element unter dem Cursor.
///
/// Der Pick-Radius ist in Screen-Pixeln konstant, unabhängig vom Zoom.
/// Handles des Primär-Punkts haben Vorrang vor Ankern, damit ein Handle
/// nahe am eigenen Anker greifbar bleibt.
pub fn pick_at(state: &EditorState, screen_pos: Vec2) -> Option<PickTarget> {
    let camera = &state.view.camera;
    let radius = state.options.pick_radius_px;

    if let Some(primary) = state.selection.primary.as_deref() {
        if let Some((cp1, cp2)) = state.curve.get(primary).and_then(|p| p.kind.handles()) {
            let d1 = camera.world_to_screen(cp1).distance(screen_pos);
            let d2 = camera.world_to_screen(cp2).distance(screen_pos);
            if d1 <= radius && d1 <= d2 {
                return Some(PickTarget::Handle(primary.to_string(), HandleKind::Cp1));
            }
            if d2 <= radius {
                return Some(PickTarget::Handle(primary.to_string(), HandleKind::Cp2));
            }
        }
    }

    let world_radius = radius * camera.world_per_pixel();
    let world_pos = camera.screen_to_world(screen_pos);
    match state.curve.nearest_anchor(world_pos) {
        Some((name, dist)) if dist <= world_radius => {
            Some(PickTarget::Anchor(name.to_string()))
        }
        _ => None,
    }
}

/// Wendet Klick-Semantik auf einen getroffenen Anker an.
///
/// Additiv (Modifier gehalten) wird die Mitgliedschaft getoggelt. Ohne
/// Modifier ersetzt der Klick die Selektion — außer der Punkt ist bereits
/// selektiert, dann bleibt die Mehrfach-Selektion für einen folgenden Drag
/// erhalten und nur der Primär-Punkt wechselt.
pub fn select_point_click(state: &mut EditorState, name: &str, additive: bool) {
    if additive {
        if state.selection.is_selected(name) {
            state.selection.ids_mut().remove(name);
            if state.selection.primary.as_deref() == Some(name) {
                state.selection.primary = state.selection.sorted_names().into_iter().next();
            }
        } else {
            state.selection.ids_mut().insert(name.to_string());
            state.selection.primary = Some(name.to_string());
        }
        return;
    }

    if !state.selection.is_selected(name) {
        state.selection.clear();
        state.selection.ids_mut().insert(name.to_string());
    }
    state.selection.primary = Some(name.to_string());
}

/// Klick ins Leere: ohne Modifier wird die Selektion geleert.
pub fn click_on_empty(state: &mut EditorState, additive: bool) {
    if !additive {
        state.selection.clear();
    }
}

/// Namen aller Punkte, deren Anker im Rechteck (a, b) liegt.
///
/// Nur Anker zählen — Handles außerhalb schließen einen Punkt nicht aus,
/// Handles innerhalb nehmen keinen auf.
pub fn points_in_rect(curve: &CurveStore, a: Vec2, b: Vec2) -> Vec<String> {
    let min = a.min(b);
    let max = a.max(b);
    curve
        .iter()
        .filter(|p| {
            p.position.x >= min.x
                && p.position.x <= max.x
                && p.position.y >= min.y
                && p.position.y <= max.y
        })
        .map(|p| p.name.clone())
        .collect()
}

/// Selektiert alle Punkte der Kurve.
pub fn select_all(state: &mut EditorState) {
    let names: Vec<String> = state.curve.iter().map(|p| p.name.clone()).collect();
    let ids = state.selection.ids_mut();
    ids.clear();
    for name in names {
        ids.insert(name);
    }
    if state.selection.primary.is_none() {
        state.selection.primary = state.selection.sorted_names().into_iter().next();
    }
}

/// Leert die Selektion.
pub fn clear_selection(state: &mut EditorState) {
    state.selection.clear();
}
