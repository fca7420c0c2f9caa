//! Use-Cases: Gesten-Lebenszyklus (begin/update/end).
//!
//! Jede Geste startet nur aus `Idle` und nur im Editing-Modus; mutierende
//! Gesten committen genau einmal am Gestenende, nie pro Zwischen-Tick.

use crate::app::notify::{Notifier, Severity};
use crate::app::playback::PlaybackMode;
use crate::app::state::{EditorState, GestureMode, HandleKind};
use glam::Vec2;
use std::sync::Arc;

use super::selection::points_in_rect;

/// True wenn eine neue Geste starten darf.
fn can_begin(state: &EditorState) -> bool {
    state.gesture.is_idle() && state.playback.mode == PlaybackMode::Editing
}

// --- Rechteck-Selektion -------------------------------------------------

/// Startet eine Rechteck-Selektion; reine Selektions-Geste, kein Commit.
pub fn begin_box_select(state: &mut EditorState, start_world: Vec2, additive: bool) -> bool {
    if !can_begin(state) {
        return false;
    }
    let base = (*state.selection.selected).clone();
    state.gesture = GestureMode::BoxSelect {
        start_world,
        current_world: start_world,
        additive,
        base,
    };
    true
}

/// Zieht die aktuelle Ecke nach und aktualisiert die Selektion live.
pub fn update_box_select(state: &mut EditorState, current: Vec2) {
    let GestureMode::BoxSelect {
        start_world,
        current_world,
        additive,
        base,
    } = &mut state.gesture
    else {
        return;
    };
    *current_world = current;

    let inside = points_in_rect(&state.curve, *start_world, current);
    let ids = Arc::make_mut(&mut state.selection.selected);
    ids.clear();
    if *additive {
        ids.extend(base.iter().cloned());
    }
    ids.extend(inside);

    if let Some(primary) = state.selection.primary.as_deref() {
        if !state.selection.is_selected(primary) {
            state.selection.primary = None;
        }
    }
}

/// Beendet die Rechteck-Selektion (kein History-Commit).
pub fn end_box_select(state: &mut EditorState) {
    if matches!(state.gesture, GestureMode::BoxSelect { .. }) {
        state.gesture = GestureMode::Idle;
    }
}

// --- Punkte verschieben -------------------------------------------------

/// Startet das Verschieben der selektierten Punkte.
pub fn begin_point_drag(state: &mut EditorState) -> bool {
    if !can_begin(state) || state.selection.is_empty() {
        return false;
    }
    state.gesture = GestureMode::DragPoints { moved: false };
    true
}

/// Verschiebt die Selektion um ein Welt-Delta (pro Tick).
pub fn update_point_drag(state: &mut EditorState, delta_world: Vec2) {
    let GestureMode::DragPoints { moved } = &mut state.gesture else {
        return;
    };
    *moved = true;
    let names = state.selection.sorted_names();
    Arc::make_mut(&mut state.curve).translate_points(&names, delta_world);
}

/// Beendet den Drag; committet genau einmal, falls sich etwas bewegt hat.
pub fn end_point_drag(state: &mut EditorState, notifier: &mut dyn Notifier) {
    let GestureMode::DragPoints { moved } = std::mem::take(&mut state.gesture) else {
        return;
    };
    if moved {
        state.commit("Punkte verschoben", notifier);
    }
}

// --- Handle ziehen ------------------------------------------------------

/// Startet das Ziehen eines Handles eines Smooth-Punkts.
pub fn begin_handle_drag(state: &mut EditorState, name: &str, handle: HandleKind) -> bool {
    if !can_begin(state) {
        return false;
    }
    let is_smooth = state
        .curve
        .get(name)
        .map(|p| p.kind.is_smooth())
        .unwrap_or(false);
    if !is_smooth {
        log::debug!("Handle-Drag auf '{}' abgelehnt (kein Smooth-Punkt)", name);
        return false;
    }
    state.gesture = GestureMode::DragHandle {
        point: name.to_string(),
        handle,
        moved: false,
    };
    true
}

/// Setzt den gegriffenen Handle auf eine Weltposition (pro Tick).
pub fn update_handle_drag(state: &mut EditorState, world_pos: Vec2) {
    let GestureMode::DragHandle {
        point,
        handle,
        moved,
    } = &mut state.gesture
    else {
        return;
    };
    let second = *handle == HandleKind::Cp2;
    if Arc::make_mut(&mut state.curve).set_handle(point, second, world_pos) {
        *moved = true;
    }
}

/// Beendet den Handle-Drag; committet genau einmal, falls bewegt.
pub fn end_handle_drag(state: &mut EditorState, notifier: &mut dyn Notifier) {
    let GestureMode::DragHandle { moved, .. } = std::mem::take(&mut state.gesture) else {
        return;
    };
    if moved {
        state.commit("Handle verschoben", notifier);
    }
}

// --- Kamera-Pan ---------------------------------------------------------

/// Startet einen Kamera-Pan (reine Navigation, kein Commit).
pub fn begin_pan(state: &mut EditorState) -> bool {
    if !can_begin(state) {
        return false;
    }
    state.gesture = GestureMode::Pan;
    true
}

/// Verschiebt die Kamera um ein Screen-Delta (pro Tick).
pub fn update_pan(state: &mut EditorState, delta_screen: Vec2) {
    if matches!(state.gesture, GestureMode::Pan) {
        super::camera::pan_screen(state, delta_screen);
    }
}

/// Beendet den Pan.
pub fn end_pan(state: &mut EditorState) {
    if matches!(state.gesture, GestureMode::Pan) {
        state.gesture = GestureMode::Idle;
    }
}

// --- Skalieren ----------------------------------------------------------

/// Startet die Skalier-Geste um den Schwerpunkt der Selektion.
///
/// Braucht mindestens zwei selektierte Punkte, sonst Advisory und kein
/// Gestenstart.
pub fn begin_transform_scale(
    state: &mut EditorState,
    vertical_only: bool,
    notifier: &mut dyn Notifier,
) -> bool {
    if !can_begin(state) {
        return false;
    }
    let names = state.selection.sorted_names();
    if names.len() < 2 {
        notifier.advise(
            "Skalieren braucht mindestens zwei selektierte Punkte",
            Severity::Info,
        );
        return false;
    }

    let sum: Vec2 = names
        .iter()
        .filter_map(|n| state.curve.get(n))
        .map(|p| p.position)
        .sum();
    let origin = sum / names.len() as f32;
    let start_poses = state.curve.poses_of(&names);

    state.gesture = GestureMode::TransformScale {
        origin,
        start_poses,
        accum_screen: Vec2::ZERO,
        vertical_only,
    };
    true
}

/// Akkumuliert das Screen-Delta und wendet die Skalierung von den
/// Start-Posen aus an (idempotent pro Tick, nicht kumulativ).
pub fn update_transform_scale(state: &mut EditorState, delta_screen: Vec2) {
    let sensitivity = state.options.scale_sensitivity_px;
    let GestureMode::TransformScale {
        origin,
        start_poses,
        accum_screen,
        vertical_only,
    } = &mut state.gesture
    else {
        return;
    };
    *accum_screen += delta_screen;

    let sx = if *vertical_only {
        1.0
    } else {
        1.0 + accum_screen.x / sensitivity
    };
    let sy = 1.0 + accum_screen.y / sensitivity;
    Arc::make_mut(&mut state.curve).scale_from_poses(*origin, Vec2::new(sx, sy), start_poses);
}

/// Beendet die Skalier-Geste; committet genau einmal, falls bewegt.
pub fn end_transform_scale(state: &mut EditorState, notifier: &mut dyn Notifier) {
    let GestureMode::TransformScale { accum_screen, .. } = std::mem::take(&mut state.gesture)
    else {
        return;
    };
    if accum_screen != Vec2::ZERO {
        state.commit("Selektion skaliert", notifier);
    }
}
