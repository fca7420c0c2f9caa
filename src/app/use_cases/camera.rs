//! Use-Cases: Kamera-Navigation (Zoom, Pan, Reset).
//!
//! Navigation ist nie Teil der Undo/Redo-History — Kamerabewegungen
//! erzeugen keine Commits.

use crate::app::state::EditorState;
use glam::Vec2;

/// Zoomt um einen Schritt hinein, verankert an der Cursor-Position.
pub fn zoom_in(state: &mut EditorState, focus_screen: Vec2) {
    let step = state.options.camera_zoom_step;
    zoom_at(state, focus_screen, step);
}

/// Zoomt um einen Schritt heraus, verankert an der Cursor-Position.
pub fn zoom_out(state: &mut EditorState, focus_screen: Vec2) {
    let step = state.options.camera_zoom_step;
    zoom_at(state, focus_screen, 1.0 / step);
}

/// Scroll-Zoom mit feinerem Faktor.
pub fn zoom_scroll(state: &mut EditorState, focus_screen: Vec2, scroll_up: bool) {
    let step = state.options.camera_scroll_zoom_step;
    let factor = if scroll_up { step } else { 1.0 / step };
    zoom_at(state, focus_screen, factor);
}

/// Zoomt um einen beliebigen Faktor am Cursor; der Weltpunkt unter dem
/// Cursor bleibt exakt stehen.
pub fn zoom_at(state: &mut EditorState, focus_screen: Vec2, factor: f32) {
    state.view.camera.zoom_at(
        focus_screen,
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera um ein Screen-Delta (Drag-Richtung).
pub fn pan_screen(state: &mut EditorState, delta_screen: Vec2) {
    let world = delta_screen * state.view.camera.world_per_pixel();
    state.view.camera.pan_by(-world);
}

/// Setzt die Kamera auf den Ausgangszustand zurück.
pub fn reset(state: &mut EditorState) {
    state.view.camera.pan = Vec2::ZERO;
    state.view.camera.zoom = 1.0;
}

/// Zentriert die Kurve im Viewport (Zoom unverändert).
pub fn center_on_curve(state: &mut EditorState) {
    let points = state.curve.sorted_points();
    let Some(first) = points.first() else {
        return;
    };
    let mut min = first.position;
    let mut max = first.position;
    for p in &points {
        min = min.min(p.position);
        max = max.max(p.position);
    }
    let mid_world = (min + max) * 0.5;
    let viewport = Vec2::new(state.view.viewport_size[0], state.view.viewport_size[1]);
    let camera = &mut state.view.camera;
    camera.pan = mid_world - viewport * 0.5 * camera.world_per_pixel();
}
