//! Kubische Bézier-Auswertung für Segmente und Sampler.

use glam::Vec2;

/// Wertet eine kubische Bézier-Kurve an Parameter `t` aus.
pub fn cubic_bezier(p0: Vec2, cp1: Vec2, cp2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + cp1 * (3.0 * u * u * t) + cp2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Kubischer Bézier-Blend nur über die y-Komponente.
///
/// Standard-Bernstein-Gewichtung `(1−t)³, 3(1−t)²t, 3(1−t)t², t³` über
/// (start.y, start.cp2.y, end.cp1.y, end.y) — genau die Mischung, die der
/// zyklische Sampler pro Smooth-Segment verwendet.
pub fn cubic_bezier_y(y0: f32, y1: f32, y2: f32, y3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    y0 * (u * u * u) + y1 * (3.0 * u * u * t) + y2 * (3.0 * u * t * t) + y3 * (t * t * t)
}

/// Lineare Interpolation zwischen zwei y-Werten.
pub fn lerp_y(y0: f32, y1: f32, t: f32) -> f32 {
    y0 + t * (y1 - y0)
}
