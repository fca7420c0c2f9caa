//! 2D-Kamera für Pan und Zoom im Autor-Raum.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Definiert die Bijektion zwischen Autor- und Bildschirm-Koordinaten:
/// `world_to_screen(p) = (p - pan) * zoom` und
/// `screen_to_world(s) = s / zoom + pan`.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Pan-Offset in Autor-Koordinaten
    pub pan: Vec2,
    /// Zoom-Faktor (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera.
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Verschiebt die Kamera (Pan) um ein Welt-Delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Ändert den Zoom-Level mit Clamping auf [min, max].
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Autor-Koordinaten zu Bildschirm-Koordinaten.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.pan) * self.zoom
    }

    /// Konvertiert Bildschirm-Koordinaten zu Autor-Koordinaten.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom + self.pan
    }

    /// Zoomt so, dass der Welt-Punkt unter `focus_screen` exakt an derselben
    /// Bildschirmposition bleibt (definierende Invariante des Rad-Zooms).
    pub fn zoom_at(&mut self, focus_screen: Vec2, factor: f32, min: f32, max: f32) {
        let old_zoom = self.zoom;
        self.zoom_by_clamped(factor, min, max);
        // pan' = pan + s/z_alt - s/z_neu hält s/z + pan konstant
        self.pan += focus_screen / old_zoom - focus_screen / self.zoom;
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Autor-Einheiten.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
