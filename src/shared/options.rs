//! Zentrale Konfiguration für den Pulsform-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Breite des Autor-Canvas in Autor-Einheiten.
pub const CANVAS_WIDTH: f32 = 1200.0;
/// Standard-Höhe des Autor-Canvas in Autor-Einheiten.
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Baseline-Position als Anteil der Canvas-Höhe (0.5 = Mitte).
pub const BASELINE_RATIO: f32 = 0.5;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.2;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 10.0;
/// Zoom-Schritt bei stufenweisem Zoom (Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Editing ─────────────────────────────────────────────────────────

/// Pick-Radius für Anker und Handles in Screen-Pixeln (zoom-unabhängig).
pub const PICK_RADIUS_PX: f32 = 5.0;
/// Mindestabstand neuer Punkte in Autor-Einheiten (Gap-Suche).
pub const MIN_POINT_GAP: f32 = 100.0;
/// Scale-Geste: Screen-Pixel pro 100% Skalierungsänderung.
pub const SCALE_SENSITIVITY_PX: f32 = 100.0;
/// Maximale Tiefe der Undo/Redo-History.
pub const HISTORY_CAPACITY: usize = 100;

// ── Wiedergabe ──────────────────────────────────────────────────────

/// Dauer eines Wiedergabe-Zyklus in Sekunden.
pub const PREVIEW_CYCLE_SECS: f32 = 2.0;

// ── Punkt-Rendering ─────────────────────────────────────────────────

/// Standard-Farbe neuer Punkte (RGBA).
pub const POINT_COLOR_DEFAULT: [f32; 4] = [0.85, 0.25, 0.3, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pulsform_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Breite des Autor-Canvas in Autor-Einheiten
    pub canvas_width: f32,
    /// Höhe des Autor-Canvas in Autor-Einheiten
    pub canvas_height: f32,
    /// Baseline-Position als Anteil der Canvas-Höhe
    pub baseline_ratio: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Editing ─────────────────────────────────────────────────
    /// Pick-Radius in Screen-Pixeln
    pub pick_radius_px: f32,
    /// Mindestabstand neuer Punkte (Gap-Suche)
    #[serde(default = "default_min_point_gap")]
    pub min_point_gap: f32,
    /// Scale-Geste: Pixel pro 100% Skalierung
    #[serde(default = "default_scale_sensitivity")]
    pub scale_sensitivity_px: f32,
    /// Maximale History-Tiefe
    pub history_capacity: usize,

    // ── Wiedergabe ──────────────────────────────────────────────
    /// Zyklusdauer der Vorschau in Sekunden
    pub preview_cycle_secs: f32,

    // ── Punkte ──────────────────────────────────────────────────
    /// Standard-Farbe neuer Punkte (RGBA)
    pub point_color_default: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            baseline_ratio: BASELINE_RATIO,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            pick_radius_px: PICK_RADIUS_PX,
            min_point_gap: MIN_POINT_GAP,
            scale_sensitivity_px: SCALE_SENSITIVITY_PX,
            history_capacity: HISTORY_CAPACITY,

            preview_cycle_secs: PREVIEW_CYCLE_SECS,

            point_color_default: POINT_COLOR_DEFAULT,
        }
    }
}

/// Serde-Default für `min_point_gap` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_min_point_gap() -> f32 {
    MIN_POINT_GAP
}

/// Serde-Default für `scale_sensitivity_px` (Abwärtskompatibilität).
fn default_scale_sensitivity() -> f32 {
    SCALE_SENSITIVITY_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pulsform_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pulsform_editor.toml")
    }

    /// Baseline-Position in Autor-Einheiten (`baseline_ratio * canvas_height`).
    pub fn baseline_y(&self) -> f32 {
        self.baseline_ratio * self.canvas_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_sind_konsistent() {
        let opts = EditorOptions::default();
        assert!(opts.camera_zoom_min < opts.camera_zoom_max);
        assert!(opts.min_point_gap > 0.0);
        assert!(opts.history_capacity > 0);
        assert!((opts.baseline_y() - 300.0).abs() < f32::EPSILON);
    }

    #[test]
    fn toml_roundtrip_erhaelt_alle_felder() {
        let mut opts = EditorOptions::default();
        opts.pick_radius_px = 8.0;
        opts.canvas_width = 1600.0;

        let content = toml::to_string_pretty(&opts).expect("serialisierbar");
        let restored: EditorOptions = toml::from_str(&content).expect("parsebar");

        assert_eq!(restored.pick_radius_px, 8.0);
        assert_eq!(restored.canvas_width, 1600.0);
        assert_eq!(restored.history_capacity, opts.history_capacity);
    }
}
