//! EditorIntent-Enum für den Intent-Datenfluss.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik; der
//! Controller übersetzt sie in Use-Case-Aufrufe auf dem `EditorState`.

use glam::Vec2;
use std::path::PathBuf;
use std::time::Instant;

/// Eingabe-Ereignisse des Editors.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Pointer gedrückt: Pick + Gestenstart (Handle, Punkt oder Rechteck)
    PointerPressed { screen_pos: Vec2, additive: bool },
    /// Pointer gezogen: aktive Geste fortschreiben
    PointerDragged { screen_pos: Vec2, delta_screen: Vec2 },
    /// Pointer losgelassen: aktive Geste beenden
    PointerReleased,
    /// Pan-Taste gedrückt (mittlere Maustaste)
    PanPressed,
    /// Skalier-Geste auf der Selektion starten
    BeginScaleRequested { vertical_only: bool },

    /// Neuen Punkt hinzufügen
    AddPointRequested,
    /// Selektierte Punkte löschen
    DeleteSelectionRequested,
    /// Einzelnen Punkt löschen
    DeletePointRequested { name: String },
    /// Punkt-Typ umschalten (smooth ⇔ sharp)
    TogglePointKindRequested { name: String },
    /// Stern-Markierung umschalten
    ToggleStarRequested { name: String },
    /// Selektierte Punkte auf die Baseline setzen
    SnapToBaselineRequested,
    /// Punkt umbenennen
    RenamePointRequested { old: String, new: String },

    /// Alle Punkte selektieren
    SelectAllRequested,
    /// Selektion leeren
    ClearSelectionRequested,

    /// Letzten Commit rückgängig machen
    UndoRequested,
    /// Rückgängig gemachten Commit wiederherstellen
    RedoRequested,

    /// Stufenweise hineinzoomen (am Cursor verankert)
    ZoomInRequested { focus_screen: Vec2 },
    /// Stufenweise herauszoomen (am Cursor verankert)
    ZoomOutRequested { focus_screen: Vec2 },
    /// Scroll-Zoom am Cursor
    ScrollZoom { focus_screen: Vec2, up: bool },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Kurve im Viewport zentrieren
    CenterCurveRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// Scrollende Vorschau starten
    EnterPreviewRequested { now: Instant },
    /// Vorschau beenden, zurück zum Editieren
    LeavePreviewRequested,

    /// Kurve aus Datei importieren (Autoren-Format)
    ImportFileRequested { path: PathBuf },
    /// Kurve in Datei exportieren (Autoren-Format)
    ExportFileRequested { path: PathBuf },
    /// Normalisierte Form in Datei exportieren
    ExportNormalizedRequested { path: PathBuf },
}
