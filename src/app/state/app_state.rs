use crate::app::history::{EditHistory, Snapshot};
use crate::app::notify::Notifier;
use crate::app::playback::PlaybackState;
use crate::core::{default_curve, CanvasSpec, CurveStore};
use crate::shared::EditorOptions;
use std::path::PathBuf;
use std::sync::Arc;

use super::{GestureMode, SelectionState, ViewState};

/// Hauptzustand der Anwendung.
pub struct EditorState {
    /// Aktuelle Kurve (Arc für O(1)-History-Snapshots, CoW bei Mutation)
    pub curve: Arc<CurveStore>,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Aktiver Gesten-Modus
    pub gesture: GestureMode,
    /// Wiedergabe-State (Modus + Phasen-Uhr)
    pub playback: PlaybackState,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Pfad des Session-Slots für Autosave (None = kein Autosave)
    pub autosave_slot: Option<PathBuf>,
}

impl EditorState {
    /// Erstellt einen neuen App-State mit Default-Optionen und -Kurve.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let canvas = CanvasSpec::new(
            options.canvas_width,
            options.canvas_height,
            options.baseline_y(),
        );
        let curve = Arc::new(default_curve::generate(canvas));
        let history = EditHistory::new(
            options.history_capacity,
            Snapshot::new(curve.clone(), "Initial"),
        );
        Self {
            curve,
            view: ViewState::new(),
            selection: SelectionState::new(),
            gesture: GestureMode::Idle,
            playback: PlaybackState::new(options.preview_cycle_secs),
            history,
            options,
            autosave_slot: None,
        }
    }

    /// Ersetzt die Kurve und setzt die History auf den neuen Zustand auf.
    pub fn replace_curve(&mut self, curve: CurveStore, label: &str) {
        self.curve = Arc::new(curve);
        self.selection.clear();
        self.history = EditHistory::new(
            self.options.history_capacity,
            Snapshot::new(self.curve.clone(), label),
        );
    }

    /// Mutabler Zugriff auf die Kurve (CoW: klont nur bei geteiltem Arc).
    #[inline]
    pub fn curve_mut(&mut self) -> &mut CurveStore {
        Arc::make_mut(&mut self.curve)
    }

    /// Canvas-Spezifikation der aktuellen Kurve.
    pub fn canvas(&self) -> CanvasSpec {
        self.curve.canvas
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Committet den aktuellen Kurvenzustand in die History und persistiert
    /// ihn best-effort in den Session-Slot.
    ///
    /// Jede mutierende Geste ruft das genau einmal am Gestenende auf, nie
    /// pro Zwischen-Tick — die History wächst mit O(Gesten), nicht O(Ticks).
    pub fn commit(&mut self, label: &str, notifier: &mut dyn Notifier) {
        self.history
            .commit(Snapshot::new(self.curve.clone(), label));
        crate::app::use_cases::session::autosave(self, notifier);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
