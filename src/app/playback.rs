//! Wiedergabe: Wanduhr-getriebene Phase und Preview-Modus.
//!
//! Der Scheduler-Loop gehört der Wiedergabe-Komponente und hat ein
//! explizites Stop-Signal — kein sich selbst einplanender Callback.
//! Abbruch heißt schlicht: keine weiteren Ticks; ein laufender Tick braucht
//! keine kooperative Cancellation.

use super::state::EditorState;
use std::time::Instant;

/// Betriebsmodus: normales Editieren oder scrollende Vorschau.
///
/// Die beiden kontinuierlichen Prozesse (Live-Wiedergabe, Preview) schließen
/// sich gegenseitig aus; Preview suspendiert zusätzlich alle Gesten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Normales Editieren, Gesten aktiv
    #[default]
    Editing,
    /// Scrollende Vorschau, Gesten suspendiert
    Preview,
}

/// Wanduhr-Phase für die zyklische Wiedergabe.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    started: Option<Instant>,
    /// Dauer eines Zyklus in Sekunden
    pub cycle_secs: f32,
}

impl PlaybackClock {
    /// Erstellt eine gestoppte Uhr.
    pub fn new(cycle_secs: f32) -> Self {
        Self {
            started: None,
            cycle_secs: cycle_secs.max(f32::EPSILON),
        }
    }

    /// Startet die Uhr am gegebenen Zeitpunkt.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Stoppt die Uhr (explizites Stop-Signal: keine weiteren Ticks).
    pub fn stop(&mut self) {
        self.started = None;
    }

    /// True solange die Uhr läuft.
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Phase ∈ [0,1) am gegebenen Zeitpunkt; None wenn gestoppt.
    pub fn phase_at(&self, now: Instant) -> Option<f32> {
        let started = self.started?;
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        Some((elapsed / self.cycle_secs).fract())
    }
}

/// Wiedergabe-Zustand der Anwendung.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    /// Aktueller Modus
    pub mode: PlaybackMode,
    /// Phasen-Uhr der Vorschau
    pub clock: PlaybackClock,
}

impl PlaybackState {
    /// Erstellt den Standard-Zustand (Editing, Uhr gestoppt).
    pub fn new(cycle_secs: f32) -> Self {
        Self {
            mode: PlaybackMode::Editing,
            clock: PlaybackClock::new(cycle_secs),
        }
    }
}

/// Wechselt in den Preview-Modus.
///
/// Eine aktive Geste wird verworfen (ohne History-Commit) — Preview
/// suspendiert die gesamte Gestenverarbeitung.
pub fn enter_preview(state: &mut EditorState, now: Instant) {
    if state.playback.mode == PlaybackMode::Preview {
        return;
    }
    if !state.gesture.is_idle() {
        log::debug!("Aktive Geste beim Preview-Start verworfen");
        state.gesture = super::state::GestureMode::Idle;
    }
    state.playback.mode = PlaybackMode::Preview;
    state.playback.clock.start(now);
    log::info!("Preview gestartet");
}

/// Verlässt den Preview-Modus; der Editier-Zustand bleibt unangetastet.
pub fn leave_preview(state: &mut EditorState) {
    if state.playback.mode != PlaybackMode::Preview {
        return;
    }
    state.playback.clock.stop();
    state.playback.mode = PlaybackMode::Editing;
    log::info!("Preview beendet");
}

/// Aktuelle Preview-Phase; None außerhalb des Preview-Modus.
pub fn preview_phase(state: &EditorState, now: Instant) -> Option<f32> {
    if state.playback.mode != PlaybackMode::Preview {
        return None;
    }
    state.playback.clock.phase_at(now)
}
