//! Gesten-Zustandsmaschine: genau ein Modus ist zu jedem Zeitpunkt aktiv.

use crate::core::PointPose;
use glam::Vec2;
use std::collections::{HashMap, HashSet};

/// Welcher Handle eines Smooth-Punkts wird gegriffen?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Handle der einlaufenden Tangente
    Cp1,
    /// Handle der auslaufenden Tangente
    Cp2,
}

/// Aktiver Gesten-Modus.
///
/// Eine neue Geste darf nur aus `Idle` heraus starten — nebenläufige
/// Gesten sind per Konstruktion ausgeschlossen.
pub enum GestureMode {
    /// Keine Geste aktiv
    Idle,
    /// Rechteck-Selektion (Start/aktuelle Ecke in Weltkoordinaten)
    BoxSelect {
        start_world: Vec2,
        current_world: Vec2,
        additive: bool,
        /// Selektion bei Gestenbeginn; Basis für additive Live-Updates
        base: HashSet<String>,
    },
    /// Verschieben der selektierten Punkte
    DragPoints { moved: bool },
    /// Verschieben eines einzelnen Handles des Primär-Punkts
    DragHandle {
        point: String,
        handle: HandleKind,
        moved: bool,
    },
    /// Kamera-Pan
    Pan,
    /// Skalier-Geste um den Schwerpunkt der Start-Positionen
    TransformScale {
        /// Zentroid der Anker-Positionen bei Gestenbeginn
        origin: Vec2,
        /// Posen aller selektierten Punkte bei Gestenbeginn
        start_poses: HashMap<String, PointPose>,
        /// Aufsummiertes Screen-Delta seit Gestenbeginn
        accum_screen: Vec2,
        /// Modifier: horizontalen Faktor auf 1 sperren
        vertical_only: bool,
    },
}

impl Default for GestureMode {
    fn default() -> Self {
        Self::Idle
    }
}

impl GestureMode {
    /// True wenn keine Geste aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureMode::Idle)
    }
}
