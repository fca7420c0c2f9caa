//! Ankerpunkte der Kurve: Position, Typ und Steuerpunkt-Handles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Interpolationstyp eines Ankerpunkts.
///
/// Die Handles existieren nur bei `Smooth` — ein `Sharp`-Punkt hat keine.
/// Damit gibt es keinen "Handles vorhanden aber bedeutungslos"-Zustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointKind {
    /// Kubisches Segment möglich: Handles für ein- und auslaufende Tangente.
    Smooth {
        /// Handle der einlaufenden Tangente (Segment davor)
        cp1: Vec2,
        /// Handle der auslaufenden Tangente (Segment danach)
        cp2: Vec2,
    },
    /// Lineares Segment auf beiden Seiten.
    Sharp,
}

impl PointKind {
    /// True wenn der Punkt glatt ist.
    pub fn is_smooth(&self) -> bool {
        matches!(self, PointKind::Smooth { .. })
    }

    /// Gibt die Handles zurück, falls vorhanden.
    pub fn handles(&self) -> Option<(Vec2, Vec2)> {
        match self {
            PointKind::Smooth { cp1, cp2 } => Some((*cp1, *cp2)),
            PointKind::Sharp => None,
        }
    }
}

/// Typ-Tag für die Serialisierung ("smooth" / "sharp").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKindTag {
    Smooth,
    Sharp,
}

/// Benannter Ankerpunkt der Kurve.
///
/// Der Name ist der stabile Schlüssel der Punkt-Kollektion und muss
/// eindeutig bleiben; Geometrie hängt nie von der Einfüge-Reihenfolge ab.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPoint {
    /// Eindeutiger, menschenlesbarer Name
    pub name: String,
    /// Position in Autor-Einheiten
    pub position: Vec2,
    /// Interpolationstyp inkl. Handles
    pub kind: PointKind,
    /// Anzeigefarbe (RGBA)
    pub color: [f32; 4],
    /// Markierung als semantisch bedeutsam (rein darstellend)
    pub starred: bool,
}

impl AnchorPoint {
    /// Erstellt einen neuen Sharp-Punkt.
    pub fn sharp(name: impl Into<String>, position: Vec2, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            position,
            kind: PointKind::Sharp,
            color,
            starred: false,
        }
    }

    /// Erstellt einen neuen Smooth-Punkt mit expliziten Handles.
    pub fn smooth(
        name: impl Into<String>,
        position: Vec2,
        cp1: Vec2,
        cp2: Vec2,
        color: [f32; 4],
    ) -> Self {
        Self {
            name: name.into(),
            position,
            kind: PointKind::Smooth { cp1, cp2 },
            color,
            starred: false,
        }
    }

    /// Typ-Tag für Export/Anzeige.
    pub fn kind_tag(&self) -> PointKindTag {
        match self.kind {
            PointKind::Smooth { .. } => PointKindTag::Smooth,
            PointKind::Sharp => PointKindTag::Sharp,
        }
    }

    /// Verschiebt Anker und Handles starr um dasselbe Delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        if let PointKind::Smooth { cp1, cp2 } = &mut self.kind {
            *cp1 += delta;
            *cp2 += delta;
        }
    }

    /// Distanz des Ankers zu einer Weltposition.
    pub fn distance_to(&self, pos: Vec2) -> f32 {
        self.position.distance(pos)
    }
}
