//! Auflösungsunabhängige Normalform der Kurve.
//!
//! Entkoppelt "im Editor in Autor-Pixeln gezeichnet" von "bei beliebiger
//! Canvas-Größe abgespielt": x wird affin auf [0,1] abgebildet, y relativ
//! zur Baseline in Viertel-Canvas-Höhen-Einheiten (oben = positiv).

use super::point::PointKindTag;
use super::{AnchorPoint, CurveStore, PointKind};
use crate::shared::EditorError;
use serde::{Deserialize, Serialize};

/// Einfaches x/y-Paar für die Wire-Formate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XY {
    pub x: f32,
    pub y: f32,
}

impl From<glam::Vec2> for XY {
    fn from(v: glam::Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Punkt der normalisierten Kurve.
///
/// `cp1`/`cp2` sind nur bei `smooth` vorhanden; die Strukturvalidierung
/// beim Import erzwingt das.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "type")]
    pub kind: PointKindTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp1: Option<XY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp2: Option<XY>,
}

impl NormalizedPoint {
    /// True wenn der Punkt glatt ist.
    pub fn is_smooth(&self) -> bool {
        self.kind == PointKindTag::Smooth
    }
}

/// Provenienz-Metadaten für die Abspielseite.
///
/// Erlauben, eine abweichende Baseline/Skalierung zur Wiedergabezeit mit
/// der Autor-Geometrie abzugleichen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveMetadata {
    /// Autor-x-Spanne (letzter minus erster Punkt)
    pub original_width: f32,
    /// Autor-Canvas-Höhe
    pub original_height: f32,
    /// Baseline als Anteil der Canvas-Höhe
    pub baseline_ratio: f32,
    /// Baseline in Autor-Einheiten
    pub original_baseline: f32,
}

/// Normalisierte Kurve: Wiedergabeformat für den zyklischen Sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCurve {
    pub points: Vec<NormalizedPoint>,
    pub metadata: CurveMetadata,
}

/// Exportiert die Kurve in die Normalform.
///
/// Sortiert nach x; `span = last_x − first_x` muss positiv sein (eine
/// degenerierte Kurve ohne x-Ausdehnung ist nicht abspielbar). y wird als
/// `(baseline − y) / (canvas_höhe / 4)` abgebildet, Handles identisch.
pub fn export_normalized(store: &CurveStore) -> Result<NormalizedCurve, EditorError> {
    let sorted = store.sorted_points();
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Err(EditorError::validation("Kurve ist leer"));
    };

    let span = last.position.x - first.position.x;
    if span <= 0.0 {
        return Err(EditorError::validation(
            "Degenerierte Kurve: x-Spanne ist nicht positiv",
        ));
    }

    let baseline = store.canvas.baseline_y;
    let quarter_height = store.canvas.height / 4.0;
    let first_x = first.position.x;

    let map_x = |x: f32| (x - first_x) / span;
    let map_y = |y: f32| (baseline - y) / quarter_height;

    let points = sorted
        .iter()
        .map(|p: &&AnchorPoint| {
            let (cp1, cp2) = match p.kind {
                PointKind::Smooth { cp1, cp2 } => (
                    Some(XY {
                        x: map_x(cp1.x),
                        y: map_y(cp1.y),
                    }),
                    Some(XY {
                        x: map_x(cp2.x),
                        y: map_y(cp2.y),
                    }),
                ),
                PointKind::Sharp => (None, None),
            };
            NormalizedPoint {
                x: map_x(p.position.x),
                y: map_y(p.position.y),
                kind: p.kind_tag(),
                cp1,
                cp2,
            }
        })
        .collect();

    Ok(NormalizedCurve {
        points,
        metadata: CurveMetadata {
            original_width: span,
            original_height: store.canvas.height,
            baseline_ratio: baseline / store.canvas.height,
            original_baseline: baseline,
        },
    })
}

/// Parst und validiert eine normalisierte Kurve aus JSON.
///
/// Prüft nur die strukturelle Form (Punkte-Array vorhanden, x/y/type pro
/// Punkt, cp1/cp2 bei `smooth`); die Rückabbildung in Anzeige-Einheiten ist
/// Sache des Abspiel-Renderers. Bei Fehlern bleibt der In-Memory-Zustand
/// des Aufrufers unangetastet.
pub fn parse_normalized(json: &str) -> Result<NormalizedCurve, EditorError> {
    let curve: NormalizedCurve =
        serde_json::from_str(json).map_err(|e| EditorError::import(e.to_string()))?;
    validate_normalized(&curve)?;
    Ok(curve)
}

/// Strukturvalidierung einer bereits deserialisierten Normalform.
pub fn validate_normalized(curve: &NormalizedCurve) -> Result<(), EditorError> {
    for (i, p) in curve.points.iter().enumerate() {
        if p.is_smooth() && (p.cp1.is_none() || p.cp2.is_none()) {
            return Err(EditorError::import(format!(
                "Punkt {} ist smooth, aber cp1/cp2 fehlen",
                i
            )));
        }
    }
    Ok(())
}
