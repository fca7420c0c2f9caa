//! Parser für das Autor-Raum-Dateiformat.

use super::{CurveFile, FilePoint};
use crate::core::{AnchorPoint, CanvasSpec, CurveStore, PointKind, PointKindTag};
use crate::shared::EditorError;
use glam::Vec2;

/// Parst eine Kurven-Datei und baut den `CurveStore` auf.
///
/// Die Canvas-Spezifikation kommt vom Aufrufer (sie ist nicht Teil des
/// Dateiformats). Strukturfehler — fehlende Felder, cp1/cp2 fehlt bei
/// `smooth`, doppelte Namen, weniger als zwei Punkte — führen zu einem
/// ImportError; der bisherige In-Memory-Zustand des Aufrufers bleibt dann
/// unverändert.
pub fn parse_curve_file(json: &str, canvas: CanvasSpec) -> Result<CurveStore, EditorError> {
    let file: CurveFile =
        serde_json::from_str(json).map_err(|e| EditorError::import(e.to_string()))?;

    let mut points = Vec::with_capacity(file.points.len());
    for fp in &file.points {
        points.push(convert_point(fp)?);
    }

    let store = CurveStore::from_points(canvas, points)
        .map_err(|e| EditorError::import(e.to_string()))?;

    log::info!("Kurve geladen: {} Punkte", store.len());
    Ok(store)
}

/// Konvertiert einen Datei-Punkt in einen Ankerpunkt.
fn convert_point(fp: &FilePoint) -> Result<AnchorPoint, EditorError> {
    let kind = match fp.kind {
        PointKindTag::Smooth => {
            let (Some(cp1), Some(cp2)) = (fp.cp1, fp.cp2) else {
                return Err(EditorError::import(format!(
                    "Punkt '{}' ist smooth, aber cp1/cp2 fehlen",
                    fp.name
                )));
            };
            PointKind::Smooth {
                cp1: Vec2::new(cp1.x, cp1.y),
                cp2: Vec2::new(cp2.x, cp2.y),
            }
        }
        PointKindTag::Sharp => PointKind::Sharp,
    };

    Ok(AnchorPoint {
        name: fp.name.clone(),
        position: Vec2::new(fp.x, fp.y),
        kind,
        color: fp.color,
        starred: fp.starred,
    })
}
