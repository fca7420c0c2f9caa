//! Writer für das Autor-Raum-Dateiformat.

use super::{CurveFile, FilePoint};
use crate::core::{CurveStore, PointKind};

/// Serialisiert die Kurve als Autor-Raum-JSON.
///
/// Die Punkte werden in x-Ordnung geschrieben; der Roundtrip über
/// `parse_curve_file` ist bis auf Float-Rundung verlustfrei.
pub fn write_curve_file(store: &CurveStore) -> anyhow::Result<String> {
    let points = store
        .sorted_points()
        .into_iter()
        .map(|p| {
            let (cp1, cp2) = match p.kind {
                PointKind::Smooth { cp1, cp2 } => (Some(cp1.into()), Some(cp2.into())),
                PointKind::Sharp => (None, None),
            };
            FilePoint {
                x: p.position.x,
                y: p.position.y,
                name: p.name.clone(),
                color: p.color,
                kind: p.kind_tag(),
                starred: p.starred,
                cp1,
                cp2,
            }
        })
        .collect();

    let content = serde_json::to_string_pretty(&CurveFile { points })?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnchorPoint, CanvasSpec};
    use crate::json::parse_curve_file;
    use glam::Vec2;

    fn canvas() -> CanvasSpec {
        CanvasSpec::new(1200.0, 600.0, 300.0)
    }

    #[test]
    fn roundtrip_erhaelt_alle_felder() {
        let mut store = CurveStore::from_points(
            canvas(),
            vec![
                AnchorPoint::sharp("Anfang", Vec2::new(0.0, 300.0), [0.2, 0.4, 0.6, 1.0]),
                AnchorPoint::smooth(
                    "Buckel",
                    Vec2::new(300.0, 150.0),
                    Vec2::new(250.0, 160.0),
                    Vec2::new(350.0, 140.0),
                    [1.0, 0.0, 0.0, 1.0],
                ),
                AnchorPoint::sharp("Ende", Vec2::new(600.0, 300.0), [0.2, 0.4, 0.6, 1.0]),
            ],
        )
        .expect("gültig");
        store.toggle_star("Buckel").expect("markierbar");

        let json = write_curve_file(&store).expect("serialisierbar");
        let restored = parse_curve_file(&json, canvas()).expect("parsebar");

        assert_eq!(restored.len(), 3);
        let buckel = restored.get("Buckel").expect("punkt vorhanden");
        assert!(buckel.starred);
        assert_eq!(buckel.color, [1.0, 0.0, 0.0, 1.0]);
        let (cp1, cp2) = buckel.kind.handles().expect("handles vorhanden");
        assert_eq!(cp1, Vec2::new(250.0, 160.0));
        assert_eq!(cp2, Vec2::new(350.0, 140.0));
        assert_eq!(
            restored.get("Anfang").unwrap().position,
            Vec2::new(0.0, 300.0)
        );
    }

    #[test]
    fn sharp_punkte_schreiben_keine_handles() {
        let store = CurveStore::from_points(
            canvas(),
            vec![
                AnchorPoint::sharp("A", Vec2::new(0.0, 300.0), [1.0; 4]),
                AnchorPoint::sharp("B", Vec2::new(100.0, 300.0), [1.0; 4]),
            ],
        )
        .expect("gültig");

        let json = write_curve_file(&store).expect("serialisierbar");
        assert!(!json.contains("cp1"));
        assert!(!json.contains("cp2"));
    }
}
