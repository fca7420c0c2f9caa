//! Deterministische Bootstrap-Kurve: wird nur erzeugt, wenn kein früherer
//! Zustand wiederherstellbar ist.

use super::{AnchorPoint, CanvasSpec, CurveStore, PointKind};
use crate::shared::options::POINT_COLOR_DEFAULT;
use glam::Vec2;

/// Relative Form der Default-Kurve: (Name, x-Anteil der Breite,
/// y-Offset-Anteil der Höhe relativ zur Baseline, smooth?).
///
/// Pulsschlag-artige Abfolge aus flachen Strecken, runden Buckeln (P- und
/// T-Welle, smooth) und scharfen Spitzen (QRS-Komplex, sharp). Erster und
/// letzter Punkt liegen auf der Baseline. Aufeinanderfolgende x-Abstände
/// bleiben unter dem Mindest-Gap, damit neue Punkte hinter dem rechtesten
/// Punkt angehängt werden.
const SHAPE: [(&str, f32, f32, bool); 13] = [
    ("Start", 0.000, 0.0000, false),
    ("P Start", 0.065, 0.0000, true),
    ("P Peak", 0.115, -0.0667, true),
    ("P End", 0.165, 0.0000, true),
    ("Q Dip", 0.230, 0.0333, false),
    ("R Peak", 0.280, -0.3000, false),
    ("S Dip", 0.330, 0.0667, false),
    ("ST Flat", 0.395, 0.0000, false),
    ("T Start", 0.460, 0.0000, true),
    ("T Peak", 0.510, -0.1000, true),
    ("T End", 0.560, 0.0000, true),
    ("Tail", 0.625, 0.0000, false),
    ("End", 0.700, 0.0000, false),
];

/// Erzeugt die deterministische 13-Punkt-Default-Kurve.
///
/// Pure Funktion der Canvas-Dimensionen: gleiche Eingaben liefern exakt
/// dieselbe Kurve. Smooth-Punkte erhalten ihre Handles über die
/// Standard-Initialisierung aus den Nachbar-Sehnen.
pub fn generate(canvas: CanvasSpec) -> CurveStore {
    let mut store = CurveStore::new(canvas);

    for (name, fx, fy, smooth) in SHAPE {
        let position = Vec2::new(fx * canvas.width, canvas.baseline_y + fy * canvas.height);
        let mut point = AnchorPoint::sharp(name, position, POINT_COLOR_DEFAULT);
        if smooth {
            // Handles werden unten gesammelt aus der Adjazenz abgeleitet
            point.kind = PointKind::Smooth {
                cp1: position,
                cp2: position,
            };
        }
        if name == "R Peak" {
            point.starred = true;
        }
        store
            .insert_point(point)
            .expect("Default-Namen sind eindeutig");
    }

    store.init_default_handles();
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn canvas() -> CanvasSpec {
        CanvasSpec::new(1200.0, 600.0, 300.0)
    }

    #[test]
    fn generator_liefert_13_punkte() {
        let store = generate(canvas());
        assert_eq!(store.len(), 13);
    }

    #[test]
    fn generator_ist_deterministisch() {
        let a = generate(canvas());
        let b = generate(canvas());
        for (pa, pb) in a.sorted_points().iter().zip(b.sorted_points()) {
            assert_eq!(*pa, pb);
        }
    }

    #[test]
    fn erster_und_letzter_punkt_liegen_auf_der_baseline() {
        let store = generate(canvas());
        let sorted = store.sorted_points();
        assert_relative_eq!(sorted.first().unwrap().position.y, 300.0);
        assert_relative_eq!(sorted.last().unwrap().position.y, 300.0);
    }

    #[test]
    fn alle_x_abstaende_liegen_unter_dem_mindest_gap() {
        let store = generate(canvas());
        let sorted = store.sorted_points();
        for pair in sorted.windows(2) {
            let gap = pair[1].position.x - pair[0].position.x;
            assert!(gap > 0.0 && gap < 100.0, "Gap {} außerhalb (0,100)", gap);
        }
    }

    #[test]
    fn smooth_punkte_haben_abgeleitete_handles() {
        let store = generate(canvas());
        let peak = store.get("P Peak").expect("punkt vorhanden");
        let (cp1, cp2) = peak.kind.handles().expect("handles initialisiert");
        // Handles liegen zwischen den Nachbarn, nicht auf dem Anker selbst
        assert!(cp1.x < peak.position.x);
        assert!(cp2.x > peak.position.x);
    }

    #[test]
    fn r_peak_ist_markiert_und_sharp() {
        let store = generate(canvas());
        let r = store.get("R Peak").expect("punkt vorhanden");
        assert!(r.starred);
        assert!(!r.kind.is_smooth());
    }

    #[test]
    fn form_skaliert_mit_canvas_dimensionen() {
        let small = generate(CanvasSpec::new(600.0, 300.0, 150.0));
        let r = small.get("R Peak").expect("punkt vorhanden");
        assert_relative_eq!(r.position.x, 0.28 * 600.0);
        assert_relative_eq!(r.position.y, 150.0 - 0.30 * 300.0);
    }
}
