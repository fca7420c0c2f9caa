//! Zyklischer Sampler: rekonstruiert das kontinuierliche Signal aus der
//! normalisierten Punktmenge an beliebiger Phase.
//!
//! Der Sampler ist pur und zustandslos — identische Eingaben liefern immer
//! identische Ausgaben, es gibt keinen versteckten Phasen-Akkumulator. Den
//! Ausgabe-Gain (Skalar zur Umrechnung in Anzeige-Einheiten) besitzt der
//! Abspiel-Konsument, nicht diese Komponente.

use super::normalized::{NormalizedCurve, NormalizedPoint};
use super::spline::{cubic_bezier_y, lerp_y};

/// Liefert den Wellenform-Wert an `phase` ∈ [0,1) eines sich wiederholenden
/// Zyklus.
///
/// Scan über die aufsteigenden Punkte nach dem ersten Punkt mit `x > phase`;
/// das Klammerpaar ist (Vorgänger, dieser Punkt). Existiert keiner
/// (Phase ≥ letztes x), wrappt die Klammer auf (letzter, erster Punkt) mit
/// Domänenbreite `1 − last_x + first_x` über die Nahtstelle. Sind beide
/// Klammer-Endpunkte smooth, wird kubisch über
/// (start.y, start.cp2.y, end.cp1.y, end.y) geblendet, sonst linear.
pub fn sample(curve: &NormalizedCurve, phase: f32) -> f32 {
    let points = &curve.points;
    match points.len() {
        0 => return 0.0,
        1 => return points[0].y,
        _ => {}
    }

    let phase = phase.rem_euclid(1.0);
    let first = &points[0];
    let last = &points[points.len() - 1];

    let (start, end, t) = match points.iter().position(|p| p.x > phase) {
        Some(i) if i > 0 => {
            let start = &points[i - 1];
            let end = &points[i];
            let width = end.x - start.x;
            if width <= f32::EPSILON {
                return start.y;
            }
            (start, end, (phase - start.x) / width)
        }
        _ => {
            // Wrap-Klammer über die Nahtstelle des Zyklus
            let width = 1.0 - last.x + first.x;
            if width <= f32::EPSILON {
                return last.y;
            }
            let local = if phase >= last.x {
                phase - last.x
            } else {
                phase + 1.0 - last.x
            };
            (last, first, local / width)
        }
    };

    blend(start, end, t)
}

/// Segment-Blend: kubisch nur wenn beide Endpunkte smooth sind.
fn blend(start: &NormalizedPoint, end: &NormalizedPoint, t: f32) -> f32 {
    if let (Some(cp2), Some(cp1)) = (
        start.is_smooth().then_some(start.cp2).flatten(),
        end.is_smooth().then_some(end.cp1).flatten(),
    ) {
        cubic_bezier_y(start.y, cp2.y, cp1.y, end.y, t)
    } else {
        lerp_y(start.y, end.y, t)
    }
}
