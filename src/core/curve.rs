//! Die zentrale Kurven-Datenstruktur: namens-indizierte Ankerpunkte
//! mit abgeleiteter x-sortierter Reihenfolge.

use super::{AnchorPoint, PointKind};
use crate::shared::EditorError;
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Canvas-Spezifikation des Autor-Raums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpec {
    /// Breite in Autor-Einheiten
    pub width: f32,
    /// Höhe in Autor-Einheiten
    pub height: f32,
    /// Referenz-y der Ruhelage (Baseline)
    pub baseline_y: f32,
}

impl CanvasSpec {
    /// Erstellt eine Canvas-Spezifikation.
    pub fn new(width: f32, height: f32, baseline_y: f32) -> Self {
        Self {
            width,
            height,
            baseline_y,
        }
    }
}

/// Start-Pose eines Punkts für die Scale-Geste.
///
/// Die Geste skaliert jeden Tick von diesen Start-Werten aus, nie von den
/// bereits skalierten Positionen — damit ist die Operation idempotent
/// gegenüber der Tick-Rate.
#[derive(Debug, Clone, Copy)]
pub struct PointPose {
    /// Anker-Position bei Gestenbeginn
    pub position: Vec2,
    /// Handles bei Gestenbeginn (nur Smooth)
    pub handles: Option<(Vec2, Vec2)>,
}

/// Ergebnis der Platzsuche für einen neuen Punkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Gefundene x-Position
    pub x: f32,
    /// True wenn der Punkt mangels Platz an den rechten Rand gepinnt wurde
    pub crowded: bool,
}

/// Kurven-Kollektion: Mapping Name → Ankerpunkt plus bei Bedarf neu
/// berechnete x-sortierte Sequenz.
///
/// Invariante: mindestens zwei Punkte zu jedem Zeitpunkt. Segment i
/// verbindet die Punkte i und i+1 in x-Ordnung; für die Wiedergabe
/// schließt das letzte Segment zyklisch zum ersten Punkt.
#[derive(Debug, Clone)]
pub struct CurveStore {
    /// Alle Ankerpunkte, indexiert nach Name
    points: IndexMap<String, AnchorPoint>,
    /// Autor-Canvas (Breite, Höhe, Baseline)
    pub canvas: CanvasSpec,
}

impl CurveStore {
    /// Erstellt eine leere Kurve (nur als Zwischenzustand beim Aufbau gültig).
    pub fn new(canvas: CanvasSpec) -> Self {
        Self {
            points: IndexMap::new(),
            canvas,
        }
    }

    /// Erstellt eine Kurve aus einer Punktliste.
    ///
    /// Schlägt fehl bei doppelten Namen oder weniger als zwei Punkten.
    pub fn from_points(
        canvas: CanvasSpec,
        points: Vec<AnchorPoint>,
    ) -> Result<Self, EditorError> {
        let mut store = Self::new(canvas);
        for p in points {
            store.insert_point(p)?;
        }
        if store.len() < 2 {
            return Err(EditorError::validation(
                "Kurve benötigt mindestens zwei Punkte",
            ));
        }
        Ok(store)
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Zugriff auf einen Punkt per Name.
    pub fn get(&self, name: &str) -> Option<&AnchorPoint> {
        self.points.get(name)
    }

    /// Mutabler Zugriff auf einen Punkt per Name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut AnchorPoint> {
        self.points.get_mut(name)
    }

    /// True wenn der Name vergeben ist.
    pub fn contains(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    /// Iterator über alle Punkte (Einfüge-Reihenfolge, nur für Anzeige).
    pub fn iter(&self) -> impl Iterator<Item = &AnchorPoint> {
        self.points.values()
    }

    /// Namen aller Punkte in aufsteigender x-Ordnung.
    ///
    /// Wird bei jedem Aufruf neu berechnet — Geometrie verlässt sich nie
    /// auf die Einfüge-Reihenfolge. Gleiche x-Werte werden über den Namen
    /// deterministisch geordnet.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.points.keys().map(String::as_str).collect();
        names.sort_by(|a, b| {
            let xa = self.points[*a].position.x;
            let xb = self.points[*b].position.x;
            xa.partial_cmp(&xb)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cmp(b))
        });
        names
    }

    /// Punkte in aufsteigender x-Ordnung.
    pub fn sorted_points(&self) -> Vec<&AnchorPoint> {
        self.sorted_names()
            .into_iter()
            .map(|n| &self.points[n])
            .collect()
    }

    /// Fügt einen Punkt ein. Schlägt fehl wenn der Name vergeben oder leer ist.
    pub fn insert_point(&mut self, point: AnchorPoint) -> Result<(), EditorError> {
        if point.name.trim().is_empty() {
            return Err(EditorError::validation("Punktname darf nicht leer sein"));
        }
        if self.points.contains_key(&point.name) {
            return Err(EditorError::validation(format!(
                "Punktname bereits vergeben: {}",
                point.name
            )));
        }
        self.points.insert(point.name.clone(), point);
        Ok(())
    }

    /// Entfernt einen Punkt.
    ///
    /// Verweigert die Operation (Zustand unverändert) wenn nur noch zwei
    /// Punkte existieren — die Kurve darf nie darunter fallen.
    pub fn delete_point(&mut self, name: &str) -> Result<AnchorPoint, EditorError> {
        if !self.points.contains_key(name) {
            return Err(EditorError::validation(format!(
                "Unbekannter Punkt: {}",
                name
            )));
        }
        if self.points.len() <= 2 {
            return Err(EditorError::validation(
                "Kurve benötigt mindestens zwei Punkte",
            ));
        }
        Ok(self.points.shift_remove(name).expect("Punkt geprüft"))
    }

    /// Benennt einen Punkt um (Name bleibt eindeutiger Schlüssel).
    pub fn rename_point(&mut self, old: &str, new: &str) -> Result<(), EditorError> {
        if new.trim().is_empty() {
            return Err(EditorError::validation("Punktname darf nicht leer sein"));
        }
        if old == new {
            return Ok(());
        }
        if self.points.contains_key(new) {
            return Err(EditorError::validation(format!(
                "Punktname bereits vergeben: {}",
                new
            )));
        }
        let Some(mut point) = self.points.shift_remove(old) else {
            return Err(EditorError::validation(format!("Unbekannter Punkt: {}", old)));
        };
        point.name = new.to_string();
        self.points.insert(new.to_string(), point);
        Ok(())
    }

    /// Berechnet den kleinsten freien Auto-Namen der Form "Point N".
    pub fn next_free_name(&self) -> String {
        let mut n = 1usize;
        loop {
            let candidate = format!("Point {}", n);
            if !self.points.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Schaltet den Punkt-Typ um (smooth ⇔ sharp).
    ///
    /// Smooth → Sharp verwirft die Handles. Sharp → Smooth leitet neue
    /// Handles aus den Nachbar-Sehnen ab.
    pub fn toggle_point_kind(&mut self, name: &str) -> Result<(), EditorError> {
        let Some(point) = self.points.get(name) else {
            return Err(EditorError::validation(format!(
                "Unbekannter Punkt: {}",
                name
            )));
        };
        match point.kind {
            PointKind::Smooth { .. } => {
                self.points[name].kind = PointKind::Sharp;
            }
            PointKind::Sharp => {
                let (cp1, cp2) = self.derive_handles(name);
                self.points[name].kind = PointKind::Smooth { cp1, cp2 };
            }
        }
        Ok(())
    }

    /// Schaltet die Stern-Markierung um (kein geometrischer Effekt).
    pub fn toggle_star(&mut self, name: &str) -> Result<(), EditorError> {
        let Some(point) = self.points.get_mut(name) else {
            return Err(EditorError::validation(format!(
                "Unbekannter Punkt: {}",
                name
            )));
        };
        point.starred = !point.starred;
        Ok(())
    }

    /// Verschiebt die genannten Punkte starr (Anker und Handles).
    pub fn translate_points(&mut self, names: &[String], delta: Vec2) {
        for name in names {
            if let Some(point) = self.points.get_mut(name) {
                point.translate(delta);
            }
        }
    }

    /// Setzt einen Handle eines Smooth-Punkts auf eine neue Position.
    pub fn set_handle(&mut self, name: &str, second: bool, pos: Vec2) -> bool {
        let Some(point) = self.points.get_mut(name) else {
            return false;
        };
        if let PointKind::Smooth { cp1, cp2 } = &mut point.kind {
            if second {
                *cp2 = pos;
            } else {
                *cp1 = pos;
            }
            true
        } else {
            false
        }
    }

    /// Aktuelle Posen der genannten Punkte (für den Gesten-Start).
    pub fn poses_of(&self, names: &[String]) -> HashMap<String, PointPose> {
        names
            .iter()
            .filter_map(|n| {
                self.points.get(n).map(|p| {
                    (
                        n.clone(),
                        PointPose {
                            position: p.position,
                            handles: p.kind.handles(),
                        },
                    )
                })
            })
            .collect()
    }

    /// Skaliert Punkte um einen Ursprung, ausgehend von den Start-Posen.
    ///
    /// `pos' = origin + (pos - origin) * (sx, sy)` — identisch auf cp1/cp2,
    /// jeweils bezogen auf die Pose vom Gestenbeginn (nicht kumulativ).
    pub fn scale_from_poses(
        &mut self,
        origin: Vec2,
        scale: Vec2,
        poses: &HashMap<String, PointPose>,
    ) {
        for (name, pose) in poses {
            let Some(point) = self.points.get_mut(name) else {
                continue;
            };
            point.position = origin + (pose.position - origin) * scale;
            if let (PointKind::Smooth { cp1, cp2 }, Some((p1, p2))) =
                (&mut point.kind, pose.handles)
            {
                *cp1 = origin + (p1 - origin) * scale;
                *cp2 = origin + (p2 - origin) * scale;
            }
        }
    }

    /// Setzt die y-Position der genannten Punkte auf die Baseline.
    ///
    /// Die Handles wandern um dasselbe Delta wie der Anker mit, damit die
    /// Tangentenrichtung am Anker stabil bleibt.
    pub fn snap_to_baseline(&mut self, names: &[String]) {
        let baseline = self.canvas.baseline_y;
        for name in names {
            if let Some(point) = self.points.get_mut(name) {
                let dy = baseline - point.position.y;
                point.translate(Vec2::new(0.0, dy));
            }
        }
    }

    /// Nächster Anker zu einer Weltposition (Name und Distanz).
    pub fn nearest_anchor(&self, pos: Vec2) -> Option<(&str, f32)> {
        self.points
            .values()
            .map(|p| (p.name.as_str(), p.distance_to(pos)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Sucht die x-Position für einen neuen Punkt.
    ///
    /// Mit `anchor_x` (selektierter Punkt): 100 Einheiten rechts davon,
    /// geklemmt auf den rechten Rand. Kollidiert das mit bestehender Dichte,
    /// findet eine Gap-Suche über die sortierten x-Positionen das erste
    /// Intervall ≥ `min_gap` nach dem Anker und zentriert dort. Ohne solches
    /// Intervall wird an den rechten Rand gepinnt (`crowded`).
    ///
    /// Ohne Anker läuft dieselbe Gap-Suche global (linkeste Lücke), sonst
    /// wird hinter dem aktuell rechtesten Punkt angehängt.
    pub fn placement_x(&self, anchor_x: Option<f32>, min_gap: f32) -> Placement {
        let width = self.canvas.width;
        let xs: Vec<f32> = self
            .sorted_points()
            .iter()
            .map(|p| p.position.x)
            .collect();

        match anchor_x {
            Some(ax) => {
                let candidate = (ax + min_gap).min(width);
                let collides = xs.iter().any(|&x| x > ax && x <= candidate);
                if !collides && candidate < width {
                    return Placement {
                        x: candidate,
                        crowded: false,
                    };
                }
                if let Some(center) = Self::first_gap_center(&xs, Some(ax), min_gap) {
                    return Placement {
                        x: center,
                        crowded: false,
                    };
                }
                if !collides {
                    // Kandidat lag exakt am Rand und der Rand ist frei
                    return Placement {
                        x: candidate,
                        crowded: false,
                    };
                }
                Placement {
                    x: width,
                    crowded: true,
                }
            }
            None => {
                if let Some(center) = Self::first_gap_center(&xs, None, min_gap) {
                    return Placement {
                        x: center,
                        crowded: false,
                    };
                }
                let max_x = xs.last().copied().unwrap_or(0.0);
                let candidate = max_x + min_gap;
                if candidate <= width {
                    Placement {
                        x: candidate,
                        crowded: false,
                    }
                } else {
                    Placement {
                        x: width,
                        crowded: true,
                    }
                }
            }
        }
    }

    /// Zentrum der ersten Lücke ≥ `min_gap` zwischen benachbarten x-Werten.
    ///
    /// `after`: nur Lücken betrachten, deren linker Rand ≥ diesem Wert liegt.
    fn first_gap_center(xs: &[f32], after: Option<f32>, min_gap: f32) -> Option<f32> {
        xs.windows(2)
            .filter(|w| after.is_none_or(|a| w[0] >= a))
            .find(|w| w[1] - w[0] >= min_gap)
            .map(|w| w[0] + (w[1] - w[0]) / 2.0)
    }

    /// Initialisiert die Handles aller Smooth-Punkte aus den Nachbar-Sehnen.
    ///
    /// Beide Endpunkte smooth: Handles bei 1/3 bzw. 2/3 des Anker-zu-Anker-
    /// Vektors. Einer der Endpunkte sharp: Handle auf 1/6 eingezogen, damit
    /// die Darstellung nahe geraden Segmenten unauffällig bleibt.
    pub fn init_default_handles(&mut self) {
        let names: Vec<String> = self
            .sorted_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        for name in &names {
            if self.points[name].kind.is_smooth() {
                let (cp1, cp2) = self.derive_handles(name);
                self.points[name].kind = PointKind::Smooth { cp1, cp2 };
            }
        }
    }

    /// Leitet Handles für einen Punkt aus seinen x-Nachbarn ab.
    ///
    /// Ohne Vorgänger: cp1 = eigene Position. Ohne Nachfolger: cp2 = 50
    /// Einheiten rechts (UI-Code muss nie auf fehlende Handles prüfen).
    fn derive_handles(&self, name: &str) -> (Vec2, Vec2) {
        let sorted = self.sorted_names();
        let idx = sorted
            .iter()
            .position(|n| *n == name)
            .expect("Punkt in Sortierung");
        let pos = self.points[name].position;

        let cp1 = if idx > 0 {
            let prev = &self.points[sorted[idx - 1]];
            let chord = pos - prev.position;
            let frac = if prev.kind.is_smooth() { 3.0 } else { 6.0 };
            pos - chord / frac
        } else {
            pos
        };

        let cp2 = if idx + 1 < sorted.len() {
            let next = &self.points[sorted[idx + 1]];
            let chord = next.position - pos;
            let frac = if next.kind.is_smooth() { 3.0 } else { 6.0 };
            pos + chord / frac
        } else {
            pos + Vec2::new(50.0, 0.0)
        };

        (cp1, cp2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn canvas() -> CanvasSpec {
        CanvasSpec::new(1200.0, 600.0, 300.0)
    }

    fn two_point_store() -> CurveStore {
        CurveStore::from_points(
            canvas(),
            vec![
                AnchorPoint::sharp("A", Vec2::new(0.0, 300.0), [1.0; 4]),
                AnchorPoint::sharp("B", Vec2::new(200.0, 300.0), [1.0; 4]),
            ],
        )
        .expect("gültige Kurve")
    }

    #[test]
    fn from_points_verweigert_weniger_als_zwei_punkte() {
        let result = CurveStore::from_points(
            canvas(),
            vec![AnchorPoint::sharp("A", Vec2::ZERO, [1.0; 4])],
        );
        assert!(result.is_err());
    }

    #[test]
    fn insert_verweigert_doppelte_namen() {
        let mut store = two_point_store();
        let result = store.insert_point(AnchorPoint::sharp("A", Vec2::new(50.0, 0.0), [1.0; 4]));
        assert!(result.is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_verweigert_unter_zwei_punkten() {
        let mut store = two_point_store();
        let result = store.delete_point("A");
        assert!(result.is_err());
        assert_eq!(store.len(), 2, "Zustand muss unverändert bleiben");
    }

    #[test]
    fn delete_entfernt_punkt_bei_mehr_als_zwei() {
        let mut store = two_point_store();
        store
            .insert_point(AnchorPoint::sharp("C", Vec2::new(400.0, 300.0), [1.0; 4]))
            .expect("einfügbar");
        store.delete_point("B").expect("löschbar");
        assert_eq!(store.len(), 2);
        assert!(!store.contains("B"));
    }

    #[test]
    fn sorted_names_ordnet_nach_x_nicht_einfuegereihenfolge() {
        let mut store = two_point_store();
        store
            .insert_point(AnchorPoint::sharp("Mitte", Vec2::new(100.0, 300.0), [1.0; 4]))
            .expect("einfügbar");
        assert_eq!(store.sorted_names(), vec!["A", "Mitte", "B"]);
    }

    #[test]
    fn next_free_name_findet_kleinste_luecke() {
        let mut store = two_point_store();
        store
            .insert_point(AnchorPoint::sharp("Point 1", Vec2::new(300.0, 300.0), [1.0; 4]))
            .expect("einfügbar");
        store
            .insert_point(AnchorPoint::sharp("Point 3", Vec2::new(400.0, 300.0), [1.0; 4]))
            .expect("einfügbar");
        assert_eq!(store.next_free_name(), "Point 2");
    }

    #[test]
    fn toggle_kind_sharp_zu_smooth_leitet_handles_ab() {
        let mut store = two_point_store();
        store
            .insert_point(AnchorPoint::sharp("Mitte", Vec2::new(100.0, 200.0), [1.0; 4]))
            .expect("einfügbar");
        store.toggle_point_kind("Mitte").expect("umschaltbar");

        let point = store.get("Mitte").expect("punkt vorhanden");
        let (cp1, cp2) = point.kind.handles().expect("handles abgeleitet");
        // Beide Nachbarn sind sharp → 1/6 der Sehne
        let chord_in = Vec2::new(100.0, 200.0) - Vec2::new(0.0, 300.0);
        assert_eq!(cp1, Vec2::new(100.0, 200.0) - chord_in / 6.0);
        let chord_out = Vec2::new(200.0, 300.0) - Vec2::new(100.0, 200.0);
        assert_eq!(cp2, Vec2::new(100.0, 200.0) + chord_out / 6.0);
    }

    #[test]
    fn toggle_kind_smooth_zu_sharp_verwirft_handles() {
        let mut store = two_point_store();
        store.toggle_point_kind("A").expect("umschaltbar");
        assert!(store.get("A").unwrap().kind.is_smooth());
        store.toggle_point_kind("A").expect("umschaltbar");
        assert!(!store.get("A").unwrap().kind.is_smooth());
    }

    #[test]
    fn scale_from_poses_mit_faktor_eins_ist_identitaet() {
        let mut store = two_point_store();
        store.toggle_point_kind("A").expect("umschaltbar");
        let names: Vec<String> = vec!["A".into(), "B".into()];
        let poses = store.poses_of(&names);
        let before: Vec<AnchorPoint> = store.sorted_points().into_iter().cloned().collect();

        store.scale_from_poses(Vec2::new(100.0, 300.0), Vec2::ONE, &poses);

        // Identität bis auf Float-Rundung: origin + (p − origin) · 1 ist
        // nicht bitgleich zu p
        for (b, a) in before.iter().zip(store.sorted_points()) {
            assert_relative_eq!(b.position.x, a.position.x, epsilon = 1e-4);
            assert_relative_eq!(b.position.y, a.position.y, epsilon = 1e-4);
            match (b.kind.handles(), a.kind.handles()) {
                (Some((b1, b2)), Some((a1, a2))) => {
                    assert_relative_eq!(b1.x, a1.x, epsilon = 1e-4);
                    assert_relative_eq!(b1.y, a1.y, epsilon = 1e-4);
                    assert_relative_eq!(b2.x, a2.x, epsilon = 1e-4);
                    assert_relative_eq!(b2.y, a2.y, epsilon = 1e-4);
                }
                (None, None) => {}
                _ => panic!("Punkt-Typ darf sich nicht ändern"),
            }
        }
    }

    #[test]
    fn scale_from_poses_ist_idempotent_pro_tick() {
        let mut store = two_point_store();
        let names: Vec<String> = vec!["A".into(), "B".into()];
        let poses = store.poses_of(&names);
        let origin = Vec2::new(100.0, 300.0);

        store.scale_from_poses(origin, Vec2::new(2.0, 1.0), &poses);
        let once = store.get("B").unwrap().position;
        // Zweiter Tick mit denselben Start-Posen darf nichts verändern
        store.scale_from_poses(origin, Vec2::new(2.0, 1.0), &poses);
        assert_eq!(store.get("B").unwrap().position, once);
        assert_eq!(once, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn snap_to_baseline_verschiebt_anker_und_handles_um_gleiches_delta() {
        let mut store = two_point_store();
        store
            .insert_point(AnchorPoint::smooth(
                "S",
                Vec2::new(100.0, 100.0),
                Vec2::new(80.0, 90.0),
                Vec2::new(120.0, 110.0),
                [1.0; 4],
            ))
            .expect("einfügbar");

        store.snap_to_baseline(&["S".to_string()]);

        let point = store.get("S").expect("punkt vorhanden");
        assert_eq!(point.position.y, 300.0);
        let (cp1, cp2) = point.kind.handles().expect("handles vorhanden");
        assert_eq!(cp1, Vec2::new(80.0, 290.0));
        assert_eq!(cp2, Vec2::new(120.0, 310.0));
    }

    #[test]
    fn placement_ohne_selektion_haengt_hinter_rechtestem_punkt_an() {
        let store = two_point_store();
        let placement = store.placement_x(None, 100.0);
        // Lücke A→B ist 200 ≥ 100 → linkeste Lücke wird zentriert
        assert_eq!(placement, Placement { x: 100.0, crowded: false });
    }

    #[test]
    fn placement_ohne_luecke_haengt_hinter_rechtestem_punkt_an() {
        let mut store = CurveStore::from_points(
            CanvasSpec::new(300.0, 600.0, 300.0),
            vec![
                AnchorPoint::sharp("A", Vec2::new(0.0, 300.0), [1.0; 4]),
                AnchorPoint::sharp("B", Vec2::new(90.0, 300.0), [1.0; 4]),
            ],
        )
        .expect("gültig");
        // Keine Lücke ≥ 100 → anhängen bei 190
        assert_eq!(
            store.placement_x(None, 100.0),
            Placement { x: 190.0, crowded: false }
        );

        store
            .insert_point(AnchorPoint::sharp("C", Vec2::new(280.0, 300.0), [1.0; 4]))
            .expect("einfügbar");
        // Jetzt existiert die Lücke 90→280 (190 ≥ 100) → dort zentrieren
        assert_eq!(
            store.placement_x(None, 100.0),
            Placement { x: 185.0, crowded: false }
        );
    }

    #[test]
    fn placement_pinnt_bei_vollem_canvas_an_den_rand() {
        // Alle Lücken < 100 UND hinter dem rechtesten Punkt kein Platz mehr
        let store = CurveStore::from_points(
            CanvasSpec::new(300.0, 600.0, 300.0),
            vec![
                AnchorPoint::sharp("A", Vec2::new(0.0, 300.0), [1.0; 4]),
                AnchorPoint::sharp("B", Vec2::new(90.0, 300.0), [1.0; 4]),
                AnchorPoint::sharp("C", Vec2::new(180.0, 300.0), [1.0; 4]),
                AnchorPoint::sharp("D", Vec2::new(270.0, 300.0), [1.0; 4]),
            ],
        )
        .expect("gültig");
        assert_eq!(
            store.placement_x(None, 100.0),
            Placement { x: 300.0, crowded: true }
        );
    }

    #[test]
    fn placement_mit_selektion_platziert_100_rechts() {
        let store = two_point_store();
        let placement = store.placement_x(Some(0.0), 100.0);
        // Zwischen A(0) und B(200): 100 rechts von A ist frei... B liegt bei 200 > 100
        assert_eq!(placement, Placement { x: 100.0, crowded: false });
    }

    #[test]
    fn placement_mit_selektion_weicht_bei_kollision_in_luecke_aus() {
        let mut store = two_point_store();
        store
            .insert_point(AnchorPoint::sharp("C", Vec2::new(80.0, 300.0), [1.0; 4]))
            .expect("einfügbar");
        // 100 rechts von A kollidiert mit C(80) → erste Lücke ≥ 100 nach A: C→B (80..200)
        let placement = store.placement_x(Some(0.0), 100.0);
        assert_eq!(placement, Placement { x: 140.0, crowded: false });
    }

    #[test]
    fn rename_erhaelt_eindeutigkeit() {
        let mut store = two_point_store();
        assert!(store.rename_point("A", "B").is_err());
        store.rename_point("A", "Anfang").expect("umbenennbar");
        assert!(store.contains("Anfang"));
        assert!(!store.contains("A"));
    }

    #[test]
    fn nearest_anchor_findet_naechsten_punkt() {
        let store = two_point_store();
        let (name, dist) = store.nearest_anchor(Vec2::new(190.0, 300.0)).expect("punkt");
        assert_eq!(name, "B");
        assert!((dist - 10.0).abs() < 1e-4);
    }
}
