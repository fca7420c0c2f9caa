//! Snapshot-basierte Undo/Redo-History.
//!
//! Lineare Snapshot-Liste mit aktuellem Index: `entries[index]` ist immer
//! der Live-Zustand. Ein Commit schneidet den Redo-Schwanz ab, hängt an und
//! rückt den Index vor; bei Überschreiten der Kapazität fliegt der älteste
//! Eintrag (Index wird angepasst).

use crate::core::CurveStore;
use std::sync::Arc;

/// Unveränderliche Momentaufnahme der Punktmenge mit Aktions-Label.
///
/// Nutzt Arc-Clone (Copy-on-Write): das Erstellen eines Snapshots ist O(1) —
/// der teure Kurven-Klon findet erst beim nächsten `Arc::make_mut()` in
/// einem Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Kurvenzustand (Arc-Klon für O(1)-Snapshot)
    pub curve: Arc<CurveStore>,
    /// Menschenlesbares Aktions-Label ("Punkt hinzugefügt", ...)
    pub label: String,
}

impl Snapshot {
    /// Erstellt einen Snapshot aus dem aktuellen Kurvenzustand.
    pub fn new(curve: Arc<CurveStore>, label: impl Into<String>) -> Self {
        Self {
            curve,
            label: label.into(),
        }
    }
}

/// Undo/Redo-Manager über eine lineare Snapshot-Liste.
pub struct EditHistory {
    entries: Vec<Snapshot>,
    index: usize,
    capacity: usize,
}

impl EditHistory {
    /// Erstellt eine History mit maximaler Tiefe und initialem Snapshot.
    pub fn new(capacity: usize, initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Hängt einen committeten Zustand an.
    ///
    /// Verwirft zuerst alle Redo-Einträge hinter dem Index, dann wird bei
    /// voller Kapazität der älteste Eintrag entfernt.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index += 1;
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
            self.index -= 1;
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Geht einen Schritt zurück und liefert den anzuwendenden Snapshot.
    /// No-op (None) wenn bereits am Anfang.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].clone())
    }

    /// Geht einen Schritt vor und liefert den anzuwendenden Snapshot.
    /// No-op (None) wenn bereits am Ende.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].clone())
    }

    /// Der aktuelle Snapshot (entspricht dem Live-Zustand).
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.index]
    }

    /// Anzahl der gehaltenen Snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True wenn keine Einträge existieren (nie der Fall nach `new`).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_curve, CanvasSpec};

    fn snap(label: &str) -> Snapshot {
        let store = default_curve::generate(CanvasSpec::new(1200.0, 600.0, 300.0));
        Snapshot::new(Arc::new(store), label)
    }

    #[test]
    fn frische_history_kann_weder_undo_noch_redo() {
        let history = EditHistory::new(10, snap("Initial"));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_und_redo_bewegen_den_index() {
        let mut history = EditHistory::new(10, snap("Initial"));
        history.commit(snap("Schritt 1"));
        history.commit(snap("Schritt 2"));

        let restored = history.undo().expect("undo vorhanden");
        assert_eq!(restored.label, "Schritt 1");
        assert!(history.can_redo());

        let redone = history.redo().expect("redo vorhanden");
        assert_eq!(redone.label, "Schritt 2");
        assert!(!history.can_redo());
    }

    #[test]
    fn n_undos_erreichen_den_anfangszustand_n_redos_das_ende() {
        let mut history = EditHistory::new(20, snap("Initial"));
        for i in 1..=5 {
            history.commit(snap(&format!("Schritt {}", i)));
        }

        for _ in 0..5 {
            assert!(history.undo().is_some());
        }
        assert_eq!(history.current().label, "Initial");
        assert!(!history.can_undo());

        for _ in 0..5 {
            assert!(history.redo().is_some());
        }
        assert_eq!(history.current().label, "Schritt 5");
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_am_anfang_und_redo_am_ende_sind_noops() {
        let mut history = EditHistory::new(10, snap("Initial"));
        assert!(history.undo().is_none());
        assert_eq!(history.current().label, "Initial");
        assert!(history.redo().is_none());
        assert_eq!(history.current().label, "Initial");
    }

    #[test]
    fn commit_verwirft_den_redo_schwanz() {
        let mut history = EditHistory::new(10, snap("Initial"));
        history.commit(snap("A"));
        history.commit(snap("B"));
        history.undo().expect("undo vorhanden");

        history.commit(snap("C"));
        assert!(!history.can_redo());
        assert_eq!(history.current().label, "C");
        assert_eq!(history.len(), 3); // Initial, A, C
    }

    #[test]
    fn kapazitaet_verdraengt_aelteste_eintraege() {
        let mut history = EditHistory::new(3, snap("Initial"));
        for i in 1..=5 {
            history.commit(snap(&format!("Schritt {}", i)));
        }

        assert_eq!(history.len(), 3);
        let mut undo_count = 0;
        while history.undo().is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 2);
        assert_eq!(history.current().label, "Schritt 3");
    }
}
