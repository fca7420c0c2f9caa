use std::collections::HashSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Punktnamen (Arc für O(1)-Clone)
    pub selected: Arc<HashSet<String>>,
    /// Primär selektierter Punkt (Anker für Handle-Drag und Add-Platzierung)
    pub primary: Option<String>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt eine mutable Referenz auf die Menge zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut HashSet<String> {
        Arc::make_mut(&mut self.selected)
    }

    /// True wenn der Punkt selektiert ist.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Anzahl selektierter Punkte.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Löscht Selektion und Primär-Status.
    pub fn clear(&mut self) {
        self.ids_mut().clear();
        self.primary = None;
    }

    /// Selektierte Namen als sortierte Liste (deterministisch für Use-Cases).
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.selected.iter().cloned().collect();
        names.sort();
        names
    }
}
