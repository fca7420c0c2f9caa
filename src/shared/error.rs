//! Typisierte Fehlerklassen des Editors.
//!
//! Alle Fehler sind lokal und behebbar: keine dieser Varianten beendet den
//! Prozess. ValidationError und ImportError lassen den In-Memory-Zustand
//! unverändert, PersistenceError ist best-effort (Editor läuft rein im
//! Speicher weiter).

use thiserror::Error;

/// Fehlerklassen für Kurven-Operationen, Import und Persistenz.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Operation verweigert, Zustand unverändert (z.B. Löschen unter Minimum).
    #[error("Validierung fehlgeschlagen: {0}")]
    Validation(String),

    /// Import abgebrochen, vorheriger Zustand bleibt erhalten.
    #[error("Import fehlgeschlagen: {0}")]
    Import(String),

    /// Lese-/Schreibfehler des Session-Slots — nicht fatal.
    #[error("Persistenz fehlgeschlagen: {0}")]
    Persistence(String),
}

impl EditorError {
    /// Kurzform für Validierungsfehler.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Kurzform für Importfehler.
    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    /// Kurzform für Persistenzfehler.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
