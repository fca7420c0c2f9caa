//! Gemeinsame Typen: Optionen und Fehlerklassen.

pub mod error;
pub mod options;

pub use error::EditorError;
pub use options::EditorOptions;
