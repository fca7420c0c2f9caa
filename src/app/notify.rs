//! Benachrichtigungs-Kanal für Advisories.
//!
//! Explizit konstruierte, hereingereichte Capability statt eines
//! prozessweiten Singletons: Use-Cases melden behebbare Zustände
//! (Validierung verweigert, Canvas überfüllt, Persistenz fehlgeschlagen)
//! über genau diese eine Schnittstelle.

/// Schweregrad einer Meldung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rein informativ (z.B. LayoutAdvisory bei überfülltem Canvas)
    Info,
    /// Operation verweigert oder best-effort fehlgeschlagen
    Warning,
    /// Import/Persistenz-Fehler
    Error,
}

/// Capability zum Melden von Advisories an die UI.
pub trait Notifier {
    /// Meldet eine Nachricht mit Schweregrad.
    fn advise(&mut self, message: &str, severity: Severity);
}

/// Notifier, der Meldungen ins Log schreibt (Standard für die Binary).
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn advise(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => log::info!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Error => log::error!("{}", message),
        }
    }
}

/// Notifier, der Meldungen sammelt (für Tests und Statuszeilen).
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    /// Alle bisher gemeldeten Nachrichten
    pub messages: Vec<(String, Severity)>,
}

impl CollectingNotifier {
    /// Erstellt einen leeren sammelnden Notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// True wenn eine Meldung den Teilstring enthält.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|(m, _)| m.contains(needle))
    }
}

impl Notifier for CollectingNotifier {
    fn advise(&mut self, message: &str, severity: Severity) {
        self.messages.push((message.to_string(), severity));
    }
}
