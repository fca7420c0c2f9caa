//! Use-Cases: Session-Persistenz (Autosave, Restore, Export/Import).

use crate::app::notify::{Notifier, Severity};
use crate::app::state::EditorState;
use crate::core::{export_normalized, CanvasSpec};
use crate::json::{reader, writer};
use std::fs;
use std::path::Path;

/// Persistiert den aktuellen Kurvenzustand best-effort in den Session-Slot.
///
/// Fehler sind nicht-fatal: der Editier-Zustand im Speicher bleibt gültig,
/// der Nutzer bekommt eine Advisory.
pub fn autosave(state: &EditorState, notifier: &mut dyn Notifier) {
    let Some(path) = state.autosave_slot.as_deref() else {
        return;
    };
    if let Err(e) = save_curve_to(state, path) {
        log::warn!("Autosave nach {:?} fehlgeschlagen: {:#}", path, e);
        notifier.advise(
            &format!("Autosave fehlgeschlagen: {}", e),
            Severity::Warning,
        );
    }
}

fn save_curve_to(state: &EditorState, path: &Path) -> anyhow::Result<()> {
    let json = writer::write_curve_file(&state.curve)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;
    Ok(())
}

/// Stellt die Session beim Start wieder her.
///
/// Reihenfolge: Session-Slot, dann Fallback-Datei, sonst bleibt die
/// Default-Kurve stehen. Eine unlesbare Datei bricht nicht ab, sondern
/// fällt mit Advisory auf die nächste Stufe durch.
pub fn restore_session(
    state: &mut EditorState,
    fallback: Option<&Path>,
    notifier: &mut dyn Notifier,
) {
    let canvas = state.canvas();

    if let Some(slot) = state.autosave_slot.clone() {
        if slot.exists() {
            match load_curve_from(&slot, canvas) {
                Ok(curve) => {
                    log::info!("Session aus {:?} wiederhergestellt", slot);
                    state.replace_curve(curve, "Session wiederhergestellt");
                    return;
                }
                Err(e) => {
                    log::warn!("Session-Slot {:?} unlesbar: {}", slot, e);
                    notifier.advise(
                        &format!("Session-Slot unlesbar: {}", e),
                        Severity::Warning,
                    );
                }
            }
        }
    }

    if let Some(path) = fallback {
        if path.exists() {
            match load_curve_from(path, canvas) {
                Ok(curve) => {
                    log::info!("Kurve aus {:?} geladen", path);
                    state.replace_curve(curve, "Datei geladen");
                    return;
                }
                Err(e) => {
                    notifier.advise(&format!("Datei unlesbar: {}", e), Severity::Warning);
                }
            }
        }
    }

    log::info!("Keine Session gefunden, Default-Kurve aktiv");
}

fn load_curve_from(
    path: &Path,
    canvas: CanvasSpec,
) -> Result<crate::core::CurveStore, crate::shared::EditorError> {
    let json = fs::read_to_string(path)
        .map_err(|e| crate::shared::EditorError::persistence(e.to_string()))?;
    reader::parse_curve_file(&json, canvas)
}

/// Exportiert die Kurve im Autoren-Format (volle Treue) in eine Datei.
pub fn export_to_file(state: &EditorState, path: &Path) -> anyhow::Result<()> {
    save_curve_to(state, path)?;
    log::info!("Kurve nach {:?} exportiert", path);
    Ok(())
}

/// Exportiert die normalisierte, auflösungsunabhängige Form in eine Datei.
pub fn export_normalized_to_file(state: &EditorState, path: &Path) -> anyhow::Result<()> {
    let normalized = export_normalized(&state.curve)?;
    let json = serde_json::to_string_pretty(&normalized)?;
    fs::write(path, json)?;
    log::info!("Normalisierte Kurve nach {:?} exportiert", path);
    Ok(())
}

/// Importiert eine Kurve aus einer Datei im Autoren-Format.
///
/// Bei jedem Fehler bleibt der aktuelle Zustand vollständig unangetastet.
pub fn import_from_file(state: &mut EditorState, path: &Path, notifier: &mut dyn Notifier) {
    match load_curve_from(path, state.canvas()) {
        Ok(curve) => {
            state.replace_curve(curve, "Datei importiert");
            autosave(state, notifier);
            log::info!("Kurve aus {:?} importiert", path);
        }
        Err(e) => {
            log::warn!("Import aus {:?} fehlgeschlagen: {}", path, e);
            notifier.advise(&format!("Import fehlgeschlagen: {}", e), Severity::Error);
        }
    }
}
