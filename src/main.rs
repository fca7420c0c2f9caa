//! Pulsform Editor.
//!
//! Headless-Treiber: stellt die letzte Session wieder her, loggt eine
//! Zusammenfassung der Kurve und exportiert auf Wunsch die normalisierte
//! Form. Grafik-Frontends binden die Library direkt ein.

use pulsform_editor::app::use_cases::session;
use pulsform_editor::app::LogNotifier;
use pulsform_editor::{export_normalized, sample, EditorOptions, EditorState};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Pulsform Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let output = args.next().map(PathBuf::from);

    let mut state = EditorState::with_options(options);
    state.autosave_slot = Some(session_slot_path());
    let mut notifier = LogNotifier;
    session::restore_session(&mut state, input.as_deref(), &mut notifier);

    log::info!(
        "Kurve: {} Punkte auf Canvas {}x{}",
        state.curve.len(),
        state.canvas().width,
        state.canvas().height
    );

    let normalized = export_normalized(&state.curve)?;
    for i in 0..=8 {
        let phase = i as f32 / 8.0;
        log::info!("  Phase {:.3} -> y = {:+.4}", phase, sample(&normalized, phase));
    }

    if let Some(path) = output {
        session::export_normalized_to_file(&state, &path)?;
    }

    Ok(())
}

/// Session-Slot neben der Binary, analog zur Options-Datei.
fn session_slot_path() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_else(|_| PathBuf::from("pulsform-editor"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_default()
        .join("pulsform_session.json")
}
