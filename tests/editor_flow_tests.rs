//! Integrationstests: kompletter Editier-Zyklus über den Controller,
//! Session-Persistenz und zyklisches Sampling.

use approx::assert_relative_eq;
use glam::Vec2;
use pulsform_editor::app::use_cases::session;
use pulsform_editor::app::CollectingNotifier;
use pulsform_editor::{export_normalized, sample, EditorController, EditorIntent, EditorState};

#[test]
fn test_editier_zyklus_mit_undo_redo_und_autosave() {
    let dir = tempfile::tempdir().expect("tempdir");
    let slot = dir.path().join("session.json");

    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    state.autosave_slot = Some(slot.clone());
    let mut notifier = CollectingNotifier::new();

    // Punkt hinzufügen, verschieben, Typ umschalten
    controller
        .handle_intent(&mut state, EditorIntent::AddPointRequested, &mut notifier)
        .expect("AddPoint sollte durchlaufen");
    let anchor = state.curve.get("Point 1").unwrap().position;
    let screen = state.view.camera.world_to_screen(anchor);
    controller
        .handle_intent(
            &mut state,
            EditorIntent::PointerPressed {
                screen_pos: screen,
                additive: false,
            },
            &mut notifier,
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            EditorIntent::PointerDragged {
                screen_pos: screen + Vec2::new(0.0, -40.0),
                delta_screen: Vec2::new(0.0, -40.0),
            },
            &mut notifier,
        )
        .unwrap();
    controller
        .handle_intent(&mut state, EditorIntent::PointerReleased, &mut notifier)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            EditorIntent::TogglePointKindRequested {
                name: "Point 1".to_string(),
            },
            &mut notifier,
        )
        .unwrap();

    assert_eq!(state.history.len(), 4, "drei Commits plus Initial");
    assert!(state.curve.get("Point 1").unwrap().kind.is_smooth());

    // Zwei Schritte zurück: Punkt existiert, aber unverschoben und sharp
    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested, &mut notifier)
        .unwrap();
    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested, &mut notifier)
        .unwrap();
    let point = state.curve.get("Point 1").expect("Punkt noch vorhanden");
    assert_eq!(point.position, anchor);
    assert!(!point.kind.is_smooth());

    // Redo stellt die Verschiebung wieder her
    controller
        .handle_intent(&mut state, EditorIntent::RedoRequested, &mut notifier)
        .unwrap();
    assert_relative_eq!(
        state.curve.get("Point 1").unwrap().position.y,
        anchor.y - 40.0
    );

    // Der Slot spiegelt den Live-Zustand: frischer Editor stellt ihn wieder her
    let mut restored = EditorState::new();
    restored.autosave_slot = Some(slot);
    session::restore_session(&mut restored, None, &mut notifier);
    assert_relative_eq!(
        restored.curve.get("Point 1").unwrap().position.y,
        anchor.y - 40.0
    );
}

#[test]
fn test_normalisierte_kurve_sampelt_zyklisch_ohne_sprung() {
    let state = EditorState::new();
    let normalized = export_normalized(&state.curve).expect("exportierbar");

    // Beide Enden der Default-Kurve liegen auf der Baseline: die Naht bei
    // Phase 0 ist stetig
    let before = sample(&normalized, 0.999);
    let at = sample(&normalized, 0.0);
    let after = sample(&normalized, 0.001);
    assert!((before - at).abs() < 0.05);
    assert!((after - at).abs() < 0.05);

    // Phasen außerhalb [0,1) wrappen
    assert_relative_eq!(sample(&normalized, 1.25), sample(&normalized, 0.25));
    assert_relative_eq!(sample(&normalized, -0.75), sample(&normalized, 0.25));
}

#[test]
fn test_sampling_erreicht_den_r_peak() {
    let state = EditorState::new();
    let normalized = export_normalized(&state.curve).expect("exportierbar");

    // R Peak liegt bei Phase 0.4 mit normalisiertem y = +1.2
    assert_relative_eq!(sample(&normalized, 0.4), 1.2, epsilon = 1e-4);

    // Im Wrap-Segment (Tail → Start) bleibt die Kurve auf der Baseline
    assert_relative_eq!(sample(&normalized, 0.95), 0.0, epsilon = 1e-4);
}

#[test]
fn test_skalier_geste_ueber_den_controller() {
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    let mut notifier = CollectingNotifier::new();

    controller
        .handle_intent(&mut state, EditorIntent::SelectAllRequested, &mut notifier)
        .unwrap();
    let y_before = state.curve.get("R Peak").unwrap().position.y;

    controller
        .handle_intent(
            &mut state,
            EditorIntent::BeginScaleRequested {
                vertical_only: true,
            },
            &mut notifier,
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            EditorIntent::PointerDragged {
                screen_pos: Vec2::ZERO,
                delta_screen: Vec2::new(0.0, 100.0),
            },
            &mut notifier,
        )
        .unwrap();
    controller
        .handle_intent(&mut state, EditorIntent::PointerReleased, &mut notifier)
        .unwrap();

    // Faktor 2 bei 100 px Delta und Sensitivität 100 px
    let y_after = state.curve.get("R Peak").unwrap().position.y;
    assert!((y_after - y_before).abs() > 1.0, "y muss sich ändern");
    assert!(state.can_undo());
    assert!(state.gesture.is_idle());
}
