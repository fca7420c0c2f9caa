//! Integrationstests: Datei-Roundtrip und Normalform-Export.

use approx::assert_relative_eq;
use pulsform_editor::core::validate_normalized;
use pulsform_editor::{
    export_normalized, parse_curve_file, parse_normalized, write_curve_file, CanvasSpec,
    EditorState,
};

#[test]
fn test_autorenformat_roundtrip_ist_verlustfrei() {
    let state = EditorState::new();
    let json = write_curve_file(&state.curve).expect("Export sollte gelingen");

    let restored =
        parse_curve_file(&json, state.canvas()).expect("Reimport sollte gelingen");

    assert_eq!(restored.len(), state.curve.len());
    for point in state.curve.iter() {
        let other = restored.get(&point.name).expect("Punkt sollte existieren");
        assert_eq!(other.position, point.position);
        assert_eq!(other.kind, point.kind);
        assert_eq!(other.starred, point.starred);
        assert_eq!(other.color, point.color);
    }
}

#[test]
fn test_normalform_bildet_x_auf_einheitsintervall_ab() {
    let state = EditorState::new();
    let normalized = export_normalized(&state.curve).expect("Export sollte gelingen");

    assert_relative_eq!(normalized.points.first().unwrap().x, 0.0);
    assert_relative_eq!(normalized.points.last().unwrap().x, 1.0);
    for pair in normalized.points.windows(2) {
        assert!(pair[0].x < pair[1].x, "x-Reihenfolge bleibt strikt");
    }
}

#[test]
fn test_normalform_y_ist_vorzeichenrichtig_skaliert() {
    // R Peak liegt 180 Einheiten ÜBER der Baseline (Autor-y kleiner);
    // normalisiert ist oben positiv, Skala = Höhe/4 = 150
    let state = EditorState::new();
    let normalized = export_normalized(&state.curve).expect("Export sollte gelingen");

    let r_peak = normalized
        .points
        .iter()
        .find(|p| (p.x - 0.4).abs() < 1e-4)
        .expect("R Peak bei x=0.4");
    assert_relative_eq!(r_peak.y, 1.2, epsilon = 1e-4);
}

#[test]
fn test_normalform_metadaten_beschreiben_den_autor_raum() {
    let state = EditorState::new();
    let normalized = export_normalized(&state.curve).expect("Export sollte gelingen");
    let json = serde_json::to_string(&normalized).expect("Serialisierung");

    assert!(json.contains("\"originalWidth\""));
    assert!(json.contains("\"baselineRatio\""));

    let reparsed = parse_normalized(&json).expect("Normalform sollte parsebar sein");
    // x-Spanne der Default-Kurve: 0.70 * 1200
    assert_relative_eq!(reparsed.metadata.original_width, 840.0);
    assert_relative_eq!(reparsed.metadata.baseline_ratio, 0.5);
    validate_normalized(&reparsed).expect("Normalform sollte valide sein");
}

#[test]
fn test_import_verweigert_smooth_punkt_ohne_handles() {
    let json = r#"{
        "points": [
            {"x": 0.0, "y": 300.0, "name": "A", "color": [1.0, 1.0, 1.0, 1.0], "type": "sharp"},
            {"x": 400.0, "y": 200.0, "name": "B", "color": [1.0, 1.0, 1.0, 1.0], "type": "smooth"},
            {"x": 800.0, "y": 300.0, "name": "C", "color": [1.0, 1.0, 1.0, 1.0], "type": "sharp"}
        ]
    }"#;
    let canvas = CanvasSpec::new(1200.0, 600.0, 300.0);

    let err = parse_curve_file(json, canvas).expect_err("Import sollte scheitern");
    assert!(err.to_string().contains("cp1/cp2"));
}

#[test]
fn test_import_verweigert_doppelte_namen() {
    let json = r#"{
        "points": [
            {"x": 0.0, "y": 300.0, "name": "A", "color": [1.0, 1.0, 1.0, 1.0], "type": "sharp"},
            {"x": 400.0, "y": 200.0, "name": "A", "color": [1.0, 1.0, 1.0, 1.0], "type": "sharp"}
        ]
    }"#;
    let canvas = CanvasSpec::new(1200.0, 600.0, 300.0);

    assert!(parse_curve_file(json, canvas).is_err());
}

#[test]
fn test_export_verweigert_kurve_ohne_x_ausdehnung() {
    let json = r#"{
        "points": [
            {"x": 100.0, "y": 300.0, "name": "A", "color": [1.0, 1.0, 1.0, 1.0], "type": "sharp"},
            {"x": 100.0, "y": 200.0, "name": "B", "color": [1.0, 1.0, 1.0, 1.0], "type": "sharp"}
        ]
    }"#;
    let canvas = CanvasSpec::new(1200.0, 600.0, 300.0);
    let store = parse_curve_file(json, canvas).expect("Import sollte gelingen");

    assert!(export_normalized(&store).is_err());
}
