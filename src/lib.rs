//! Pulsform Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod render;
pub mod shared;

pub use app::{EditorController, EditorIntent, EditorState, LogNotifier, Notifier, Severity};
pub use core::{
    export_normalized, parse_normalized, sample, AnchorPoint, Camera2D, CanvasSpec, CurveStore,
    NormalizedCurve, PointKind,
};
pub use json::{parse_curve_file, write_curve_file};
pub use shared::{EditorError, EditorOptions};
