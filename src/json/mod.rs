//! Autor-Raum-Dateiformat (JSON): Export/Import der vollständigen
//! Punktmenge inklusive Namen, Farben und Markierungen.

pub mod reader;
pub mod writer;

pub use reader::parse_curve_file;
pub use writer::write_curve_file;

use crate::core::{PointKindTag, XY};
use serde::{Deserialize, Serialize};

/// Punkt im Autor-Raum-Dateiformat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FilePoint {
    pub x: f32,
    pub y: f32,
    pub name: String,
    pub color: [f32; 4],
    #[serde(rename = "type")]
    pub kind: PointKindTag,
    #[serde(default)]
    pub starred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp1: Option<XY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp2: Option<XY>,
}

/// Wurzelobjekt der Kurven-Datei.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CurveFile {
    pub points: Vec<FilePoint>,
}
