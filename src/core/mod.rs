//! Kern-Datenstrukturen und pure Geometrie: Punkte, Kurve, Kamera,
//! Normalform, Sampler und Default-Generator.

pub mod camera;
pub mod curve;
pub mod default_curve;
pub mod normalized;
pub mod point;
pub mod sampler;
pub mod spline;

pub use camera::Camera2D;
pub use curve::{CanvasSpec, CurveStore, Placement, PointPose};
pub use normalized::{
    export_normalized, parse_normalized, validate_normalized, CurveMetadata, NormalizedCurve,
    NormalizedPoint, XY,
};
pub use point::{AnchorPoint, PointKind, PointKindTag};
pub use sampler::sample;
