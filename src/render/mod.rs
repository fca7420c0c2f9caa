//! Pfad-Emission für das Rendering.
//!
//! Der Editor kennt kein konkretes Grafik-Backend; er emittiert
//! Pfad-Kommandos in Screen-Koordinaten über die `PathSink`-Schnittstelle.
//! Ein Backend zeichnet die Kommandos, der `RecordingSink` protokolliert
//! sie für Tests.

use crate::app::state::GestureMode;
use crate::core::{Camera2D, CurveStore};
use glam::Vec2;

/// Senke für Pfad-Kommandos in Screen-Koordinaten.
pub trait PathSink {
    /// Beginnt einen neuen Teilpfad.
    fn move_to(&mut self, p: Vec2);
    /// Gerades Segment zum Punkt.
    fn line_to(&mut self, p: Vec2);
    /// Kubisches Bézier-Segment mit zwei Kontrollpunkten.
    fn cubic_to(&mut self, c1: Vec2, c2: Vec2, p: Vec2);
    /// Schließt den aktuellen Teilpfad.
    fn close(&mut self);
}

/// Emittiert den Kurvenpfad in Zeichenreihenfolge (x-sortiert).
///
/// Ein Segment wird nur dann kubisch gezeichnet, wenn BEIDE Endpunkte
/// smooth sind — sonst linear. Das spiegelt exakt die Sampling-Semantik,
/// Darstellung und Wiedergabe können also nicht auseinanderlaufen.
pub fn emit_curve_path(curve: &CurveStore, camera: &Camera2D, sink: &mut dyn PathSink) {
    let points = curve.sorted_points();
    let Some(first) = points.first() else {
        return;
    };
    sink.move_to(camera.world_to_screen(first.position));

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        match (start.kind.handles(), end.kind.handles()) {
            (Some((_, cp2)), Some((cp1, _))) => sink.cubic_to(
                camera.world_to_screen(cp2),
                camera.world_to_screen(cp1),
                camera.world_to_screen(end.position),
            ),
            _ => sink.line_to(camera.world_to_screen(end.position)),
        }
    }
}

/// Emittiert die Tangenten-Handles eines Punkts als zwei Strecken
/// (Anker → cp1, Anker → cp2). Sharp-Punkte emittieren nichts.
pub fn emit_handles(curve: &CurveStore, name: &str, camera: &Camera2D, sink: &mut dyn PathSink) {
    let Some(point) = curve.get(name) else {
        return;
    };
    let Some((cp1, cp2)) = point.kind.handles() else {
        return;
    };
    let anchor = camera.world_to_screen(point.position);
    sink.move_to(anchor);
    sink.line_to(camera.world_to_screen(cp1));
    sink.move_to(anchor);
    sink.line_to(camera.world_to_screen(cp2));
}

/// Emittiert das Gummiband-Rechteck einer laufenden Rechteck-Selektion.
pub fn emit_selection_rect(gesture: &GestureMode, camera: &Camera2D, sink: &mut dyn PathSink) {
    let GestureMode::BoxSelect {
        start_world,
        current_world,
        ..
    } = gesture
    else {
        return;
    };
    let a = camera.world_to_screen(*start_world);
    let b = camera.world_to_screen(*current_world);
    sink.move_to(a);
    sink.line_to(Vec2::new(b.x, a.y));
    sink.line_to(b);
    sink.line_to(Vec2::new(a.x, b.y));
    sink.close();
}

/// Aufgezeichnetes Pfad-Kommando.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// Sink, der alle Kommandos aufzeichnet (für Tests).
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Kommandos in Emissionsreihenfolge
    pub commands: Vec<PathCommand>,
}

impl RecordingSink {
    /// Erstellt einen leeren aufzeichnenden Sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathSink for RecordingSink {
    fn move_to(&mut self, p: Vec2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    fn cubic_to(&mut self, c1: Vec2, c2: Vec2, p: Vec2) {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
