//! Editor-Controller für zentrale Intent-Verarbeitung.

use super::notify::Notifier;
use super::playback;
use super::state::{EditorState, GestureMode};
use super::use_cases::{camera, editing, gestures, history, selection, session};
use super::EditorIntent;
use glam::Vec2;

/// Orchestriert Eingabe-Intents und Use-Cases auf dem `EditorState`.
///
/// Pointer-Intents werden anhand des Pick-Ergebnisses bzw. der aktiven
/// Geste verteilt; alles andere geht direkt an den passenden Use-Case.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
        notifier: &mut dyn Notifier,
    ) -> anyhow::Result<()> {
        log::trace!("Intent: {:?}", intent);
        match intent {
            EditorIntent::PointerPressed {
                screen_pos,
                additive,
            } => self.pointer_pressed(state, screen_pos, additive),
            EditorIntent::PointerDragged {
                screen_pos,
                delta_screen,
            } => self.pointer_dragged(state, screen_pos, delta_screen),
            EditorIntent::PointerReleased => self.pointer_released(state, notifier),
            EditorIntent::PanPressed => {
                gestures::begin_pan(state);
            }
            EditorIntent::BeginScaleRequested { vertical_only } => {
                gestures::begin_transform_scale(state, vertical_only, notifier);
            }

            EditorIntent::AddPointRequested => editing::add_point(state, notifier),
            EditorIntent::DeleteSelectionRequested => editing::delete_selected(state, notifier),
            EditorIntent::DeletePointRequested { name } => {
                editing::delete_point(state, &name, notifier)
            }
            EditorIntent::TogglePointKindRequested { name } => {
                editing::toggle_point_kind(state, &name, notifier)
            }
            EditorIntent::ToggleStarRequested { name } => {
                editing::toggle_star(state, &name, notifier)
            }
            EditorIntent::SnapToBaselineRequested => {
                editing::snap_selected_to_baseline(state, notifier)
            }
            EditorIntent::RenamePointRequested { old, new } => {
                editing::rename_point(state, &old, &new, notifier)
            }

            EditorIntent::SelectAllRequested => selection::select_all(state),
            EditorIntent::ClearSelectionRequested => selection::clear_selection(state),

            EditorIntent::UndoRequested => history::undo(state, notifier),
            EditorIntent::RedoRequested => history::redo(state, notifier),

            EditorIntent::ZoomInRequested { focus_screen } => camera::zoom_in(state, focus_screen),
            EditorIntent::ZoomOutRequested { focus_screen } => {
                camera::zoom_out(state, focus_screen)
            }
            EditorIntent::ScrollZoom { focus_screen, up } => {
                camera::zoom_scroll(state, focus_screen, up)
            }
            EditorIntent::ResetCameraRequested => camera::reset(state),
            EditorIntent::CenterCurveRequested => camera::center_on_curve(state),
            EditorIntent::ViewportResized { size } => state.view.viewport_size = size,

            EditorIntent::EnterPreviewRequested { now } => playback::enter_preview(state, now),
            EditorIntent::LeavePreviewRequested => playback::leave_preview(state),

            EditorIntent::ImportFileRequested { path } => {
                session::import_from_file(state, &path, notifier)
            }
            EditorIntent::ExportFileRequested { path } => session::export_to_file(state, &path)?,
            EditorIntent::ExportNormalizedRequested { path } => {
                session::export_normalized_to_file(state, &path)?
            }
        }
        Ok(())
    }

    /// Pick am Druckpunkt entscheidet die startende Geste.
    fn pointer_pressed(&mut self, state: &mut EditorState, screen_pos: Vec2, additive: bool) {
        match selection::pick_at(state, screen_pos) {
            Some(selection::PickTarget::Handle(name, handle)) => {
                gestures::begin_handle_drag(state, &name, handle);
            }
            Some(selection::PickTarget::Anchor(name)) => {
                selection::select_point_click(state, &name, additive);
                if state.selection.is_selected(&name) {
                    gestures::begin_point_drag(state);
                }
            }
            None => {
                selection::click_on_empty(state, additive);
                let start_world = state.view.camera.screen_to_world(screen_pos);
                gestures::begin_box_select(state, start_world, additive);
            }
        }
    }

    /// Leitet Drag-Ticks an die aktive Geste weiter.
    fn pointer_dragged(&mut self, state: &mut EditorState, screen_pos: Vec2, delta_screen: Vec2) {
        match &state.gesture {
            GestureMode::BoxSelect { .. } => {
                let world = state.view.camera.screen_to_world(screen_pos);
                gestures::update_box_select(state, world);
            }
            GestureMode::DragPoints { .. } => {
                let delta_world = delta_screen * state.view.camera.world_per_pixel();
                gestures::update_point_drag(state, delta_world);
            }
            GestureMode::DragHandle { .. } => {
                let world = state.view.camera.screen_to_world(screen_pos);
                gestures::update_handle_drag(state, world);
            }
            GestureMode::Pan => gestures::update_pan(state, delta_screen),
            GestureMode::TransformScale { .. } => {
                gestures::update_transform_scale(state, delta_screen)
            }
            GestureMode::Idle => {}
        }
    }

    /// Beendet die aktive Geste.
    fn pointer_released(&mut self, state: &mut EditorState, notifier: &mut dyn Notifier) {
        match &state.gesture {
            GestureMode::BoxSelect { .. } => gestures::end_box_select(state),
            GestureMode::DragPoints { .. } => gestures::end_point_drag(state, notifier),
            GestureMode::DragHandle { .. } => gestures::end_handle_drag(state, notifier),
            GestureMode::Pan => gestures::end_pan(state),
            GestureMode::TransformScale { .. } => gestures::end_transform_scale(state, notifier),
            GestureMode::Idle => {}
        }
    }
}
