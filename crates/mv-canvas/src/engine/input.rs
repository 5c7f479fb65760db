//! Gesture handling and frame-coalesced geometry commits

use crate::error::CanvasError;
use crate::geometry::{self, Corner};
use crate::math::{Rect, Vec2};
use crate::window::WindowId;
use super::CanvasEngine;

impl CanvasEngine {
    /// Begin a move gesture on a window
    ///
    /// Raises the window synchronously and freezes the container bounds
    /// for the gesture's duration. Refused while another gesture is
    /// active.
    pub fn begin_move(&mut self, id: WindowId, pointer: Vec2) -> Result<(), CanvasError> {
        let rect = self.window_rect(id)?;
        self.windows.raise(id);
        self.input.begin_move(id, rect, self.container(), pointer)
    }

    /// Begin a resize gesture from a corner
    pub fn begin_resize(
        &mut self,
        id: WindowId,
        corner: Corner,
        pointer: Vec2,
    ) -> Result<(), CanvasError> {
        let rect = self.window_rect(id)?;
        self.windows.raise(id);
        self.input
            .begin_resize(id, rect, self.container(), corner, pointer)
    }

    /// Feed a pointer move into the active gesture
    ///
    /// Only stages the proposed geometry; the visible window is written
    /// by [`commit_frame`](Self::commit_frame) once per animation frame.
    /// Returns whether a gesture consumed the event.
    pub fn update_pointer(&mut self, pointer: Vec2) -> bool {
        match self.input.update(pointer) {
            Some(staged) => {
                self.pending_commit = Some(staged);
                true
            }
            None => false,
        }
    }

    /// Write the staged geometry, at most one layout per frame
    ///
    /// Returns the committed geometry, or `None` when nothing was
    /// staged since the last frame.
    pub fn commit_frame(&mut self) -> Option<(WindowId, Rect)> {
        let (id, rect) = self.pending_commit.take()?;
        self.windows.get_mut(id)?.rect = rect;
        Some((id, rect))
    }

    /// End the active gesture
    ///
    /// Flushes any staged geometry, clamps the final rect into the
    /// bounds frozen at gesture start, and for resize gestures on
    /// re-layout providers schedules the settle debounce. Returns the
    /// window the gesture owned.
    pub fn end_gesture(&mut self, now_ms: f64) -> Option<WindowId> {
        let session = self.input.end()?;
        self.pending_commit = None;

        let id = session.window_id;
        let finished_resize = session.is_resize();
        let final_rect = geometry::clamp_to_container(session.proposed, session.bounds);

        let window = self.windows.get_mut(id)?;
        window.rect = final_rect;

        if finished_resize && window.needs_relayout() {
            self.timers.schedule_relayout(id, now_ms);
        }
        Some(id)
    }

    fn window_rect(&self, id: WindowId) -> Result<Rect, CanvasError> {
        self.windows
            .get(id)
            .map(|w| w.rect)
            .ok_or(CanvasError::WindowNotFound(id))
    }
}
