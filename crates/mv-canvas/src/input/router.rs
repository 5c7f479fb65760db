//! Input router state machine
//!
//! Owns the single gesture session. At most one session exists at any
//! time; a begin call while one is active is refused rather than
//! silently replacing it.

use crate::error::CanvasError;
use crate::geometry::{self, Corner};
use crate::math::{Rect, Size, Vec2};
use crate::window::WindowId;
use super::{GestureKind, GestureSession};

/// Input router managing the active gesture
pub struct InputRouter {
    /// Current gesture session
    session: Option<GestureSession>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Get the current session
    #[inline]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a move gesture
    pub fn begin_move(
        &mut self,
        window_id: WindowId,
        start: Rect,
        bounds: Size,
        pointer: Vec2,
    ) -> Result<(), CanvasError> {
        self.ensure_idle()?;
        self.session = Some(GestureSession {
            window_id,
            start,
            bounds,
            proposed: start,
            kind: GestureKind::Move {
                grab_offset: pointer - start.position(),
            },
        });
        Ok(())
    }

    /// Begin a resize gesture from a corner
    pub fn begin_resize(
        &mut self,
        window_id: WindowId,
        start: Rect,
        bounds: Size,
        corner: Corner,
        pointer: Vec2,
    ) -> Result<(), CanvasError> {
        self.ensure_idle()?;
        let max_width =
            geometry::resize_max_width(start, corner, bounds, start.aspect_ratio());
        self.session = Some(GestureSession {
            window_id,
            start,
            bounds,
            proposed: start,
            kind: GestureKind::Resize {
                corner,
                start_pointer: pointer,
                max_width,
            },
        });
        Ok(())
    }

    /// Update the active session for a pointer move
    ///
    /// Returns the newly proposed geometry, or `None` when no gesture is
    /// in progress.
    pub fn update(&mut self, pointer: Vec2) -> Option<(WindowId, Rect)> {
        let session = self.session.as_mut()?;
        let proposed = session.update(pointer);
        Some((session.window_id, proposed))
    }

    /// End the active gesture, handing back the finished session
    pub fn end(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// Drop the session if it is bound to the given window
    pub fn cancel_for_window(&mut self, window_id: WindowId) {
        if self.session.as_ref().is_some_and(|s| s.window_id == window_id) {
            self.session = None;
        }
    }

    fn ensure_idle(&self) -> Result<(), CanvasError> {
        if self.session.is_some() {
            return Err(CanvasError::GestureActive);
        }
        Ok(())
    }
}
