//! Window lifecycle and container reconciliation

use mv_embed::EmbedDescriptor;

use crate::error::CanvasError;
use crate::math::Size;
use crate::window::WindowId;
use super::CanvasEngine;

impl CanvasEngine {
    /// Create a window for a resolved descriptor
    ///
    /// Providers with a re-layout policy get an initial requery debounce
    /// so the placeholder source is replaced once the window has real
    /// dimensions.
    pub fn create_window(&mut self, descriptor: EmbedDescriptor, now_ms: f64) -> WindowId {
        let needs_relayout = descriptor.relayout.is_active();
        let id = self.windows.create(descriptor, self.container);
        if needs_relayout {
            self.timers.schedule_relayout(id, now_ms);
        }
        id
    }

    /// Raise a window above all others
    pub fn raise_window(&mut self, id: WindowId) -> Result<(), CanvasError> {
        if self.windows.get(id).is_none() {
            return Err(CanvasError::WindowNotFound(id));
        }
        self.windows.raise(id);
        Ok(())
    }

    /// Request deletion; the window shows a confirmation overlay
    pub fn request_close(&mut self, id: WindowId) -> Result<(), CanvasError> {
        if !self.windows.request_close(id) {
            return Err(CanvasError::WindowNotFound(id));
        }
        Ok(())
    }

    /// Cancel a pending deletion, restoring the prior state
    pub fn cancel_close(&mut self, id: WindowId) -> Result<(), CanvasError> {
        if !self.windows.cancel_close(id) {
            return Err(CanvasError::WindowNotFound(id));
        }
        Ok(())
    }

    /// Confirm a pending deletion
    ///
    /// Destroys the window and releases everything bound to it: pending
    /// debounce timers, any staged geometry commit, and the gesture
    /// session if it owns one.
    pub fn confirm_close(&mut self, id: WindowId) -> Result<(), CanvasError> {
        match self.windows.get(id) {
            None => return Err(CanvasError::WindowNotFound(id)),
            Some(window) if !window.confirm_pending => {
                return Err(CanvasError::InvalidOperation {
                    op: "confirm_close",
                    reason: "no close was requested",
                });
            }
            Some(_) => {}
        }

        self.windows.remove(id);
        self.timers.cancel_window(id);
        self.input.cancel_for_window(id);
        if self.pending_commit.is_some_and(|(wid, _)| wid == id) {
            self.pending_commit = None;
        }
        Ok(())
    }

    /// Update the container bounds after a viewport resize
    ///
    /// The reconciliation pass runs on a debounce, not immediately, so a
    /// continuous window-drag of the browser chrome settles first. An
    /// active gesture keeps its frozen bounds until it ends.
    pub fn resize_container(&mut self, width: f32, height: f32, now_ms: f64) {
        self.container = Size::new(width, height);
        self.timers.schedule_reconcile(now_ms);
    }
}
