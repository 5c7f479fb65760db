//! Gesture session state

use crate::geometry::{self, Corner};
use crate::math::{Rect, Size, Vec2};
use crate::window::WindowId;

/// What kind of gesture the session drives
#[derive(Clone, Copy, Debug)]
pub enum GestureKind {
    /// Moving a window
    Move {
        /// Offset from window origin to the pointer at gesture start
        grab_offset: Vec2,
    },
    /// Resizing a window from a corner
    Resize {
        /// The dragged corner; the opposite corner stays anchored
        corner: Corner,
        /// Pointer position at gesture start
        start_pointer: Vec2,
        /// Width bound so the anchored corner stays inside the container
        max_width: f32,
    },
}

/// One in-progress drag or resize
///
/// The start geometry and container bounds are frozen at gesture start;
/// `proposed` is the live geometry recomputed on every pointer move and
/// committed once per frame.
#[derive(Clone, Debug)]
pub struct GestureSession {
    /// The window this gesture owns
    pub window_id: WindowId,
    /// Window geometry at gesture start
    pub start: Rect,
    /// Container bounds measured at gesture start
    pub bounds: Size,
    /// Live proposed geometry, not yet committed
    pub proposed: Rect,
    /// Move or resize specifics
    pub kind: GestureKind,
}

impl GestureSession {
    /// Check if this is a move gesture
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self.kind, GestureKind::Move { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self.kind, GestureKind::Resize { .. })
    }

    /// Recompute the proposed geometry for a new pointer position
    pub fn update(&mut self, pointer: Vec2) -> Rect {
        self.proposed = match self.kind {
            GestureKind::Move { grab_offset } => {
                geometry::apply_move(self.start, pointer, grab_offset, self.bounds)
            }
            GestureKind::Resize {
                corner,
                start_pointer,
                max_width,
            } => {
                let dx = pointer.x - start_pointer.x;
                geometry::apply_resize(
                    self.start,
                    corner,
                    dx,
                    max_width,
                    self.start.aspect_ratio(),
                )
            }
        };
        self.proposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resize_session() -> GestureSession {
        let start = Rect::new(100.0, 100.0, 400.0, 225.0);
        GestureSession {
            window_id: 1,
            start,
            bounds: Size::new(1920.0, 1080.0),
            proposed: start,
            kind: GestureKind::Resize {
                corner: Corner::Se,
                start_pointer: Vec2::new(500.0, 325.0),
                max_width: 900.0,
            },
        }
    }

    #[test]
    fn test_resize_update_uses_horizontal_delta_only() {
        let mut session = resize_session();
        let rect = session.update(Vec2::new(600.0, 900.0));
        assert!((rect.width - 500.0).abs() < 0.001);
        assert!((rect.height - 281.25).abs() < 0.001);
    }

    #[test]
    fn test_move_update_carries_grab_offset() {
        let start = Rect::new(100.0, 100.0, 400.0, 225.0);
        let mut session = GestureSession {
            window_id: 1,
            start,
            bounds: Size::new(1920.0, 1080.0),
            proposed: start,
            kind: GestureKind::Move {
                grab_offset: Vec2::new(50.0, 20.0),
            },
        };
        let rect = session.update(Vec2::new(250.0, 220.0));
        assert!((rect.x - 200.0).abs() < 0.001);
        assert!((rect.y - 200.0).abs() < 0.001);
        assert!(session.is_move());
        assert!(!session.is_resize());
    }

    #[test]
    fn test_updates_always_start_from_frozen_geometry() {
        let mut session = resize_session();
        session.update(Vec2::new(900.0, 325.0));
        // a second update with the original pointer restores the start size
        let rect = session.update(Vec2::new(500.0, 325.0));
        assert!((rect.width - 400.0).abs() < 0.001);
    }
}
