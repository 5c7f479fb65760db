//! Axis-aligned rectangle for window geometry

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle: top-left origin plus extent
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from position and size
    #[inline]
    pub fn from_parts(position: Vec2, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Right edge coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left position
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Extent
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check whether a point lies inside (edges inclusive)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Aspect ratio (width / height)
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.size().aspect_ratio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!((r.right() - 110.0).abs() < 0.001);
        assert!((r.bottom() - 70.0).abs() < 0.001);
        let c = r.center();
        assert!((c.x - 60.0).abs() < 0.001);
        assert!((c.y - 45.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Vec2::new(50.0, 50.0)));
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(100.0, 100.0)));
        assert!(!r.contains(Vec2::new(100.1, 50.0)));
    }

    #[test]
    fn test_rect_from_parts() {
        let r = Rect::from_parts(Vec2::new(5.0, 6.0), Size::new(7.0, 8.0));
        assert_eq!(r, Rect::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(r.position(), Vec2::new(5.0, 6.0));
        assert_eq!(r.size(), Size::new(7.0, 8.0));
    }
}
