//! Pure placement and resize math
//!
//! Every function here maps explicit geometry values to new geometry
//! values; nothing reads ambient state. The gesture engine calls into
//! this layer once per pointer event, and the reconciliation pass reuses
//! [`clamp_to_container`] after a container resize.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};

/// Preferred width for a freshly created window.
pub const TARGET_WIDTH: f32 = 480.0;

/// Width floor at creation time, even in a cramped container.
pub const MIN_CREATE_WIDTH: f32 = 260.0;

/// Width floor while a resize gesture is in progress.
pub const MIN_RESIZE_WIDTH: f32 = 220.0;

/// Breathing room kept between a new window and the container edges.
pub const PLACEMENT_MARGIN: f32 = 40.0;

/// Stagger origin for the first window.
pub const STAGGER_BASE: f32 = 40.0;

/// Diagonal stagger applied per already-present window.
pub const STAGGER_STEP: f32 = 24.0;

/// A resize handle corner
///
/// The corner diagonally opposite the dragged one is the anchor: it
/// stays fixed for the whole gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Corner {
    /// Parse the two-letter handle name used by pointer event wiring
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nw" => Some(Corner::Nw),
            "ne" => Some(Corner::Ne),
            "sw" => Some(Corner::Sw),
            "se" => Some(Corner::Se),
            _ => None,
        }
    }

    /// Whether the dragged corner is on the east side
    #[inline]
    pub fn is_east(self) -> bool {
        matches!(self, Corner::Ne | Corner::Se)
    }

    /// Whether the dragged corner is on the north side
    #[inline]
    pub fn is_north(self) -> bool {
        matches!(self, Corner::Nw | Corner::Ne)
    }

    /// The diagonally opposite (anchored) corner
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Corner::Nw => Corner::Se,
            Corner::Ne => Corner::Sw,
            Corner::Sw => Corner::Ne,
            Corner::Se => Corner::Nw,
        }
    }
}

/// Initial size for a new window
///
/// Target width 480, scaled down uniformly if it would exceed the
/// container minus the placement margin, with a hard floor of 260 width.
pub fn initial_size(aspect_ratio: f32, container: Size) -> Size {
    let mut width = TARGET_WIDTH;
    let mut height = width / aspect_ratio;

    let avail_width = container.width - PLACEMENT_MARGIN;
    let avail_height = container.height - PLACEMENT_MARGIN;

    if avail_width > 0.0 && avail_height > 0.0 {
        let scale = (avail_width / width).min(avail_height / height).min(1.0);
        width *= scale;
    }

    width = width.max(MIN_CREATE_WIDTH);
    height = width / aspect_ratio;
    Size::new(width, height)
}

/// Diagonal stagger position by creation order
///
/// `index` is the count of windows already present at creation time.
pub fn initial_position(index: usize) -> Vec2 {
    let offset = STAGGER_BASE + index as f32 * STAGGER_STEP;
    Vec2::new(offset, offset)
}

/// Fit a geometry into the container
///
/// Oversized windows downscale uniformly (aspect preserved), then the
/// position clamps so the window lies fully inside. Idempotent.
pub fn clamp_to_container(rect: Rect, container: Size) -> Rect {
    let mut width = rect.width;
    let mut height = rect.height;

    if container.width > 0.0 && container.height > 0.0 {
        let scale = (container.width / width)
            .min(container.height / height)
            .min(1.0);
        width *= scale;
        height *= scale;
    }

    let x = rect.x.clamp(0.0, (container.width - width).max(0.0));
    let y = rect.y.clamp(0.0, (container.height - height).max(0.0));
    Rect::new(x, y, width, height)
}

/// Maximum width reachable from a corner drag
///
/// Bounded so the anchored corner never leaves the container: the
/// horizontal room from the anchored vertical edge, and the vertical
/// room from the anchored horizontal edge converted through the aspect
/// ratio.
pub fn resize_max_width(start: Rect, corner: Corner, container: Size, aspect_ratio: f32) -> f32 {
    let horizontal_room = if corner.is_east() {
        container.width - start.x
    } else {
        start.right()
    };

    let vertical_room = if corner.is_north() {
        start.bottom()
    } else {
        container.height - start.y
    };

    horizontal_room.min(vertical_room * aspect_ratio)
}

/// Apply a resize drag
///
/// Width follows the horizontal pointer delta only (`+dx` for east
/// corners, `-dx` for west), clamped to `[MIN_RESIZE_WIDTH, max_width]`;
/// height is derived from the aspect ratio. The anchored corner stays
/// fixed.
pub fn apply_resize(
    start: Rect,
    corner: Corner,
    dx: f32,
    max_width: f32,
    aspect_ratio: f32,
) -> Rect {
    let raw_width = if corner.is_east() {
        start.width + dx
    } else {
        start.width - dx
    };
    let width = raw_width.clamp(MIN_RESIZE_WIDTH, max_width.max(MIN_RESIZE_WIDTH));
    let height = width / aspect_ratio;

    let x = if corner.is_east() {
        start.x
    } else {
        start.right() - width
    };
    let y = if corner.is_north() {
        start.bottom() - height
    } else {
        start.y
    };

    Rect::new(x, y, width, height)
}

/// Apply a move drag
///
/// New top-left is the pointer minus the grab offset captured at gesture
/// start, clamped so the window stays fully inside the container.
pub fn apply_move(start: Rect, pointer: Vec2, grab_offset: Vec2, container: Size) -> Rect {
    let target = pointer - grab_offset;
    let x = target.x.clamp(0.0, (container.width - start.width).max(0.0));
    let y = target
        .y
        .clamp(0.0, (container.height - start.height).max(0.0));
    Rect::new(x, y, start.width, start.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f32 = 16.0 / 9.0;

    #[test]
    fn test_initial_size_fits_large_container() {
        let size = initial_size(WIDE, Size::new(1000.0, 800.0));
        assert!((size.width - 480.0).abs() < 0.001);
        assert!((size.height - 270.0).abs() < 0.001);
    }

    #[test]
    fn test_initial_size_scales_down_in_narrow_container() {
        let size = initial_size(WIDE, Size::new(440.0, 800.0));
        assert!((size.width - 400.0).abs() < 0.001);
        assert!((size.height - 225.0).abs() < 0.001);
    }

    #[test]
    fn test_initial_size_respects_width_floor() {
        let size = initial_size(WIDE, Size::new(200.0, 200.0));
        assert!((size.width - MIN_CREATE_WIDTH).abs() < 0.001);
        assert!((size.height - MIN_CREATE_WIDTH / WIDE).abs() < 0.001);
    }

    #[test]
    fn test_initial_position_staggers_diagonally() {
        let p0 = initial_position(0);
        assert!((p0.x - 40.0).abs() < 0.001);
        assert!((p0.y - 40.0).abs() < 0.001);

        let p3 = initial_position(3);
        assert!((p3.x - 112.0).abs() < 0.001);
        assert!((p3.y - 112.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_keeps_inside_window_untouched() {
        let rect = Rect::new(100.0, 100.0, 480.0, 270.0);
        let clamped = clamp_to_container(rect, Size::new(1920.0, 1080.0));
        assert_eq!(clamped, rect);
    }

    #[test]
    fn test_clamp_pulls_offscreen_window_back() {
        let rect = Rect::new(1800.0, -50.0, 480.0, 270.0);
        let clamped = clamp_to_container(rect, Size::new(1920.0, 1080.0));
        assert!((clamped.x - 1440.0).abs() < 0.001);
        assert!((clamped.y - 0.0).abs() < 0.001);
        assert!((clamped.width - 480.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_downscales_oversized_window_uniformly() {
        let rect = Rect::new(0.0, 0.0, 1600.0, 900.0);
        let clamped = clamp_to_container(rect, Size::new(800.0, 800.0));
        assert!((clamped.width - 800.0).abs() < 0.001);
        assert!((clamped.height - 450.0).abs() < 0.001);
        assert!((clamped.aspect_ratio() - WIDE).abs() < 0.001);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let containers = [
            Size::new(1920.0, 1080.0),
            Size::new(800.0, 600.0),
            Size::new(300.0, 200.0),
        ];
        let rects = [
            Rect::new(-100.0, 900.0, 480.0, 270.0),
            Rect::new(0.0, 0.0, 2000.0, 1125.0),
            Rect::new(50.0, 50.0, 100.0, 100.0),
        ];
        for container in containers {
            for rect in rects {
                let once = clamp_to_container(rect, container);
                let twice = clamp_to_container(once, container);
                assert_eq!(once, twice, "rect: {:?}, container: {:?}", rect, container);
            }
        }
    }

    #[test]
    fn test_resize_max_width_bounded_by_anchored_edges() {
        let container = Size::new(1000.0, 800.0);
        let start = Rect::new(100.0, 100.0, 400.0, 225.0);

        // se: anchored nw corner, room to the right and below
        let max = resize_max_width(start, Corner::Se, container, WIDE);
        assert!((max - 900.0).abs() < 0.001);

        // nw: anchored se corner, room to the left and above
        let max = resize_max_width(start, Corner::Nw, container, WIDE);
        // horizontal room 500, vertical room 325 * 16/9 ≈ 577.8
        assert!((max - 500.0).abs() < 0.001);

        // ne: vertical room is the anchored bottom edge
        let max = resize_max_width(start, Corner::Ne, container, WIDE);
        assert!((max - (325.0 * WIDE).min(900.0)).abs() < 0.001);
    }

    #[test]
    fn test_apply_resize_se_grows_with_fixed_top_left() {
        let start = Rect::new(0.0, 0.0, 400.0, 225.0);
        let resized = apply_resize(start, Corner::Se, 100.0, 900.0, WIDE);
        assert!((resized.width - 500.0).abs() < 0.001);
        assert!((resized.height - 281.25).abs() < 0.001);
        assert!((resized.x - 0.0).abs() < 0.001);
        assert!((resized.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_apply_resize_preserves_aspect_for_all_corners() {
        let start = Rect::new(200.0, 150.0, 400.0, 225.0);
        let start_aspect = (start.width / start.height * 1000.0).round();
        for corner in [Corner::Nw, Corner::Ne, Corner::Sw, Corner::Se] {
            for dx in [-150.0, -40.0, 0.0, 60.0, 200.0] {
                let resized = apply_resize(start, corner, dx, 700.0, WIDE);
                let aspect = (resized.width / resized.height * 1000.0).round();
                assert_eq!(aspect, start_aspect, "corner: {:?}, dx: {}", corner, dx);
            }
        }
    }

    #[test]
    fn test_apply_resize_keeps_opposite_corner_fixed() {
        let start = Rect::new(200.0, 150.0, 400.0, 225.0);
        for dx in [-100.0, 50.0, 180.0] {
            // se drag anchors nw
            let r = apply_resize(start, Corner::Se, dx, 900.0, WIDE);
            assert!((r.x - start.x).abs() < 0.001);
            assert!((r.y - start.y).abs() < 0.001);

            // nw drag anchors se
            let r = apply_resize(start, Corner::Nw, dx, 600.0, WIDE);
            assert!((r.right() - start.right()).abs() < 0.001);
            assert!((r.bottom() - start.bottom()).abs() < 0.001);

            // ne drag anchors sw
            let r = apply_resize(start, Corner::Ne, dx, 700.0, WIDE);
            assert!((r.x - start.x).abs() < 0.001);
            assert!((r.bottom() - start.bottom()).abs() < 0.001);

            // sw drag anchors ne
            let r = apply_resize(start, Corner::Sw, dx, 600.0, WIDE);
            assert!((r.right() - start.right()).abs() < 0.001);
            assert!((r.y - start.y).abs() < 0.001);
        }
    }

    #[test]
    fn test_apply_resize_clamps_to_width_floor_and_max() {
        let start = Rect::new(0.0, 0.0, 400.0, 225.0);

        let shrunk = apply_resize(start, Corner::Se, -350.0, 900.0, WIDE);
        assert!((shrunk.width - MIN_RESIZE_WIDTH).abs() < 0.001);

        let grown = apply_resize(start, Corner::Se, 5000.0, 900.0, WIDE);
        assert!((grown.width - 900.0).abs() < 0.001);
    }

    #[test]
    fn test_apply_move_follows_grab_offset() {
        let start = Rect::new(100.0, 100.0, 400.0, 225.0);
        let grab = Vec2::new(30.0, 10.0);
        let moved = apply_move(start, Vec2::new(330.0, 210.0), grab, Size::new(1920.0, 1080.0));
        assert!((moved.x - 300.0).abs() < 0.001);
        assert!((moved.y - 200.0).abs() < 0.001);
        assert!((moved.width - start.width).abs() < 0.001);
    }

    #[test]
    fn test_apply_move_clamps_to_container() {
        let start = Rect::new(100.0, 100.0, 400.0, 225.0);
        let moved = apply_move(
            start,
            Vec2::new(-500.0, 5000.0),
            Vec2::ZERO,
            Size::new(1000.0, 800.0),
        );
        assert!((moved.x - 0.0).abs() < 0.001);
        assert!((moved.y - 575.0).abs() < 0.001);
    }

    #[test]
    fn test_corner_parsing_and_opposites() {
        assert_eq!(Corner::from_name("se"), Some(Corner::Se));
        assert_eq!(Corner::from_name("x"), None);
        assert_eq!(Corner::Se.opposite(), Corner::Nw);
        assert_eq!(Corner::Ne.opposite(), Corner::Sw);
        assert!(Corner::Ne.is_east());
        assert!(Corner::Ne.is_north());
        assert!(!Corner::Sw.is_east());
        assert!(!Corner::Sw.is_north());
    }
}
