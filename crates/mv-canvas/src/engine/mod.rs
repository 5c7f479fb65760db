//! Canvas engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, container bounds, reconciliation
//! - `input`: Gesture handling and frame-coalesced geometry commits
//! - `timers`: Host-ticked debounce timers and source updates

mod input;
mod timers;
mod windows;

pub use timers::{SourceUpdate, RECONCILE_DEBOUNCE_MS, RELAYOUT_DEBOUNCE_MS};

use mv_embed::{facebook, RelayoutPolicy};

use crate::geometry;
use crate::input::InputRouter;
use crate::math::{Rect, Size};
use crate::window::{Window, WindowId, WindowManager};
use timers::TimerQueue;

/// Canvas engine coordinating the window registry, the gesture state
/// machine, and the debounce timers
///
/// This is the main entry point for canvas operations, managing:
/// - Window registry (create, raise, two-step delete)
/// - Input router (single-session drag/resize state machine)
/// - Frame-coalesced geometry commits (one layout write per frame)
/// - Debounce timers (provider re-layout, container reconciliation)
pub struct CanvasEngine {
    /// Window registry
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// Current container bounds; frozen per gesture at gesture start
    container: Size,
    /// Geometry staged by pointer moves, written by `commit_frame`
    pending_commit: Option<(WindowId, Rect)>,
    /// Pending debounce timers
    timers: TimerQueue,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasEngine {
    /// Create a new canvas engine
    pub fn new() -> Self {
        Self {
            windows: WindowManager::new(),
            input: InputRouter::new(),
            container: Size::ZERO,
            pending_commit: None,
            timers: TimerQueue::default(),
        }
    }

    /// Initialize with the container's measured bounds
    pub fn init(&mut self, width: f32, height: f32) {
        self.container = Size::new(width, height);
    }

    /// Current container bounds
    #[inline]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Advance timers; returns source updates the host must apply
    ///
    /// Fires due re-layout requeries, and after a container resize
    /// settles runs the reconciliation pass (every window clamped back
    /// into the container, re-layout providers requeried).
    pub fn tick(&mut self, now_ms: f64) -> Vec<SourceUpdate> {
        let (mut relayout_ids, reconcile) = self.timers.fire_due(now_ms);

        if reconcile {
            let container = self.container;
            for window in self.windows.all_windows_mut() {
                window.rect = geometry::clamp_to_container(window.rect, container);
                if window.needs_relayout() && !relayout_ids.contains(&window.id) {
                    relayout_ids.push(window.id);
                }
            }
        }

        relayout_ids
            .into_iter()
            .filter_map(|id| {
                let window = self.windows.get(id)?;
                let source = relayout_source(window)?;
                Some(SourceUpdate {
                    window_id: id,
                    source,
                })
            })
            .collect()
    }
}

/// Fresh iframe source for a window's re-layout policy, if any.
fn relayout_source(window: &Window) -> Option<String> {
    match &window.descriptor.relayout {
        RelayoutPolicy::FacebookPlugin { href } => Some(facebook::plugin_url(
            href,
            window.rect.width,
            window.rect.height,
        )),
        RelayoutPolicy::None => None,
    }
}
