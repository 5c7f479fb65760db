//! Window registry for lifecycle and z-order

use std::collections::HashMap;

use mv_embed::EmbedDescriptor;

use crate::geometry;
use crate::math::{Rect, Size};
use super::{Window, WindowId};

/// Window registry owning the live set of windows and the z-counter
pub struct WindowManager {
    /// All windows by ID
    windows: HashMap<WindowId, Window>,
    /// Next window ID
    next_id: u64,
    /// Next z-order value
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            next_id: 1,
            next_z: 1,
        }
    }

    /// Create a window for a resolved descriptor
    ///
    /// Initial geometry comes from the placement math: target size from
    /// the descriptor's aspect ratio, staggered position by the count of
    /// windows already present, clamped into the container.
    pub fn create(&mut self, descriptor: EmbedDescriptor, container: Size) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let z_order = self.next_z;
        self.next_z += 1;

        let size = geometry::initial_size(descriptor.aspect_ratio, container);
        let position = geometry::initial_position(self.windows.len());
        let rect =
            geometry::clamp_to_container(Rect::from_parts(position, size), container);

        let window = Window {
            id,
            descriptor,
            rect,
            z_order,
            confirm_pending: false,
        };
        self.windows.insert(id, window);

        id
    }

    /// Remove a window
    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        self.windows.remove(&id)
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Raise a window above all others
    pub fn raise(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_order = self.next_z;
            self.next_z += 1;
        }
    }

    /// Mark a window as awaiting delete confirmation
    pub fn request_close(&mut self, id: WindowId) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.confirm_pending = true;
                true
            }
            None => false,
        }
    }

    /// Clear a pending delete confirmation, restoring the prior state
    pub fn cancel_close(&mut self, id: WindowId) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.confirm_pending = false;
                true
            }
            None => false,
        }
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Get all windows
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Mutable iteration, used by the reconciliation pass
    pub(crate) fn all_windows_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.values_mut()
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mv_embed::resolve_url;

    fn descriptor() -> EmbedDescriptor {
        resolve_url("https://youtu.be/dQw4w9WgXcQ").unwrap()
    }

    const CONTAINER: Size = Size::new(1920.0, 1080.0);

    #[test]
    fn test_window_creation_places_and_sizes() {
        let mut wm = WindowManager::new();
        let id = wm.create(descriptor(), CONTAINER);

        let window = wm.get(id).unwrap();
        assert!((window.rect.width - 480.0).abs() < 0.001);
        assert!((window.rect.height - 270.0).abs() < 0.001);
        assert!((window.rect.x - 40.0).abs() < 0.001);
        assert_eq!(wm.count(), 1);
    }

    #[test]
    fn test_creation_staggers_by_present_count() {
        let mut wm = WindowManager::new();
        wm.create(descriptor(), CONTAINER);
        let second = wm.create(descriptor(), CONTAINER);

        let rect = wm.get(second).unwrap().rect;
        assert!((rect.x - 64.0).abs() < 0.001);
        assert!((rect.y - 64.0).abs() < 0.001);
    }

    #[test]
    fn test_raise_puts_window_on_top() {
        let mut wm = WindowManager::new();
        let first = wm.create(descriptor(), CONTAINER);
        let second = wm.create(descriptor(), CONTAINER);

        assert!(wm.get(first).unwrap().z_order < wm.get(second).unwrap().z_order);

        wm.raise(first);
        assert!(wm.get(first).unwrap().z_order > wm.get(second).unwrap().z_order);

        let order: Vec<WindowId> = wm.windows_by_z().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![second, first]);
    }

    #[test]
    fn test_close_is_two_step() {
        let mut wm = WindowManager::new();
        let id = wm.create(descriptor(), CONTAINER);

        assert!(wm.request_close(id));
        assert!(wm.get(id).unwrap().confirm_pending);

        assert!(wm.cancel_close(id));
        assert!(!wm.get(id).unwrap().confirm_pending);

        wm.remove(id);
        assert_eq!(wm.count(), 0);
        assert!(!wm.request_close(id));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut wm = WindowManager::new();
        let first = wm.create(descriptor(), CONTAINER);
        wm.remove(first);
        let second = wm.create(descriptor(), CONTAINER);
        assert_ne!(first, second);
    }
}
