//! WASM exports for the canvas engine
//!
//! This module provides wasm-bindgen exports for the CanvasEngine,
//! allowing the browser host to drive gestures and window lifecycle
//! directly.

use wasm_bindgen::prelude::*;

use mv_embed::extract_fragment;

use crate::engine::CanvasEngine;
use crate::geometry::Corner;
use crate::math::Vec2;
use crate::window::Window;

// Bind Date.now for timestamps
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Canvas controller for WASM - wraps CanvasEngine with a JS-friendly API
#[wasm_bindgen]
pub struct CanvasController {
    engine: CanvasEngine,
}

#[wasm_bindgen]
impl CanvasController {
    /// Create a new canvas controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: CanvasEngine::new(),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize with the container's measured bounds
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Update the container bounds after a viewport resize
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize_container(width, height, date_now());
    }

    // =========================================================================
    // Embed resolution and window lifecycle
    // =========================================================================

    /// Resolve pasted text (URL or embed markup) and create a window
    ///
    /// Returns JSON: `{"windowId": n, "styles": [...]}` on success,
    /// `{"error": "..."}` on a provider rejection.
    #[wasm_bindgen]
    pub fn add_embed(&mut self, text: &str) -> String {
        match extract_fragment(text) {
            Ok(outcome) => {
                let id = self.engine.create_window(outcome.descriptor, date_now());
                serde_json::to_string(&serde_json::json!({
                    "windowId": id,
                    "styles": outcome.styles,
                }))
                .unwrap_or_else(|_| "{}".to_string())
            }
            Err(err) => serde_json::to_string(&serde_json::json!({
                "error": err.message(),
            }))
            .unwrap_or_else(|_| "{}".to_string()),
        }
    }

    /// The verbatim text to put back on the clipboard for a window
    #[wasm_bindgen]
    pub fn copy_source(&self, id: u64) -> Option<String> {
        self.engine
            .windows
            .get(id)
            .map(|w| w.descriptor.original_input.clone())
    }

    /// Raise a window above all others
    #[wasm_bindgen]
    pub fn raise_window(&mut self, id: u64) -> bool {
        self.engine.raise_window(id).is_ok()
    }

    /// Request deletion (shows the confirmation overlay)
    #[wasm_bindgen]
    pub fn request_close(&mut self, id: u64) -> bool {
        self.engine.request_close(id).is_ok()
    }

    /// Confirm a pending deletion
    #[wasm_bindgen]
    pub fn confirm_close(&mut self, id: u64) -> bool {
        self.engine.confirm_close(id).is_ok()
    }

    /// Cancel a pending deletion
    #[wasm_bindgen]
    pub fn cancel_close(&mut self, id: u64) -> bool {
        self.engine.cancel_close(id).is_ok()
    }

    /// Get all windows as JSON (back to front)
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let windows: Vec<serde_json::Value> = self
            .engine
            .windows
            .windows_by_z()
            .into_iter()
            .map(window_json)
            .collect();
        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start a window move gesture
    #[wasm_bindgen]
    pub fn start_window_drag(&mut self, id: u64, x: f32, y: f32) -> bool {
        self.engine.begin_move(id, Vec2::new(x, y)).is_ok()
    }

    /// Start a window resize gesture from a corner handle (`"nw"`..`"se"`)
    #[wasm_bindgen]
    pub fn start_window_resize(&mut self, id: u64, corner: &str, x: f32, y: f32) -> bool {
        match Corner::from_name(corner) {
            Some(corner) => self.engine.begin_resize(id, corner, Vec2::new(x, y)).is_ok(),
            None => false,
        }
    }

    /// Handle pointer move; returns whether a gesture consumed it
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.update_pointer(Vec2::new(x, y))
    }

    /// Handle pointer up, ending the active gesture
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> Option<u64> {
        self.engine.end_gesture(date_now())
    }

    // =========================================================================
    // Unified Frame Tick
    // =========================================================================

    /// Unified frame tick - commits staged geometry, advances timers,
    /// and returns the frame data the host must apply
    #[wasm_bindgen]
    pub fn tick_frame(&mut self) -> String {
        let committed = self.engine.commit_frame();
        let updates = self.engine.tick(date_now());

        let source_updates: Vec<serde_json::Value> = updates
            .iter()
            .map(|u| {
                serde_json::json!({
                    "windowId": u.window_id,
                    "source": u.source,
                })
            })
            .collect();

        serde_json::to_string(&serde_json::json!({
            "committed": committed.map(|(id, rect)| {
                serde_json::json!({
                    "windowId": id,
                    "rect": {
                        "left": rect.x,
                        "top": rect.y,
                        "width": rect.width,
                        "height": rect.height
                    }
                })
            }),
            "sourceUpdates": source_updates,
            "gestureActive": self.engine.input.is_active(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}

/// Build JSON for a single window
fn window_json(window: &Window) -> serde_json::Value {
    serde_json::json!({
        "id": window.id,
        "provider": window.descriptor.provider,
        "sourceKind": window.descriptor.kind,
        "source": window.descriptor.source,
        "scrollable": window.descriptor.scrollable,
        "rect": {
            "left": window.rect.x,
            "top": window.rect.y,
            "width": window.rect.width,
            "height": window.rect.height
        },
        "zOrder": window.z_order,
        "confirmPending": window.confirm_pending
    })
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}
