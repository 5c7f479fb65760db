//! Canvas engine for the MultiView workspace
//!
//! Owns the geometry math, the window registry, and the single-session
//! gesture state machine that turn resolved embed descriptors into
//! draggable, resizable windows on a shared canvas. The [`CanvasEngine`]
//! is the main entry point; the optional `wasm` feature exposes a
//! wasm-bindgen controller for the browser host.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;
pub mod window;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use engine::{CanvasEngine, SourceUpdate};
pub use error::CanvasError;
pub use geometry::Corner;
pub use math::{Rect, Size, Vec2};
pub use window::{Window, WindowId, WindowManager};
