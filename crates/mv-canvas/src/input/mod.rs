//! Gesture input module
//!
//! Provides the single-session state machine for drag/resize gestures.

mod router;
mod session;

pub use router::InputRouter;
pub use session::{GestureKind, GestureSession};
