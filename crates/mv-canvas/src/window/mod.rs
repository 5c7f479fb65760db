//! Window registry: records, lifecycle, and z-order

mod window;
mod manager;

pub use manager::WindowManager;
pub use window::{Window, WindowId};
