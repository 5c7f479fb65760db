//! Math primitives for canvas geometry

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
