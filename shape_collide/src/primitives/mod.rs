//! Leaf geometric value types.
mod circle;
mod edge;
mod pixel_rect;
mod rect;

pub use circle::Circle;
pub use edge::Edge;
pub use pixel_rect::PixelRect;
pub use rect::Rect;
