//! Vector type and small point/segment helpers used by the collision queries.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{Vector2, vec2};
