//! 2D rect, circle and edge primitives with overlap, intersection and contact queries.
//!
//! Primitives live in [primitives], the [Shape] enum unifies them, and [collide] has every
//! pairwise query plus the shape level dispatch. All types are small `Copy` values generic over
//! the coordinate type (`f64` by default, `f32` also supported).
//!
//! ```
//! use shape_collide::{Shape, collide::*};
//!
//! let floor = Shape::rect(0.0, 100.0, 640.0, 20.0);
//! let ball = Shape::circle(320.0, 97.0, 4.0);
//! let contact = shape_overlap_poc(ball, floor).unwrap();
//! assert_eq!(contact.point.y, 100.0);
//! assert_eq!(contact.normal.y, 1.0);
//! ```

#[macro_use]
mod macros;

pub mod collide;
#[cfg(feature = "serde")]
mod config;
pub mod core;
mod error;
pub mod primitives;
mod shape;
mod shape_index;

pub use crate::collide::Contact;
pub use crate::error::*;
pub use crate::primitives::{Circle, Edge, PixelRect, Rect};
pub use crate::shape::{Shape, ShapeKind};
pub use crate::shape_index::ShapeIndex;
