//! Overlap and intersection queries between rects, circles, edges and [Shape]s.
//!
//! Every pair has a plain `bool` form and a `_poc` (point of contact) form returning
//! `Option<Contact>`. Contact data only exists on a hit.
//!
//! Boundary conventions differ on purpose: point containment is inclusive (a point on a rect side
//! is inside) while [rect_overlap] is half open (rects sharing only a side do not overlap).
//!
//! [Shape]: crate::Shape
mod circle_circle;
mod circle_rect;
mod edge_circle;
mod edge_edge;
mod edge_rect;
mod point_in;
mod rect_rect;
mod shape_dispatch;

pub use circle_circle::{
    CircleCircleIntr, circle_intersect_circle, circle_overlap, circle_overlap_poc,
};
pub use circle_rect::{circle_rect_overlap, circle_rect_overlap_poc};
pub use edge_circle::{edge_circle_intersection, edge_circle_intersection_poc};
pub use edge_edge::{edge_intersect, edge_intersect_eps, edge_intersect_poc, edge_intersect_poc_eps};
pub use edge_rect::{edge_rect_intersection, edge_rect_intersection_poc};
pub use point_in::{point_in_circle, point_in_rect, point_in_shape};
pub use rect_rect::{rect_overlap, rect_overlap_poc};
pub use shape_dispatch::{
    edge_intersect_shape, edge_intersect_shape_poc, shape_normal_for_circle,
    shape_normal_for_shape, shape_overlap, shape_overlap_poc,
};

use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point of contact and collision normal produced by the `_poc` queries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact<T = f64> {
    /// Where the shapes touch or cross.
    pub point: Vector2<T>,
    /// Unit length separation direction, see each query for its orientation.
    pub normal: Vector2<T>,
}

impl<T> Contact<T>
where
    T: Real,
{
    #[inline]
    pub fn new(point: Vector2<T>, normal: Vector2<T>) -> Self {
        Contact { point, normal }
    }

    /// Same contact point with the normal reversed.
    #[inline]
    pub fn flipped(self) -> Self {
        Contact::new(self.point, -self.normal)
    }
}

/// Direction sign along one axis, zero counts as positive.
#[inline]
fn axis_sign<T>(v: T) -> T
where
    T: Real,
{
    if v < T::zero() { -T::one() } else { T::one() }
}
