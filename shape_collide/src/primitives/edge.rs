use super::{Circle, Rect};
use crate::core::{
    math::{Vector2, enclosing_radius, midpoint},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Line segment from `(x1, y1)` to `(x2, y2)`.
///
/// Direction does not matter for intersection tests but it does for normals: an edge used as
/// the second argument of [crate::collide::edge_intersect_poc] yields a normal rotated counter
/// clockwise from its direction.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "serde_json::Value",
        bound(deserialize = "T: crate::core::traits::Real")
    )
)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Edge<T = f64> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T> Edge<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Edge { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn from_points(start: Vector2<T>, end: Vector2<T>) -> Self {
        Edge::new(start.x, start.y, end.x, end.y)
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        Vector2::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        Vector2::new(self.x2, self.y2)
    }

    /// Direction vector `end - start`, not normalized.
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.end() - self.start()
    }

    #[inline]
    pub fn length(&self) -> T {
        self.direction().length()
    }

    /// Both endpoints are the same point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<T> {
        midpoint(self.start(), self.end())
    }

    /// Circle centered on the edge midpoint whose radius reaches both endpoints (rounded up where
    /// needed, as for [Rect::bounding_circle]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use shape_collide::primitives::*;
    /// let c = Edge::new(0.0, 0.0, 10.0, 0.0).bounding_circle();
    /// assert_eq!(c, Circle::new(5.0, 0.0, 5.0));
    /// ```
    pub fn bounding_circle(&self) -> Circle<T> {
        let center = self.midpoint();
        Circle::from_center(center, enclosing_radius(center, &[self.start(), self.end()]))
    }

    /// Smallest axis aligned rect holding both endpoints.
    #[inline]
    pub fn bounds(&self) -> Rect<T> {
        Rect::from_corners(self.start(), self.end())
    }

    /// Translate both endpoints by `offset`.
    #[inline]
    pub fn move_by(&mut self, offset: Vector2<T>) {
        self.x1 = self.x1 + offset.x;
        self.y1 = self.y1 + offset.y;
        self.x2 = self.x2 + offset.x;
        self.y2 = self.y2 + offset.y;
    }

    /// Emit the edge fields as one `info` line.
    pub fn log_dump(&self) {
        tracing::info!("{self}");
    }
}

impl<T> fmt::Display for Edge<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge: ({}, {}) -> ({}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}
