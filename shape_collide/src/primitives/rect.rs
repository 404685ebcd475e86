use super::{Circle, Edge};
use crate::core::{
    math::{Vector2, enclosing_radius, midpoint, min_max},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis aligned rectangle given by its top left corner and size.
///
/// Coordinates are screen oriented: `y` is the top side and `y + h` the bottom side. Width and
/// height must not be negative, zero is allowed (the rect degenerates to a segment or point).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "serde_json::Value",
        bound(deserialize = "T: crate::core::traits::Real")
    )
)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect<T = f64> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T> Rect<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, w: T, h: T) -> Self {
        debug_assert!(
            w >= T::zero() && h >= T::zero(),
            "rect width and height must not be negative"
        );
        Rect { x, y, w, h }
    }

    /// Create a rect from `[x, y, w, h]`.
    #[inline]
    pub fn from_array(v: [T; 4]) -> Self {
        Rect::new(v[0], v[1], v[2], v[3])
    }

    /// Rect fields as `[x, y, w, h]`.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.w, self.h]
    }

    /// Smallest rect holding both points.
    pub fn from_corners(p0: Vector2<T>, p1: Vector2<T>) -> Self {
        let (min_x, max_x) = min_max(p0.x, p1.x);
        let (min_y, max_y) = min_max(p0.y, p1.y);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[inline]
    pub fn right(&self) -> T {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.h
    }

    #[inline]
    pub fn top_left(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn bottom_right(&self) -> Vector2<T> {
        Vector2::new(self.right(), self.bottom())
    }

    /// Center point of the rect.
    #[inline]
    pub fn center(&self) -> Vector2<T> {
        midpoint(self.top_left(), self.bottom_right())
    }

    /// Point of the rect (boundary or interior) nearest to `point`, `point` itself when it is
    /// inside.
    #[inline]
    pub fn closest_point(&self, point: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            point.x.clamp_to(self.x, self.right()),
            point.y.clamp_to(self.y, self.bottom()),
        )
    }

    /// Corners in clockwise screen order starting at the top left.
    pub fn corners(&self) -> [Vector2<T>; 4] {
        [
            Vector2::new(self.x, self.y),
            Vector2::new(self.right(), self.y),
            Vector2::new(self.right(), self.bottom()),
            Vector2::new(self.x, self.bottom()),
        ]
    }

    /// Boundary edges in the order top, right, bottom, left.
    ///
    /// Each side runs clockwise on screen, so the counter clockwise perpendicular of every side
    /// (see [Vector2::perp]) points into the rect.
    pub fn sides(&self) -> [Edge<T>; 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            Edge::from_points(tl, tr),
            Edge::from_points(tr, br),
            Edge::from_points(br, bl),
            Edge::from_points(bl, tl),
        ]
    }

    /// Circle centered on the rect whose radius reaches the corners (half the diagonal).
    ///
    /// The radius is rounded up where needed so every corner passes the inclusive
    /// [crate::collide::point_in_circle] test.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shape_collide::primitives::*;
    /// let c = Rect::new(0.0, 0.0, 6.0, 8.0).bounding_circle();
    /// assert_eq!(c, Circle::new(3.0, 4.0, 5.0));
    /// ```
    pub fn bounding_circle(&self) -> Circle<T> {
        let center = self.center();
        let r = enclosing_radius(center, &self.corners());
        Circle::from_center(center, r)
    }

    /// Translate the rect by `offset`.
    #[inline]
    pub fn move_by(&mut self, offset: Vector2<T>) {
        self.x = self.x + offset.x;
        self.y = self.y + offset.y;
    }

    /// Emit the rect fields as one `info` line.
    pub fn log_dump(&self) {
        tracing::info!("{self}");
    }
}

impl<T> fmt::Display for Rect<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect: ({}, {}, {}, {})", self.x, self.y, self.w, self.h)
    }
}

impl<T> From<[T; 4]> for Rect<T>
where
    T: Real,
{
    fn from(v: [T; 4]) -> Self {
        Rect::from_array(v)
    }
}
