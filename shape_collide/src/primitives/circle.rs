use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Circle given by its center and radius. A zero radius circle is a point.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "serde_json::Value",
        bound(deserialize = "T: crate::core::traits::Real")
    )
)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Circle<T = f64> {
    pub x: T,
    pub y: T,
    pub r: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, r: T) -> Self {
        debug_assert!(r >= T::zero(), "circle radius must not be negative");
        Circle { x, y, r }
    }

    #[inline]
    pub fn from_center(center: Vector2<T>, r: T) -> Self {
        Circle::new(center.x, center.y, r)
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Translate the circle by `offset`.
    #[inline]
    pub fn move_by(&mut self, offset: Vector2<T>) {
        self.x = self.x + offset.x;
        self.y = self.y + offset.y;
    }

    /// Emit the circle fields as one `info` line.
    pub fn log_dump(&self) {
        tracing::info!("{self}");
    }
}

impl<T> fmt::Display for Circle<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle: ({}, {}) r {}", self.x, self.y, self.r)
    }
}
