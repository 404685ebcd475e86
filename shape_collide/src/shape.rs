use crate::{
    core::{math::Vector2, traits::Real},
    primitives::{Circle, Edge, PixelRect, Rect},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [Shape].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Circle,
    Edge,
}

impl ShapeKind {
    /// Lowercase name, matches the `type` tag used by JSON shape definitions.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Edge => "edge",
        }
    }

    /// Inverse of [ShapeKind::name].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rect" => Some(ShapeKind::Rect),
            "circle" => Some(ShapeKind::Circle),
            "edge" => Some(ShapeKind::Edge),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any one of the supported primitives.
///
/// All collision queries between mixed primitives go through this type, see
/// [crate::collide::shape_overlap] and [crate::collide::shape_overlap_poc].
///
/// # Examples
///
/// ```
/// # use shape_collide::*;
/// # use shape_collide::collide::*;
/// let a = Shape::rect(0.0, 0.0, 10.0, 10.0);
/// let b = Shape::circle(12.0, 5.0, 3.0);
/// assert!(shape_overlap(a, b));
/// assert_eq!(b.kind(), ShapeKind::Circle);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        tag = "type",
        rename_all = "lowercase",
        try_from = "serde_json::Value",
        bound(deserialize = "T: crate::core::traits::Real")
    )
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape<T = f64> {
    Rect(Rect<T>),
    Circle(Circle<T>),
    Edge(Edge<T>),
}

impl<T> Shape<T>
where
    T: Real,
{
    #[inline]
    pub fn rect(x: T, y: T, w: T, h: T) -> Self {
        Shape::Rect(Rect::new(x, y, w, h))
    }

    #[inline]
    pub fn circle(x: T, y: T, r: T) -> Self {
        Shape::Circle(Circle::new(x, y, r))
    }

    #[inline]
    pub fn edge(x1: T, y1: T, x2: T, y2: T) -> Self {
        Shape::Edge(Edge::new(x1, y1, x2, y2))
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Edge(_) => ShapeKind::Edge,
        }
    }

    /// Minimal axis aligned rect containing the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shape_collide::*;
    /// assert_eq!(Shape::circle(5.0, 5.0, 2.0).bounds(), Rect::new(3.0, 3.0, 4.0, 4.0));
    /// assert_eq!(Shape::edge(4.0, 0.0, 1.0, 2.0).bounds(), Rect::new(1.0, 0.0, 3.0, 2.0));
    /// ```
    pub fn bounds(&self) -> Rect<T> {
        match *self {
            Shape::Rect(r) => r,
            Shape::Circle(c) => Rect::new(c.x - c.r, c.y - c.r, c.r * T::two(), c.r * T::two()),
            Shape::Edge(e) => e.bounds(),
        }
    }

    /// The circle itself, or the bounding circle of a rect or edge.
    pub fn to_circle(&self) -> Circle<T> {
        match *self {
            Shape::Rect(r) => r.bounding_circle(),
            Shape::Circle(c) => c,
            Shape::Edge(e) => e.bounding_circle(),
        }
    }

    /// Point used to orient normals toward this shape: rect center, circle center or edge
    /// midpoint.
    pub fn reference_point(&self) -> Vector2<T> {
        match self {
            Shape::Rect(r) => r.center(),
            Shape::Circle(c) => c.center(),
            Shape::Edge(e) => e.midpoint(),
        }
    }

    /// Translate the shape by `offset`.
    pub fn move_by(&mut self, offset: Vector2<T>) {
        match self {
            Shape::Rect(r) => r.move_by(offset),
            Shape::Circle(c) => c.move_by(offset),
            Shape::Edge(e) => e.move_by(offset),
        }
    }

    /// Emit the shape as one `info` line.
    pub fn log_dump(&self) {
        tracing::info!("{self}");
    }
}

impl<T> fmt::Display for Shape<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rect(r) => write!(f, "Shape {r}"),
            Shape::Circle(c) => write!(f, "Shape {c}"),
            Shape::Edge(e) => write!(f, "Shape {e}"),
        }
    }
}

impl<T> From<Rect<T>> for Shape<T> {
    #[inline]
    fn from(r: Rect<T>) -> Self {
        Shape::Rect(r)
    }
}

impl<T> From<Circle<T>> for Shape<T> {
    #[inline]
    fn from(c: Circle<T>) -> Self {
        Shape::Circle(c)
    }
}

impl<T> From<Edge<T>> for Shape<T> {
    #[inline]
    fn from(e: Edge<T>) -> Self {
        Shape::Edge(e)
    }
}

impl<T> From<PixelRect> for Shape<T>
where
    Rect<T>: From<PixelRect>,
{
    #[inline]
    fn from(r: PixelRect) -> Self {
        Shape::Rect(r.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn kind_names_round_trip() {
        for kind in [ShapeKind::Rect, ShapeKind::Circle, ShapeKind::Edge] {
            assert_eq!(ShapeKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ShapeKind::from_name("polygon"), None);
    }

    #[test]
    fn compare_and_copy() {
        let a = Shape::circle(1.0, 2.0, 3.0);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, Shape::circle(1.0, 2.0, 3.5));
        // same numbers, different kind
        assert_ne!(Shape::rect(0.0, 0.0, 1.0, 1.0), Shape::edge(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn move_each_kind() {
        let offset = vec2(1.0, -2.0);
        let mut shapes = [
            Shape::rect(0.0, 0.0, 2.0, 2.0),
            Shape::circle(0.0, 0.0, 1.0),
            Shape::edge(0.0, 0.0, 3.0, 3.0),
        ];
        for s in shapes.iter_mut() {
            s.move_by(offset);
        }
        assert_eq!(shapes[0], Shape::rect(1.0, -2.0, 2.0, 2.0));
        assert_eq!(shapes[1], Shape::circle(1.0, -2.0, 1.0));
        assert_eq!(shapes[2], Shape::edge(1.0, -2.0, 4.0, 1.0));
    }

    #[test]
    fn to_circle_uses_bounding_circle() {
        assert_eq!(
            Shape::rect(0.0, 0.0, 6.0, 8.0).to_circle(),
            Circle::new(3.0, 4.0, 5.0)
        );
        assert_eq!(
            Shape::circle(1.0, 1.0, 2.0).to_circle(),
            Circle::new(1.0, 1.0, 2.0)
        );
    }

    #[test]
    fn from_pixel_rect() {
        let s: Shape<f32> = PixelRect::new(1, 2, 3, 4).into();
        assert_eq!(s, Shape::rect(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn display() {
        assert_eq!(
            Shape::circle(1.0, 2.0, 0.5).to_string(),
            "Shape Circle: (1, 2) r 0.5"
        );
    }
}
