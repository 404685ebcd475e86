use crate::{
    core::{
        math::{Vector2, dist_squared},
        traits::Real,
    },
    primitives::{Circle, Rect},
    shape::Shape,
};

/// Inclusive test of `p` against the rect, points on the boundary are inside.
#[inline]
pub fn point_in_rect<T>(p: Vector2<T>, r: Rect<T>) -> bool
where
    T: Real,
{
    r.x <= p.x && p.x <= r.right() && r.y <= p.y && p.y <= r.bottom()
}

/// Inclusive test of `p` against the circle, points on the circumference are inside.
#[inline]
pub fn point_in_circle<T>(p: Vector2<T>, c: Circle<T>) -> bool
where
    T: Real,
{
    dist_squared(p, c.center()) <= c.r * c.r
}

/// Point containment for any shape. Edges have no area so this is always `false` for an edge,
/// even for a point lying on it.
#[inline]
pub fn point_in_shape<T>(p: Vector2<T>, s: Shape<T>) -> bool
where
    T: Real,
{
    match s {
        Shape::Rect(r) => point_in_rect(p, r),
        Shape::Circle(c) => point_in_circle(p, c),
        Shape::Edge(_) => false,
    }
}
