use super::Contact;
use crate::{
    core::{
        math::{Vector2, dist_squared},
        traits::Real,
    },
    primitives::Circle,
};

/// Inclusive circle overlap, circles touching at a single point overlap.
#[inline]
pub fn circle_overlap<T>(a: Circle<T>, b: Circle<T>) -> bool
where
    T: Real,
{
    let radii = a.r + b.r;
    dist_squared(a.center(), b.center()) <= radii * radii
}

/// [circle_overlap] with contact data.
///
/// The contact point is on the boundary of `a` in the direction of `b`'s center, the normal is
/// that direction. Coincident centers have no direction, `(1, 0)` is used.
pub fn circle_overlap_poc<T>(a: Circle<T>, b: Circle<T>) -> Option<Contact<T>>
where
    T: Real,
{
    if !circle_overlap(a, b) {
        return None;
    }

    let offset = b.center() - a.center();
    if offset.is_zero() {
        tracing::trace!("coincident circle centers, using +x contact normal");
    }
    let dir = offset.normalize_or(Vector2::unit_x());
    Some(Contact::new(a.center() + dir.scale(a.r), dir))
}

/// Holds the result of finding the intersects between two circle boundaries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CircleCircleIntr<T>
where
    T: Real,
{
    /// Boundaries do not meet: too far apart or one strictly inside the other.
    NoIntersect,
    /// Boundaries touch at exactly one point, from outside or from inside.
    TangentIntersect {
        /// Holds the tangent point.
        point: Vector2<T>,
    },
    /// Boundaries cross at two distinct points.
    TwoIntersects {
        /// Holds the first intersect point.
        point1: Vector2<T>,
        /// Holds the second intersect point.
        point2: Vector2<T>,
    },
    /// Same center and radius, every boundary point is shared.
    Identical,
}

impl<T> CircleCircleIntr<T>
where
    T: Real,
{
    /// Number of intersect points: `-1` for identical circles, otherwise 0, 1 or 2.
    pub fn count(&self) -> i32 {
        match self {
            CircleCircleIntr::Identical => -1,
            CircleCircleIntr::NoIntersect => 0,
            CircleCircleIntr::TangentIntersect { .. } => 1,
            CircleCircleIntr::TwoIntersects { .. } => 2,
        }
    }

    /// Both intersect points, a tangent repeats its single point.
    pub fn points(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        match *self {
            CircleCircleIntr::TangentIntersect { point } => Some((point, point)),
            CircleCircleIntr::TwoIntersects { point1, point2 } => Some((point1, point2)),
            CircleCircleIntr::NoIntersect | CircleCircleIntr::Identical => None,
        }
    }
}

/// Finds the points where the boundaries of two circles meet.
///
/// Classification is exact, squared center distance is compared against the squared sum and
/// squared difference of the radii with no tolerance, so centers exactly `a.r + b.r` apart are
/// tangent and anything farther does not intersect.
///
/// # Examples
///
/// ```
/// # use shape_collide::collide::*;
/// # use shape_collide::core::math::*;
/// # use shape_collide::primitives::*;
/// let a = Circle::new(0.0, 0.0, 2.0);
/// let b = Circle::new(5.0, 0.0, 3.0);
/// let intr = circle_intersect_circle(a, b);
/// assert_eq!(intr.count(), 1);
/// assert_eq!(intr, CircleCircleIntr::TangentIntersect { point: Vector2::new(2.0, 0.0) });
/// assert_eq!(circle_intersect_circle(a, a), CircleCircleIntr::Identical);
/// ```
pub fn circle_intersect_circle<T>(a: Circle<T>, b: Circle<T>) -> CircleCircleIntr<T>
where
    T: Real,
{
    // Reference algorithm: http://paulbourke.net/geometry/circlesphere/
    use CircleCircleIntr::*;

    let c1 = a.center();
    let c2 = b.center();

    if c1 == c2 {
        if a.r == b.r {
            return Identical;
        }
        // concentric with different radii
        return NoIntersect;
    }

    let cv = c2 - c1;
    let d2 = cv.length_squared();
    let radii_sum = a.r + b.r;
    let radii_diff = (a.r - b.r).abs();
    let sum_sq = radii_sum * radii_sum;
    let diff_sq = radii_diff * radii_diff;

    if d2 > sum_sq || d2 < diff_sq {
        return NoIntersect;
    }

    // d > 0 since the centers differ
    let d = d2.sqrt();
    let rad1_sq = a.r * a.r;
    // signed distance from c1 along cv to the chord midpoint
    let along = (rad1_sq - b.r * b.r + d2) / (T::two() * d);
    let chord_mid = c1 + cv.scale(along / d);

    if d2 == sum_sq || d2 == diff_sq {
        return TangentIntersect { point: chord_mid };
    }

    let h_sq = rad1_sq - along * along;
    if h_sq <= T::zero() {
        // rounding pushed a near tangent case past the chord
        return TangentIntersect { point: chord_mid };
    }

    let h_over_d = h_sq.sqrt() / d;
    let x_term = h_over_d * cv.y;
    let y_term = h_over_d * cv.x;

    TwoIntersects {
        point1: Vector2::new(chord_mid.x + x_term, chord_mid.y - y_term),
        point2: Vector2::new(chord_mid.x - x_term, chord_mid.y + y_term),
    }
}
