use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use shape_collide::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) * T::half(), (p0.y + p1.y) * T::half())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// A zero length segment (`p0 == p1`) returns `p0`.
///
/// # Examples
///
/// ```
/// # use shape_collide::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(10.0, 0.0);
/// assert_eq!(line_seg_closest_point(p0, p1, Vector2::new(4.0, 3.0)), Vector2::new(4.0, 0.0));
/// assert_eq!(line_seg_closest_point(p0, p1, Vector2::new(-2.0, 1.0)), p0);
/// assert_eq!(line_seg_closest_point(p0, p1, Vector2::new(12.0, 1.0)), p1);
/// ```
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Returns true if `point` lies on the segment `p0` to `p1` within `epsilon` distance.
#[inline]
pub fn point_on_line_seg_eps<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> bool
where
    T: Real,
{
    let closest = line_seg_closest_point(p0, p1, point);
    dist_squared(closest, point).sqrt().fuzzy_eq_zero_eps(epsilon)
}

/// Smallest radius `r` such that every point in `points` satisfies
/// `dist_squared(center, p) <= r * r` exactly, as evaluated in `T`.
///
/// The square root of the largest squared distance can round below it, in that case the radius
/// is stepped up until the inclusive test holds.
pub fn enclosing_radius<T>(center: Vector2<T>, points: &[Vector2<T>]) -> T
where
    T: Real,
{
    let max_dist_sq = points
        .iter()
        .map(|&p| dist_squared(center, p))
        .fold(T::zero(), |acc, d| if d > acc { d } else { acc });

    let mut r = max_dist_sq.sqrt();
    while r * r < max_dist_sq {
        let step = num_traits::real::Real::max(
            r * <T as num_traits::real::Real>::epsilon(),
            <T as num_traits::real::Real>::min_positive_value(),
        );
        r = r + step;
    }
    r
}
