use super::Contact;
use crate::{
    core::{
        math::{Vector2, point_from_parametric, point_on_line_seg_eps},
        traits::Real,
    },
    primitives::Edge,
};

/// Returns true if the edges cross or touch, see [edge_intersect_poc].
#[inline]
pub fn edge_intersect<T>(a: Edge<T>, b: Edge<T>) -> bool
where
    T: Real,
{
    edge_intersect_eps(a, b, T::fuzzy_epsilon())
}

/// Same as [edge_intersect] using `epsilon` for fuzzy comparisons.
#[inline]
pub fn edge_intersect_eps<T>(a: Edge<T>, b: Edge<T>, epsilon: T) -> bool
where
    T: Real,
{
    edge_intersect_point(a, b, epsilon).is_some()
}

/// Finds where two edges cross.
///
/// Segments are solved in parametric form `P(t) = p0 + t * (p1 - p0)` and intersect when both
/// parameters are in `[0, 1]`. Parallel and collinear edges never intersect, even when they
/// overlap. A zero length edge is treated as a point, it intersects when it lies on the other
/// edge (or matches the other point).
///
/// The normal is perpendicular to `b`: its direction `(dx, dy)` rotated counter clockwise to
/// `(-dy, dx)` and normalized. When `b` is a point the perpendicular of `a` is used, `(1, 0)` if
/// both are points.
///
/// # Examples
///
/// ```
/// # use shape_collide::collide::*;
/// # use shape_collide::core::math::*;
/// # use shape_collide::primitives::*;
/// let a = Edge::new(0.0, 0.0, 10.0, 10.0);
/// let b = Edge::new(0.0, 10.0, 10.0, 0.0);
/// let contact = edge_intersect_poc(a, b).unwrap();
/// assert!(contact.point.fuzzy_eq(Vector2::new(5.0, 5.0)));
/// ```
#[inline]
pub fn edge_intersect_poc<T>(a: Edge<T>, b: Edge<T>) -> Option<Contact<T>>
where
    T: Real,
{
    edge_intersect_poc_eps(a, b, T::fuzzy_epsilon())
}

/// Same as [edge_intersect_poc] using `epsilon` for fuzzy comparisons.
pub fn edge_intersect_poc_eps<T>(a: Edge<T>, b: Edge<T>, epsilon: T) -> Option<Contact<T>>
where
    T: Real,
{
    let point = edge_intersect_point(a, b, epsilon)?;
    Some(Contact::new(point, edge_pair_normal(a, b)))
}

fn edge_pair_normal<T>(a: Edge<T>, b: Edge<T>) -> Vector2<T>
where
    T: Real,
{
    if !b.is_degenerate() {
        return b.direction().unit_perp();
    }
    a.direction().perp().normalize_or(Vector2::unit_x())
}

fn edge_intersect_point<T>(a: Edge<T>, b: Edge<T>, epsilon: T) -> Option<Vector2<T>>
where
    T: Real,
{
    // http://geomalgorithms.com/a05-_intersect-1.html
    let eps = epsilon;
    let (a0, a1) = (a.start(), a.end());
    let (b0, b1) = (b.start(), b.end());

    match (a.is_degenerate(), b.is_degenerate()) {
        (true, true) => {
            tracing::trace!("edge intersect between two zero length edges");
            a0.fuzzy_eq_eps(b0, eps).then_some(a0)
        }
        (true, false) => point_on_line_seg_eps(b0, b1, a0, eps).then_some(a0),
        (false, true) => point_on_line_seg_eps(a0, a1, b0, eps).then_some(b0),
        (false, false) => {
            let v = a1 - a0;
            let u = b1 - b0;
            let seg1_length = v.length();
            let seg2_length = u.length();
            let v_pdot_u = v.perp_dot(u);
            // sine of the angle between the edges, independent of their lengths
            if (v_pdot_u / (seg1_length * seg2_length)).fuzzy_eq_zero_eps(eps) {
                // parallel or collinear
                return None;
            }

            let w = b0 - a0;
            let seg1_t = w.perp_dot(u) / v_pdot_u;
            let seg2_t = w.perp_dot(v) / v_pdot_u;

            // scale parametric values by segment length so the epsilon applies at position scale
            if !(seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps)
                || !(seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps)
            {
                return None;
            }

            Some(point_from_parametric(a0, a1, seg1_t))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn crossing_edges() {
        let a = Edge::new(0.0, 0.0, 10.0, 10.0);
        let b = Edge::new(0.0, 10.0, 10.0, 0.0);
        assert!(edge_intersect(a, b));
        assert!(edge_intersect(b, a));
        let contact = edge_intersect_poc(a, b).unwrap();
        assert_fuzzy_eq!(contact.point, vec2(5.0, 5.0));
        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert_fuzzy_eq!(contact.normal, vec2(half_sqrt2, half_sqrt2));
    }

    #[test]
    fn normal_is_counter_clockwise_perp_of_second() {
        let a = Edge::new(5.0, -5.0, 5.0, 5.0);
        let b = Edge::new(0.0, 0.0, 10.0, 0.0);
        let contact = edge_intersect_poc(a, b).unwrap();
        assert_fuzzy_eq!(contact.point, vec2(5.0, 0.0));
        assert_fuzzy_eq!(contact.normal, vec2(0.0, 1.0));

        let reversed = Edge::new(10.0, 0.0, 0.0, 0.0);
        let contact = edge_intersect_poc(a, reversed).unwrap();
        assert_fuzzy_eq!(contact.normal, vec2(0.0, -1.0));
    }

    #[test]
    fn short_crossing_edges() {
        let a = Edge::new(0.0, 0.0, 1e-5, 1e-5);
        let b = Edge::new(0.0, 1e-5, 1e-5, 0.0);
        let contact = edge_intersect_poc(a, b).unwrap();
        assert_fuzzy_eq!(contact.point, vec2(5e-6, 5e-6), 1e-12);

        let a = Edge::new(0.0f32, 0.0, 0.002, 0.0);
        let b = Edge::new(0.001f32, -0.001, 0.001, 0.001);
        let contact = edge_intersect_poc(a, b).unwrap();
        assert_fuzzy_eq!(contact.point, vec2(0.001f32, 0.0), 1e-7);
        assert_fuzzy_eq!(contact.normal, vec2(-1.0f32, 0.0));

        // short but parallel
        let c = Edge::new(0.0f32, 0.001, 0.002, 0.001);
        assert!(!edge_intersect(a, c));
    }

    #[test]
    fn touching_at_endpoint() {
        let a = Edge::new(0.0, 0.0, 5.0, 0.0);
        let b = Edge::new(5.0, 0.0, 5.0, 5.0);
        let contact = edge_intersect_poc(a, b).unwrap();
        assert_fuzzy_eq!(contact.point, vec2(5.0, 0.0));
    }

    #[test]
    fn disjoint_edges() {
        let a = Edge::new(0.0, 0.0, 4.0, 4.0);
        let b = Edge::new(0.0, 10.0, 10.0, 0.0);
        assert!(!edge_intersect(a, b));
        assert!(edge_intersect_poc(a, b).is_none());
    }

    #[test]
    fn parallel_and_collinear_never_intersect() {
        let a = Edge::new(0.0, 0.0, 10.0, 0.0);
        assert!(!edge_intersect(a, Edge::new(0.0, 1.0, 10.0, 1.0)));
        // collinear and overlapping
        assert!(!edge_intersect(a, Edge::new(5.0, 0.0, 15.0, 0.0)));
    }

    #[test]
    fn zero_length_edges_act_as_points() {
        let a = Edge::new(0.0, 0.0, 10.0, 0.0);
        let on = Edge::new(4.0, 0.0, 4.0, 0.0);
        let off = Edge::new(4.0, 1.0, 4.0, 1.0);

        let contact = edge_intersect_poc(on, a).unwrap();
        assert_eq!(contact.point, vec2(4.0, 0.0));
        assert_fuzzy_eq!(contact.normal, vec2(0.0, 1.0));
        assert!(!edge_intersect(off, a));

        // point as second edge: normal falls back to the perpendicular of the first
        let contact = edge_intersect_poc(a, on).unwrap();
        assert_eq!(contact.point, vec2(4.0, 0.0));
        assert_fuzzy_eq!(contact.normal, vec2(0.0, 1.0));

        let contact = edge_intersect_poc(on, on).unwrap();
        assert_eq!(contact.normal, vec2(1.0, 0.0));
        assert!(!edge_intersect(on, off));
    }
}
