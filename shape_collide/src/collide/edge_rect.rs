use super::{Contact, edge_intersect_poc, point_in_rect};
use crate::{
    core::{math::Vector2, traits::Real},
    primitives::{Edge, Rect},
};

/// Returns true if the edge crosses the rect boundary, see [edge_rect_intersection_poc].
#[inline]
pub fn edge_rect_intersection<T>(e: Edge<T>, r: Rect<T>) -> bool
where
    T: Real,
{
    edge_rect_intersection_poc(e, r).is_some()
}

/// Tests the edge against the rect sides in the order top, right, bottom, left and reports the
/// first side hit.
///
/// The first hit in that order wins, not the hit nearest the edge start. The normal comes from
/// [edge_intersect_poc] with the side as second edge; sides are wound so that normal points into
/// the rect (from the edge toward the rect).
///
/// An edge lying wholly inside the rect crosses no side and is not an intersection. Neither is an
/// edge lying along a side between its corners: collinear edges never intersect (see
/// [edge_intersect_poc]), only a crossing of one of the adjoining sides is reported. A zero length
/// edge is tested as a point with [point_in_rect] instead, contact normal `(1, 0)`.
///
/// # Examples
///
/// ```
/// # use shape_collide::collide::*;
/// # use shape_collide::core::math::*;
/// # use shape_collide::primitives::*;
/// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
/// // enters through the left side, leaves through the right side
/// let e = Edge::new(-5.0, 5.0, 15.0, 5.0);
/// let contact = edge_rect_intersection_poc(e, r).unwrap();
/// // right side is checked before left
/// assert!(contact.point.fuzzy_eq(Vector2::new(10.0, 5.0)));
/// assert!(contact.normal.fuzzy_eq(Vector2::new(-1.0, 0.0)));
/// ```
pub fn edge_rect_intersection_poc<T>(e: Edge<T>, r: Rect<T>) -> Option<Contact<T>>
where
    T: Real,
{
    if e.is_degenerate() {
        tracing::trace!("zero length edge tested against rect as a point");
        let p = e.start();
        return point_in_rect(p, r).then(|| Contact::new(p, Vector2::unit_x()));
    }

    r.sides()
        .into_iter()
        .find_map(|side| edge_intersect_poc(e, side))
}
