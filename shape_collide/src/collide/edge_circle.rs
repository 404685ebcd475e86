use super::Contact;
use crate::{
    core::{
        math::{Vector2, line_seg_closest_point},
        traits::Real,
    },
    primitives::{Circle, Edge},
};

/// Returns true if any point of the edge is within the circle (inclusive).
#[inline]
pub fn edge_circle_intersection<T>(e: Edge<T>, c: Circle<T>) -> bool
where
    T: Real,
{
    edge_circle_intersection_poc(e, c).is_some()
}

/// [edge_circle_intersection] with contact data.
///
/// The contact point is the point of the edge closest to the circle center and the normal points
/// from it toward the center (from the edge toward the circle). When the center lies on the edge
/// the edge perpendicular is used, `(1, 0)` for a zero length edge. A zero length edge is a point
/// distance test.
pub fn edge_circle_intersection_poc<T>(e: Edge<T>, c: Circle<T>) -> Option<Contact<T>>
where
    T: Real,
{
    let center = c.center();
    let closest = line_seg_closest_point(e.start(), e.end(), center);
    let offset = center - closest;
    if offset.length_squared() > c.r * c.r {
        return None;
    }

    let edge_perp = e.direction().perp().normalize_or(Vector2::unit_x());
    Some(Contact::new(closest, offset.normalize_or(edge_perp)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn closest_point_contact() {
        let e = Edge::new(0.0, 0.0, 10.0, 0.0);
        let c = Circle::new(4.0, 3.0, 3.0);
        let contact = edge_circle_intersection_poc(e, c).unwrap();
        assert_eq!(contact.point, vec2(4.0, 0.0));
        assert_eq!(contact.normal, vec2(0.0, 1.0));
        assert!(!edge_circle_intersection(e, Circle::new(4.0, 3.0, 2.9)));
    }

    #[test]
    fn endpoint_is_closest() {
        let e = Edge::new(0.0, 0.0, 10.0, 0.0);
        let c = Circle::new(13.0, 4.0, 5.0);
        let contact = edge_circle_intersection_poc(e, c).unwrap();
        assert_eq!(contact.point, vec2(10.0, 0.0));
        assert_fuzzy_eq!(contact.normal, vec2(0.6, 0.8));
    }

    #[test]
    fn edge_inside_circle_intersects() {
        let e = Edge::new(-1.0, 0.0, 1.0, 0.0);
        assert!(edge_circle_intersection(e, Circle::new(0.0, 0.5, 10.0)));
    }

    #[test]
    fn center_on_edge_uses_edge_perp() {
        let e = Edge::new(0.0, 0.0, 0.0, 10.0);
        let contact = edge_circle_intersection_poc(e, Circle::new(0.0, 5.0, 1.0)).unwrap();
        assert_eq!(contact.point, vec2(0.0, 5.0));
        assert_fuzzy_eq!(contact.normal, vec2(-1.0, 0.0));
    }

    #[test]
    fn zero_length_edge_is_point_distance() {
        let e = Edge::new(2.0, 2.0, 2.0, 2.0);
        let contact = edge_circle_intersection_poc(e, Circle::new(2.0, 4.0, 2.0)).unwrap();
        assert_eq!(contact.point, vec2(2.0, 2.0));
        assert_eq!(contact.normal, vec2(0.0, 1.0));
        assert!(!edge_circle_intersection(e, Circle::new(2.0, 4.5, 2.0)));

        let contact = edge_circle_intersection_poc(e, Circle::new(2.0, 2.0, 0.0)).unwrap();
        assert_eq!(contact.normal, vec2(1.0, 0.0));
    }
}
