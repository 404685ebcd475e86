use super::{
    Contact, circle_overlap, circle_overlap_poc, circle_rect_overlap, circle_rect_overlap_poc,
    edge_circle_intersection, edge_circle_intersection_poc, edge_intersect, edge_intersect_poc,
    edge_rect_intersection, edge_rect_intersection_poc, point_in_circle, point_in_rect,
    rect_overlap, rect_overlap_poc,
};
use crate::{
    core::{
        math::{Vector2, line_seg_closest_point},
        traits::Real,
    },
    primitives::{Circle, Edge},
    shape::Shape,
};

/// Returns true if the two shapes overlap. Symmetric in its arguments.
pub fn shape_overlap<T>(a: Shape<T>, b: Shape<T>) -> bool
where
    T: Real,
{
    match (a, b) {
        (Shape::Rect(a), Shape::Rect(b)) => rect_overlap(a, b),
        (Shape::Circle(a), Shape::Circle(b)) => circle_overlap(a, b),
        (Shape::Edge(a), Shape::Edge(b)) => edge_intersect(a, b),
        (Shape::Circle(c), Shape::Rect(r)) | (Shape::Rect(r), Shape::Circle(c)) => {
            circle_rect_overlap(c, r)
        }
        (Shape::Edge(e), Shape::Rect(r)) | (Shape::Rect(r), Shape::Edge(e)) => {
            edge_rect_intersection(e, r)
        }
        (Shape::Edge(e), Shape::Circle(c)) | (Shape::Circle(c), Shape::Edge(e)) => {
            edge_circle_intersection(e, c)
        }
    }
}

/// [shape_overlap] with contact data.
///
/// Mixed pairs are forwarded to their pairwise query and the normal is reversed where needed so
/// it always points from `a` toward `b`. Two edges keep the [edge_intersect_poc] convention
/// (perpendicular to `b`).
pub fn shape_overlap_poc<T>(a: Shape<T>, b: Shape<T>) -> Option<Contact<T>>
where
    T: Real,
{
    match (a, b) {
        (Shape::Rect(a), Shape::Rect(b)) => rect_overlap_poc(a, b),
        (Shape::Circle(a), Shape::Circle(b)) => circle_overlap_poc(a, b),
        (Shape::Edge(a), Shape::Edge(b)) => edge_intersect_poc(a, b),
        // pairwise normal points from the rect toward the circle
        (Shape::Rect(r), Shape::Circle(c)) => circle_rect_overlap_poc(c, r),
        (Shape::Circle(c), Shape::Rect(r)) => circle_rect_overlap_poc(c, r).map(Contact::flipped),
        // pairwise normal points from the edge toward the other shape
        (Shape::Edge(e), Shape::Rect(r)) => edge_rect_intersection_poc(e, r),
        (Shape::Rect(r), Shape::Edge(e)) => edge_rect_intersection_poc(e, r).map(Contact::flipped),
        (Shape::Edge(e), Shape::Circle(c)) => edge_circle_intersection_poc(e, c),
        (Shape::Circle(c), Shape::Edge(e)) => {
            edge_circle_intersection_poc(e, c).map(Contact::flipped)
        }
    }
}

/// Returns true if the edge intersects the shape.
#[inline]
pub fn edge_intersect_shape<T>(e: Edge<T>, s: Shape<T>) -> bool
where
    T: Real,
{
    match s {
        Shape::Rect(r) => edge_rect_intersection(e, r),
        Shape::Circle(c) => edge_circle_intersection(e, c),
        Shape::Edge(other) => edge_intersect(e, other),
    }
}

/// [edge_intersect_shape] with the contact data of the matching pairwise query.
#[inline]
pub fn edge_intersect_shape_poc<T>(e: Edge<T>, s: Shape<T>) -> Option<Contact<T>>
where
    T: Real,
{
    match s {
        Shape::Rect(r) => edge_rect_intersection_poc(e, r),
        Shape::Circle(c) => edge_circle_intersection_poc(e, c),
        Shape::Edge(other) => edge_intersect_poc(e, other),
    }
}

/// Unit vector from the closest point of `s` toward the reference point of `s2` (see
/// [Shape::reference_point]).
///
/// Returns the zero vector when that reference point is inside `s`, or lies exactly on `s` when
/// `s` is an edge. Useful to orient a response without computing a full contact.
///
/// # Examples
///
/// ```
/// # use shape_collide::*;
/// # use shape_collide::collide::*;
/// # use shape_collide::core::math::*;
/// let wall = Shape::rect(0.0, 0.0, 10.0, 10.0);
/// let ball = Shape::circle(15.0, 5.0, 1.0);
/// assert_eq!(shape_normal_for_shape(wall, ball), Vector2::new(1.0, 0.0));
/// assert_eq!(shape_normal_for_shape(wall, Shape::circle(5.0, 5.0, 1.0)), Vector2::zero());
/// ```
pub fn shape_normal_for_shape<T>(s: Shape<T>, s2: Shape<T>) -> Vector2<T>
where
    T: Real,
{
    let target = s2.reference_point();
    match s {
        Shape::Rect(r) => {
            if point_in_rect(target, r) {
                return Vector2::zero();
            }
            (target - r.closest_point(target)).normalize_or_zero()
        }
        Shape::Circle(c) => {
            if point_in_circle(target, c) {
                return Vector2::zero();
            }
            (target - c.center()).normalize_or_zero()
        }
        Shape::Edge(e) => {
            (target - line_seg_closest_point(e.start(), e.end(), target)).normalize_or_zero()
        }
    }
}

/// Same as [shape_normal_for_shape] with a circle as the reference shape.
#[inline]
pub fn shape_normal_for_circle<T>(s: Shape<T>, c: Circle<T>) -> Vector2<T>
where
    T: Real,
{
    shape_normal_for_shape(s, Shape::Circle(c))
}
