use super::Contact;
use crate::{
    core::{
        math::{Vector2, dist_squared},
        traits::Real,
    },
    primitives::{Circle, Rect},
};

/// Inclusive circle/rect overlap, tested against the point of the rect nearest the circle center.
///
/// # Examples
///
/// ```
/// # use shape_collide::collide::*;
/// # use shape_collide::primitives::*;
/// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(!circle_rect_overlap(Circle::new(15.0, 5.0, 3.0), r));
/// assert!(circle_rect_overlap(Circle::new(12.0, 5.0, 3.0), r));
/// ```
#[inline]
pub fn circle_rect_overlap<T>(c: Circle<T>, r: Rect<T>) -> bool
where
    T: Real,
{
    let center = c.center();
    dist_squared(r.closest_point(center), center) <= c.r * c.r
}

/// [circle_rect_overlap] with contact data.
///
/// With the circle center outside the rect the contact point is the nearest rect point and the
/// normal points from it toward the circle center (from the rect toward the circle).
///
/// With the center inside (or on the boundary of) the rect the contact point is the projection
/// of the center onto the nearest side and the normal points outward across that side, ties
/// prefer the x axis then the left/top side.
pub fn circle_rect_overlap_poc<T>(c: Circle<T>, r: Rect<T>) -> Option<Contact<T>>
where
    T: Real,
{
    let center = c.center();
    let nearest = r.closest_point(center);
    let offset = center - nearest;
    if offset.length_squared() > c.r * c.r {
        return None;
    }

    if !offset.is_zero() {
        return Some(Contact::new(nearest, offset.normalize_or(Vector2::unit_x())));
    }

    let left = center.x - r.x;
    let right = r.right() - center.x;
    let top = center.y - r.y;
    let bottom = r.bottom() - center.y;

    let (depth_x, side_x, dir_x) = if left <= right {
        (left, r.x, -T::one())
    } else {
        (right, r.right(), T::one())
    };
    let (depth_y, side_y, dir_y) = if top <= bottom {
        (top, r.y, -T::one())
    } else {
        (bottom, r.bottom(), T::one())
    };

    let contact = if depth_x <= depth_y {
        Contact::new(
            Vector2::new(side_x, center.y),
            Vector2::new(dir_x, T::zero()),
        )
    } else {
        Contact::new(
            Vector2::new(center.x, side_y),
            Vector2::new(T::zero(), dir_y),
        )
    };

    Some(contact)
}
