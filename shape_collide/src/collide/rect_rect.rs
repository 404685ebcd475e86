use super::{Contact, axis_sign};
use crate::{
    core::{math::Vector2, traits::Real},
    primitives::Rect,
};

/// Half open AABB overlap, rects that only share a side or corner do not overlap.
///
/// # Examples
///
/// ```
/// # use shape_collide::collide::*;
/// # use shape_collide::core::math::*;
/// # use shape_collide::primitives::*;
/// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
/// let b = Rect::new(10.0, 0.0, 10.0, 10.0);
/// assert!(!rect_overlap(a, b));
/// // while the shared side still counts as inside both
/// assert!(point_in_rect(Vector2::new(10.0, 5.0), a));
/// assert!(point_in_rect(Vector2::new(10.0, 5.0), b));
/// ```
#[inline]
pub fn rect_overlap<T>(a: Rect<T>, b: Rect<T>) -> bool
where
    T: Real,
{
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// [rect_overlap] with contact data.
///
/// The contact point is the center of the intersection rect. The normal is the axis aligned unit
/// vector from `a`'s center toward `b`'s center along the axis with the smaller penetration
/// (x on ties), i.e. the direction `b` has to move to get out of `a` fastest.
pub fn rect_overlap_poc<T>(a: Rect<T>, b: Rect<T>) -> Option<Contact<T>>
where
    T: Real,
{
    if !rect_overlap(a, b) {
        return None;
    }

    let left = num_traits::real::Real::max(a.x, b.x);
    let top = num_traits::real::Real::max(a.y, b.y);
    let right = num_traits::real::Real::min(a.right(), b.right());
    let bottom = num_traits::real::Real::min(a.bottom(), b.bottom());
    let overlap = Rect::new(left, top, right - left, bottom - top);

    let delta = b.center() - a.center();
    let normal = if overlap.w <= overlap.h {
        Vector2::new(axis_sign(delta.x), T::zero())
    } else {
        Vector2::new(T::zero(), axis_sign(delta.y))
    };

    Some(Contact::new(overlap.center(), normal))
}
