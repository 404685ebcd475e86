use super::Rect;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer pixel rectangle as used by windowing and blitting APIs.
///
/// Conversion to and from [Rect] is a plain field wise numeric cast (`as`): fractional parts are
/// truncated toward zero, out of range values saturate, negative sizes become zero.
///
/// # Examples
///
/// ```
/// # use shape_collide::primitives::*;
/// let r = Rect::<f64>::new(-3.0, 4.0, 16.0, 9.0);
/// let p = PixelRect::from(r);
/// assert_eq!(p, PixelRect::new(-3, 4, 16, 9));
/// assert_eq!(Rect::from(p), r);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    #[inline]
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        PixelRect { x, y, w, h }
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelRect: ({}, {}, {}, {})", self.x, self.y, self.w, self.h)
    }
}

macro_rules! impl_pixel_rect_conversions {
    ($ty:ty) => {
        impl From<Rect<$ty>> for PixelRect {
            #[inline]
            fn from(r: Rect<$ty>) -> Self {
                PixelRect {
                    x: r.x as i32,
                    y: r.y as i32,
                    w: r.w as u32,
                    h: r.h as u32,
                }
            }
        }

        impl From<PixelRect> for Rect<$ty> {
            #[inline]
            fn from(r: PixelRect) -> Self {
                Rect {
                    x: r.x as $ty,
                    y: r.y as $ty,
                    w: r.w as $ty,
                    h: r.h as $ty,
                }
            }
        }
    };
}

impl_pixel_rect_conversions!(f32);
impl_pixel_rect_conversions!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_fractional_fields() {
        let p = PixelRect::from(Rect::new(1.9f32, -1.9, 2.5, 0.4));
        assert_eq!(p, PixelRect::new(1, -1, 2, 0));
    }

    #[test]
    fn integral_round_trip() {
        let r = Rect::new(-120.0f64, 33.0, 640.0, 480.0);
        assert_eq!(Rect::<f64>::from(PixelRect::from(r)), r);
        let p = PixelRect::new(i32::MIN, i32::MAX, 0, u32::MAX);
        assert_eq!(PixelRect::from(Rect::<f64>::from(p)), p);
    }
}
