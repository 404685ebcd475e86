use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;
use std::fmt;

/// Floating point coordinate type used by all shapes (`f32` or `f64`).
///
/// A single instantiation is used end to end: shapes built from `f32` stay `f32` through every
/// query, there is no implicit widening or narrowing.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + IndexableNum
    + Send
    + Sync
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Clamp `self` into `[min, max]`, `min` wins if the range is inverted.
    #[inline]
    fn clamp_to(self, min: Self, max: Self) -> Self {
        if self > max {
            if max < min { min } else { max }
        } else if self < min {
            min
        } else {
            self
        }
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_to_range() {
        assert_eq!(5.0f64.clamp_to(0.0, 10.0), 5.0);
        assert_eq!((-1.0f64).clamp_to(0.0, 10.0), 0.0);
        assert_eq!(12.0f32.clamp_to(0.0, 10.0), 10.0);
        // zero width range collapses to the single value
        assert_eq!(3.0f64.clamp_to(2.0, 2.0), 2.0);
    }
}
