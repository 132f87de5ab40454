//! Relational and logical operators producing lane masks.
//!
//! As in OpenCL C, comparing two vectors produces a vector of the signed
//! integer type with the same lane width, with every bit of a lane set where
//! the comparison holds (`-1`) and clear where it does not (`0`). Comparing
//! a single-lane selection produces a plain `bool`.
//!
//! The logical forms treat any non-zero lane as true.

use num_traits::Zero;
use crate::resolve::zip_lanes;
use crate::{MaskLane, Operand, Resolve, Scalar, Selector, Swizzle, SwizzleMut, Vector, Width};

/// Lanewise comparisons and logical operators.
///
/// ```
/// use ocl_swizzle::prm::{Float4, Int4};
/// use ocl_swizzle::Relational;
///
/// let v = Float4::new(1.0, 5.0, 3.0, 0.0);
/// assert_eq!(v.lt_mask(3.0), Int4::new(-1, 0, 0, -1));
/// assert!(v.y().gt_mask(v.x()));
/// ```
pub trait Relational<T: Scalar, const M: usize>: Operand<T, M> {
    /// The comparison result type.
    type Mask;

    /// Builds the result from per-lane booleans.
    fn mask_from(lanes: [bool; M]) -> Self::Mask;

    /// `self == rhs`
    #[inline]
    fn eq_mask<R: Operand<T, M>>(&self, rhs: R) -> Self::Mask {
        Self::mask_from(zip_lanes(self.lanes(), rhs.lanes(), |a, b| a == b))
    }

    /// `self != rhs`
    #[inline]
    fn ne_mask<R: Operand<T, M>>(&self, rhs: R) -> Self::Mask {
        Self::mask_from(zip_lanes(self.lanes(), rhs.lanes(), |a, b| a != b))
    }

    /// `self < rhs`
    #[inline]
    fn lt_mask<R: Operand<T, M>>(&self, rhs: R) -> Self::Mask {
        Self::mask_from(zip_lanes(self.lanes(), rhs.lanes(), |a, b| a < b))
    }

    /// `self <= rhs`
    #[inline]
    fn le_mask<R: Operand<T, M>>(&self, rhs: R) -> Self::Mask {
        Self::mask_from(zip_lanes(self.lanes(), rhs.lanes(), |a, b| a <= b))
    }

    /// `self > rhs`
    #[inline]
    fn gt_mask<R: Operand<T, M>>(&self, rhs: R) -> Self::Mask {
        Self::mask_from(zip_lanes(self.lanes(), rhs.lanes(), |a, b| a > b))
    }

    /// `self >= rhs`
    #[inline]
    fn ge_mask<R: Operand<T, M>>(&self, rhs: R) -> Self::Mask {
        Self::mask_from(zip_lanes(self.lanes(), rhs.lanes(), |a, b| a >= b))
    }

    /// `self && rhs`
    #[inline]
    fn and_mask<R: Operand<T, M>>(&self, rhs: R) -> Self::Mask {
        Self::mask_from(zip_lanes(self.lanes(), rhs.lanes(), |a, b| !a.is_zero() && !b.is_zero()))
    }

    /// `self || rhs`
    #[inline]
    fn or_mask<R: Operand<T, M>>(&self, rhs: R) -> Self::Mask {
        Self::mask_from(zip_lanes(self.lanes(), rhs.lanes(), |a, b| !a.is_zero() || !b.is_zero()))
    }

    /// `!self`
    #[inline]
    fn not_mask(&self) -> Self::Mask {
        Self::mask_from(self.lanes().map(|a| a.is_zero()))
    }
}

impl<T: Scalar, const N: usize> Relational<T, N> for Vector<T, N> {
    type Mask = Vector<T::Mask, N>;

    #[inline]
    fn mask_from(lanes: [bool; N]) -> Vector<T::Mask, N> {
        Vector::from_array(lanes.map(<T::Mask as MaskLane>::from_bool))
    }
}

impl<'a, T, S, const N: usize, const M: usize> Relational<T, M> for Swizzle<'a, T, N, S, M>
        where T: Scalar, S: Selector<M>, Width<M>: Resolve<T, M> {
    type Mask = <Width<M> as Resolve<T, M>>::Mask;

    #[inline]
    fn mask_from(lanes: [bool; M]) -> Self::Mask {
        <Width<M> as Resolve<T, M>>::mask(lanes)
    }
}

impl<'a, T, S, const N: usize, const M: usize> Relational<T, M> for SwizzleMut<'a, T, N, S, M>
        where T: Scalar, S: Selector<M>, Width<M>: Resolve<T, M> {
    type Mask = <Width<M> as Resolve<T, M>>::Mask;

    #[inline]
    fn mask_from(lanes: [bool; M]) -> Self::Mask {
        <Width<M> as Resolve<T, M>>::mask(lanes)
    }
}

/// Selects lanes from `a` where `mask` is clear and from `b` where it is set,
/// as OpenCL `select` does for vectors.
///
/// ```
/// use ocl_swizzle::prm::Int4;
/// use ocl_swizzle::{select, Relational};
///
/// let a = Int4::new(1, 2, 3, 4);
/// let b = Int4::new(10, 20, 30, 40);
/// assert_eq!(select(a, b, a.gt_mask(2)), Int4::new(1, 2, 30, 40));
/// ```
#[inline]
pub fn select<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>,
        mask: Vector<T::Mask, N>) -> Vector<T, N> {
    let mut out = a;
    for i in 0..N {
        if mask[i] < T::Mask::zero() {
            out[i] = b[i];
        }
    }
    out
}
