//! Scalar demotion: the value type of an `M`-lane selection.
//!
//! A one-lane selection is the bare scalar. Wider selections are vectors.
//! The choice is made per width by `Width<M>: Resolve<T, M>` so that no code
//! path can produce a one-lane vector from a swizzle.

use crate::{MaskLane, Scalar, Vector};

/// Type-level selection width.
pub struct Width<const M: usize>;

/// The value and mask types produced by an `M`-lane selection of `T`s.
///
/// Implemented for widths 1, 2, 3, 4, 8 and 16. Selections of any other
/// width do not resolve and are rejected at compile time.
pub trait Resolve<T: Scalar, const M: usize> {
    /// `T` for a single lane, `Vector<T, M>` otherwise.
    type Value: Operand<T, M> + Copy;

    /// `bool` for a single lane, `Vector<T::Mask, M>` otherwise.
    type Mask;

    fn value(lanes: [T; M]) -> Self::Value;

    fn mask(lanes: [bool; M]) -> Self::Mask;
}

impl<T: Scalar> Resolve<T, 1> for Width<1> {
    type Value = T;
    type Mask = bool;

    #[inline]
    fn value(lanes: [T; 1]) -> T {
        lanes[0]
    }

    #[inline]
    fn mask(lanes: [bool; 1]) -> bool {
        lanes[0]
    }
}

macro_rules! impl_resolve_vec {
    ($( $m:literal ),+) => {
        $( impl<T: Scalar> Resolve<T, $m> for Width<$m> {
            type Value = Vector<T, $m>;
            type Mask = Vector<T::Mask, $m>;

            #[inline]
            fn value(lanes: [T; $m]) -> Vector<T, $m> {
                Vector::from_array(lanes)
            }

            #[inline]
            fn mask(lanes: [bool; $m]) -> Vector<T::Mask, $m> {
                Vector::from_array(lanes.map(<T::Mask as MaskLane>::from_bool))
            }
        } )+
    };
}

impl_resolve_vec!(2, 3, 4, 8, 16);

/// Anything usable as the `M`-lane operand of an assignment or operator:
/// an `M`-lane vector, an `M`-lane swizzle, or a scalar (broadcast to every
/// lane).
pub trait Operand<T: Scalar, const M: usize> {
    /// Evaluates the operand into its lanes.
    fn lanes(&self) -> [T; M];
}

impl<T: Scalar, const M: usize> Operand<T, M> for T {
    #[inline]
    fn lanes(&self) -> [T; M] {
        [*self; M]
    }
}

impl<T: Scalar, const M: usize> Operand<T, M> for Vector<T, M> {
    #[inline]
    fn lanes(&self) -> [T; M] {
        self.into_array()
    }
}

/// Applies `f` lane by lane.
#[inline]
pub(crate) fn zip_lanes<T: Copy, U, const M: usize, F>(lhs: [T; M], rhs: [T; M], mut f: F)
        -> [U; M] where F: FnMut(T, T) -> U {
    let mut i = 0;
    lhs.map(|l| {
        let r = rhs[i];
        i += 1;
        f(l, r)
    })
}
