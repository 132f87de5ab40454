//! The backing vector type.

use std::fmt::{self, Display, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use num_traits::{AsPrimitive, One, Zero};
use crate::error::{Error, Result};
use crate::selector::{Even, Hi, InBounds, Lo, Odd, Selector};
use crate::{Scalar, Swizzle, SwizzleMut};

/// An `N`-lane vector of `T`s, laid out as `[T; N]`.
///
/// Widths 1, 2, 3, 4, 8 and 16 carry named accessors. See the [`prm`]
/// module for the OpenCL type names.
///
/// [`prm`]: crate::prm
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn from_array(lanes: [T; N]) -> Vector<T, N> {
        Vector(lanes)
    }

    #[inline]
    pub fn splat(val: T) -> Vector<T, N> {
        Vector([val; N])
    }

    #[inline]
    pub fn zero() -> Vector<T, N> {
        Vector([Zero::zero(); N])
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }

    #[inline]
    pub fn one() -> Vector<T, N> {
        Vector([One::one(); N])
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// The number of lanes.
    #[inline]
    pub fn size(&self) -> usize {
        N
    }

    /// The size of this vector in device memory. 3-lane vectors occupy as
    /// much space as 4-lane ones.
    #[inline]
    pub fn byte_size(&self) -> usize {
        storage_bytes::<T>(N)
    }

    #[deprecated(note = "use `size`")]
    #[inline]
    pub fn get_count(&self) -> usize {
        self.size()
    }

    #[deprecated(note = "use `byte_size`")]
    #[inline]
    pub fn get_size(&self) -> usize {
        self.byte_size()
    }

    /// Converts each lane to `U` as with an `as` cast.
    #[inline]
    pub fn convert<U>(self) -> Vector<U, N> where T: AsPrimitive<U>, U: Scalar {
        Vector(self.0.map(|lane| lane.as_()))
    }

    /// Returns a read-only view of the lanes listed by `S`.
    ///
    /// An index outside of `0..N` fails to compile.
    #[inline]
    pub fn swizzle<S: Selector<M>, const M: usize>(&self) -> Swizzle<'_, T, N, S, M> {
        let () = InBounds::<S, N, M>::OK;
        Swizzle::new(self)
    }

    /// Returns a writable view of the lanes listed by `S`.
    ///
    /// An index outside of `0..N` fails to compile.
    #[inline]
    pub fn swizzle_mut<S: Selector<M>, const M: usize>(&mut self) -> SwizzleMut<'_, T, N, S, M> {
        let () = InBounds::<S, N, M>::OK;
        SwizzleMut::new(self)
    }

    /// Performs `self.dst() = self.src()`.
    ///
    /// All of `Src` is read before anything is written, so overlapping
    /// selections (`xy = yx`) behave as a swap rather than smearing one lane
    /// over the other. Where `Dst` repeats an index the last write wins.
    #[inline]
    pub fn reassign<Dst, Src, const M: usize>(&mut self)
            where Dst: Selector<M>, Src: Selector<M> {
        let src = self.swizzle::<Src, M>().gather();
        self.swizzle_mut::<Dst, M>().scatter(src);
    }

    /// Reads lane `idx`, where indexes `N..` are padding and read as zero.
    #[inline]
    pub(crate) fn lane(&self, idx: usize) -> T {
        if idx < N { self.0[idx] } else { Zero::zero() }
    }

    /// Writes lane `idx`, discarding writes to padding.
    #[inline]
    pub(crate) fn set_lane(&mut self, idx: usize, val: T) {
        if idx < N {
            self.0[idx] = val;
        }
    }
}

/// Bytes occupied in device memory by `lanes` lanes of `T`.
#[inline]
pub(crate) fn storage_bytes<T>(lanes: usize) -> usize {
    let lanes = if lanes == 3 { 4 } else { lanes };
    lanes * mem::size_of::<T>()
}

macro_rules! impl_named_ctor {
    ($( $n:literal: $( $field:ident ),+ );+) => {
        $( impl<T: Scalar> Vector<T, $n> {
            #[inline]
            pub fn new($( $field: T ),+) -> Vector<T, $n> {
                Vector([$( $field ),+])
            }
        } )+
    };
}

impl_named_ctor!(
    1: s0;
    2: s0, s1;
    3: s0, s1, s2;
    4: s0, s1, s2, s3;
    8: s0, s1, s2, s3, s4, s5, s6, s7;
    16: s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, sa, sb, sc, sd, se, sf
);

macro_rules! impl_halves {
    ($( $n:literal => $m:literal ),+) => {
        $( impl<T: Scalar> Vector<T, $n> {
            /// The lower half of the lanes.
            #[inline]
            pub fn lo(&self) -> Swizzle<'_, T, $n, Lo<$n>, $m> {
                self.swizzle()
            }

            /// The upper half of the lanes.
            #[inline]
            pub fn hi(&self) -> Swizzle<'_, T, $n, Hi<$n>, $m> {
                self.swizzle()
            }

            /// The even-numbered lanes.
            #[inline]
            pub fn even(&self) -> Swizzle<'_, T, $n, Even<$n>, $m> {
                self.swizzle()
            }

            /// The odd-numbered lanes.
            #[inline]
            pub fn odd(&self) -> Swizzle<'_, T, $n, Odd<$n>, $m> {
                self.swizzle()
            }

            #[inline]
            pub fn lo_mut(&mut self) -> SwizzleMut<'_, T, $n, Lo<$n>, $m> {
                self.swizzle_mut()
            }

            #[inline]
            pub fn hi_mut(&mut self) -> SwizzleMut<'_, T, $n, Hi<$n>, $m> {
                self.swizzle_mut()
            }

            #[inline]
            pub fn even_mut(&mut self) -> SwizzleMut<'_, T, $n, Even<$n>, $m> {
                self.swizzle_mut()
            }

            #[inline]
            pub fn odd_mut(&mut self) -> SwizzleMut<'_, T, $n, Odd<$n>, $m> {
                self.swizzle_mut()
            }
        } )+
    };
}

// The upper half of a 3-lane vector is `z` and the padding lane.
impl_halves!(2 => 1, 3 => 2, 4 => 2, 8 => 4, 16 => 8);

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Vector<T, N> {
        Vector::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(lanes: [T; N]) -> Vector<T, N> {
        Vector(lanes)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> [T; N] {
        v.0
    }
}

impl<'a, T: Scalar, const N: usize> TryFrom<&'a [T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(slice: &'a [T]) -> Result<Vector<T, N>> {
        if slice.len() != N {
            return Err(Error::Length { expected: N, found: slice.len() });
        }
        let mut lanes = [Zero::zero(); N];
        lanes.copy_from_slice(slice);
        Ok(Vector(lanes))
    }
}

impl<T, const N: usize> Deref for Vector<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for Vector<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        &self.0[idx]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.0[idx]
    }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, lane) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lane)?;
        }
        write!(f, ")")
    }
}

impl<T: Scalar, const N: usize> Zero for Vector<T, N> {
    #[inline]
    fn zero() -> Self {
        Vector::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Vector::is_zero(self)
    }
}

impl<T: Scalar, const N: usize> One for Vector<T, N> {
    #[inline]
    fn one() -> Self {
        Vector::one()
    }
}
