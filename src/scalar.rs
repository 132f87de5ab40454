//! Scalar lane types.

use std::fmt::{Debug, Display};
use num_traits::{One, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero};

/// A primitive which may be used as the lane type of a vector.
///
/// Implemented for the Rust equivalents of the OpenCL scalar types (`char`
/// through `double`).
pub trait Scalar: Copy + Default + PartialEq + PartialOrd + Debug + Display + Zero + One
        + Send + Sync + 'static {
    /// The signed integer of the same byte width. Relational and logical
    /// operations on vectors of `Self` produce lanes of this type.
    type Mask: MaskLane;

    /// Lane addition. Integer lanes wrap on overflow, as they do on the
    /// device.
    fn lane_add(self, rhs: Self) -> Self;

    /// Lane subtraction. Integer lanes wrap.
    fn lane_sub(self, rhs: Self) -> Self;

    /// Lane multiplication. Integer lanes wrap.
    fn lane_mul(self, rhs: Self) -> Self;

    /// Lane negation. Integer lanes wrap.
    fn lane_neg(self) -> Self;
}

/// A lane of a comparison result: all bits set for true, all clear for
/// false.
pub trait MaskLane: Scalar<Mask = Self> {
    const TRUE: Self;
    const FALSE: Self;

    #[inline]
    fn from_bool(b: bool) -> Self {
        if b { Self::TRUE } else { Self::FALSE }
    }
}

macro_rules! impl_scalar_int {
    ($( $ty:ty => $mask:ty ),+) => {
        $( impl Scalar for $ty {
            type Mask = $mask;

            #[inline]
            fn lane_add(self, rhs: $ty) -> $ty {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            #[inline]
            fn lane_sub(self, rhs: $ty) -> $ty {
                WrappingSub::wrapping_sub(&self, &rhs)
            }

            #[inline]
            fn lane_mul(self, rhs: $ty) -> $ty {
                WrappingMul::wrapping_mul(&self, &rhs)
            }

            #[inline]
            fn lane_neg(self) -> $ty {
                WrappingNeg::wrapping_neg(&self)
            }
        } )+
    };
}

macro_rules! impl_scalar_float {
    ($( $ty:ty => $mask:ty ),+) => {
        $( impl Scalar for $ty {
            type Mask = $mask;

            #[inline]
            fn lane_add(self, rhs: $ty) -> $ty {
                self + rhs
            }

            #[inline]
            fn lane_sub(self, rhs: $ty) -> $ty {
                self - rhs
            }

            #[inline]
            fn lane_mul(self, rhs: $ty) -> $ty {
                self * rhs
            }

            #[inline]
            fn lane_neg(self) -> $ty {
                -self
            }
        } )+
    };
}

macro_rules! impl_mask_lane {
    ($( $ty:ty ),+) => {
        $( impl MaskLane for $ty {
            const TRUE: $ty = -1;
            const FALSE: $ty = 0;
        } )+
    };
}

impl_scalar_int!(
    i8 => i8, u8 => i8,
    i16 => i16, u16 => i16,
    i32 => i32, u32 => i32,
    i64 => i64, u64 => i64
);

impl_scalar_float!(f32 => i32, f64 => i64);

impl_mask_lane!(i8, i16, i32, i64);
