//! Elementwise operators for vectors and swizzles.
//!
//! Every operator first evaluates both operands into lanes and then applies
//! the scalar operation lane by lane. The right hand side may be a vector, a
//! swizzle or a scalar (broadcast). Operators on a swizzle produce the
//! swizzle's value type, so a single-lane swizzle produces a scalar.
//!
//! Integer `+`, `-`, `*` and negation wrap on overflow, and shift amounts
//! are reduced modulo the lane width in bits, as in OpenCL C. Division by
//! zero still panics.

use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
    Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign,
    Sub, SubAssign};
use num_traits::{AsPrimitive, WrappingShl, WrappingShr};
use crate::resolve::zip_lanes;
use crate::swizzle::Value;
use crate::{Operand, Resolve, Scalar, Selector, Swizzle, SwizzleMut, Vector, Width};

macro_rules! impl_binop {
    ($tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident,
            [$( $bound:tt )+], |$a:ident, $b:ident| $lane_op:expr) => {
        impl<T, R, const N: usize> $tr<R> for Vector<T, N>
                where T: Scalar + $( $bound )+, R: Operand<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: R) -> Vector<T, N> {
                Vector::from_array(zip_lanes(self.into_array(), rhs.lanes(), |$a: T, $b: T| $lane_op))
            }
        }

        impl<T, R, const N: usize> $tr_assign<R> for Vector<T, N>
                where T: Scalar + $( $bound )+, R: Operand<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: R) {
                *self = Vector::from_array(zip_lanes(self.into_array(), rhs.lanes(), |$a: T, $b: T| $lane_op));
            }
        }

        impl<'a, T, S, R, const N: usize, const M: usize> $tr<R> for Swizzle<'a, T, N, S, M>
                where T: Scalar + $( $bound )+, S: Selector<M>, R: Operand<T, M>,
                    Width<M>: Resolve<T, M> {
            type Output = Value<T, M>;

            #[inline]
            fn $method(self, rhs: R) -> Value<T, M> {
                <Width<M> as Resolve<T, M>>::value(
                    zip_lanes(self.gather(), rhs.lanes(), |$a: T, $b: T| $lane_op))
            }
        }

        impl<'a, T, S, R, const N: usize, const M: usize> $tr<R> for SwizzleMut<'a, T, N, S, M>
                where T: Scalar + $( $bound )+, S: Selector<M>, R: Operand<T, M>,
                    Width<M>: Resolve<T, M> {
            type Output = Value<T, M>;

            #[inline]
            fn $method(self, rhs: R) -> Value<T, M> {
                <Width<M> as Resolve<T, M>>::value(
                    zip_lanes(self.gather(), rhs.lanes(), |$a: T, $b: T| $lane_op))
            }
        }

        impl<'a, T, S, R, const N: usize, const M: usize> $tr_assign<R> for SwizzleMut<'a, T, N, S, M>
                where T: Scalar + $( $bound )+, S: Selector<M>, R: Operand<T, M> {
            #[inline]
            fn $method_assign(&mut self, rhs: R) {
                // The whole right hand side is evaluated before any lane is
                // written.
                let rhs = rhs.lanes();
                self.update(rhs, |$a: T, $b: T| $lane_op);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, [Add<Output = T>], |a, b| a.lane_add(b));
impl_binop!(Sub, sub, SubAssign, sub_assign, [Sub<Output = T>], |a, b| a.lane_sub(b));
impl_binop!(Mul, mul, MulAssign, mul_assign, [Mul<Output = T>], |a, b| a.lane_mul(b));
impl_binop!(Div, div, DivAssign, div_assign, [Div<Output = T>], |a, b| a / b);
impl_binop!(Rem, rem, RemAssign, rem_assign, [Rem<Output = T>], |a, b| a % b);
impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, [BitAnd<Output = T>], |a, b| a & b);
impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, [BitOr<Output = T>], |a, b| a | b);
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, [BitXor<Output = T>], |a, b| a ^ b);
impl_binop!(Shl, shl, ShlAssign, shl_assign, [WrappingShl + AsPrimitive<u32>],
    |a, b| a.wrapping_shl(b.as_()));
impl_binop!(Shr, shr, ShrAssign, shr_assign, [WrappingShr + AsPrimitive<u32>],
    |a, b| a.wrapping_shr(b.as_()));

macro_rules! impl_unop {
    ($tr:ident, $method:ident, |$a:ident| $lane_op:expr) => {
        impl<T, const N: usize> $tr for Vector<T, N> where T: Scalar + $tr<Output = T> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self) -> Vector<T, N> {
                Vector::from_array(self.into_array().map(|$a: T| $lane_op))
            }
        }

        impl<'a, T, S, const N: usize, const M: usize> $tr for Swizzle<'a, T, N, S, M>
                where T: Scalar + $tr<Output = T>, S: Selector<M>, Width<M>: Resolve<T, M> {
            type Output = Value<T, M>;

            #[inline]
            fn $method(self) -> Value<T, M> {
                <Width<M> as Resolve<T, M>>::value(self.gather().map(|$a: T| $lane_op))
            }
        }

        impl<'a, T, S, const N: usize, const M: usize> $tr for SwizzleMut<'a, T, N, S, M>
                where T: Scalar + $tr<Output = T>, S: Selector<M>, Width<M>: Resolve<T, M> {
            type Output = Value<T, M>;

            #[inline]
            fn $method(self) -> Value<T, M> {
                <Width<M> as Resolve<T, M>>::value(self.gather().map(|$a: T| $lane_op))
            }
        }
    };
}

impl_unop!(Neg, neg, |a| a.lane_neg());
impl_unop!(Not, not, |a| !a);

// Scalar on the left hand side: `2 * v`, `1.0 - v.xy()`. These have to be
// spelled out per primitive.
macro_rules! impl_scalar_lhs {
    ($tr:ident, $method:ident, |$a:ident, $b:ident| $lane_op:expr; $( $ty:ty ),+) => {
        $(
            impl<const N: usize> $tr<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                #[inline]
                fn $method(self, rhs: Vector<$ty, N>) -> Vector<$ty, N> {
                    Vector::from_array(zip_lanes([self; N], rhs.into_array(),
                        |$a: $ty, $b: $ty| $lane_op))
                }
            }

            impl<'a, S, const N: usize, const M: usize> $tr<Swizzle<'a, $ty, N, S, M>> for $ty
                    where S: Selector<M>, Width<M>: Resolve<$ty, M> {
                type Output = Value<$ty, M>;

                #[inline]
                fn $method(self, rhs: Swizzle<'a, $ty, N, S, M>) -> Value<$ty, M> {
                    <Width<M> as Resolve<$ty, M>>::value(
                        zip_lanes([self; M], rhs.gather(), |$a: $ty, $b: $ty| $lane_op))
                }
            }

            impl<'a, S, const N: usize, const M: usize> $tr<SwizzleMut<'a, $ty, N, S, M>> for $ty
                    where S: Selector<M>, Width<M>: Resolve<$ty, M> {
                type Output = Value<$ty, M>;

                #[inline]
                fn $method(self, rhs: SwizzleMut<'a, $ty, N, S, M>) -> Value<$ty, M> {
                    <Width<M> as Resolve<$ty, M>>::value(
                        zip_lanes([self; M], rhs.gather(), |$a: $ty, $b: $ty| $lane_op))
                }
            }
        )+
    };
}

macro_rules! impl_scalar_lhs_arith {
    ($( $ty:ty ),+) => {
        impl_scalar_lhs!(Add, add, |a, b| a.lane_add(b); $( $ty ),+);
        impl_scalar_lhs!(Sub, sub, |a, b| a.lane_sub(b); $( $ty ),+);
        impl_scalar_lhs!(Mul, mul, |a, b| a.lane_mul(b); $( $ty ),+);
        impl_scalar_lhs!(Div, div, |a, b| a / b; $( $ty ),+);
        impl_scalar_lhs!(Rem, rem, |a, b| a % b; $( $ty ),+);
    };
}

macro_rules! impl_scalar_lhs_bits {
    ($( $ty:ty ),+) => {
        impl_scalar_lhs!(BitAnd, bitand, |a, b| a & b; $( $ty ),+);
        impl_scalar_lhs!(BitOr, bitor, |a, b| a | b; $( $ty ),+);
        impl_scalar_lhs!(BitXor, bitxor, |a, b| a ^ b; $( $ty ),+);
        impl_scalar_lhs!(Shl, shl, |a, b| a.wrapping_shl(b as u32); $( $ty ),+);
        impl_scalar_lhs!(Shr, shr, |a, b| a.wrapping_shr(b as u32); $( $ty ),+);
    };
}

impl_scalar_lhs_arith!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_lhs_bits!(i8, u8, i16, u16, i32, u32, i64, u64);

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Adds one to every lane (`++v`) and returns the new value.
    #[inline]
    pub fn increment(&mut self) -> Vector<T, N> {
        *self += T::one();
        *self
    }

    /// Subtracts one from every lane (`--v`) and returns the new value.
    #[inline]
    pub fn decrement(&mut self) -> Vector<T, N> where T: Sub<Output = T> {
        *self -= T::one();
        *self
    }

    /// Adds one to every lane (`v++`) and returns the old value.
    #[inline]
    pub fn post_increment(&mut self) -> Vector<T, N> {
        let old = *self;
        *self += T::one();
        old
    }

    /// Subtracts one from every lane (`v--`) and returns the old value.
    #[inline]
    pub fn post_decrement(&mut self) -> Vector<T, N> where T: Sub<Output = T> {
        let old = *self;
        *self -= T::one();
        old
    }
}
