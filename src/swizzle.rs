//! Swizzle views.
//!
//! A swizzle is a borrow of a vector together with a compile-time list of
//! lane indexes (its [`Selector`]). It owns nothing and holds no state other
//! than the borrow: reading gathers the selected lanes, writing scatters
//! into them.
//!
//! Writes always evaluate the complete right hand side before touching the
//! vector, and scatter in selector order, so a selector which repeats an
//! index keeps the value written last.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use crate::resolve::zip_lanes;
use crate::selector::{Compose, Even, Hi, InBounds, Lo, Odd, Selector};
use crate::vector::storage_bytes;
use crate::{Operand, Resolve, Scalar, Vector, Width};

/// The value a selection of `M` lanes of `T` evaluates to.
pub(crate) type Value<T, const M: usize> = <Width<M> as Resolve<T, M>>::Value;

/// A read-only view of the lanes of a vector listed by `S`.
///
/// Created by the accessor methods on [`Vector`] (`.x()`, `.zyx()`,
/// `.s7()`, `.hi()`, [`Vector::swizzle`], ...).
pub struct Swizzle<'a, T, const N: usize, S, const M: usize> {
    vec: &'a Vector<T, N>,
    sel: PhantomData<fn() -> S>,
}

/// A writable view of the lanes of a vector listed by `S`.
///
/// Created by the `_mut` accessor methods on [`Vector`] (`.x_mut()`,
/// `.zyx_mut()`, `.hi_mut()`, [`Vector::swizzle_mut`], ...).
pub struct SwizzleMut<'a, T, const N: usize, S, const M: usize> {
    vec: &'a mut Vector<T, N>,
    sel: PhantomData<fn() -> S>,
}

impl<'a, T, const N: usize, S, const M: usize> Clone for Swizzle<'a, T, N, S, M> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, const N: usize, S, const M: usize> Copy for Swizzle<'a, T, N, S, M> {}

impl<'a, T: Scalar, const N: usize, S: Selector<M>, const M: usize> Swizzle<'a, T, N, S, M> {
    #[inline]
    pub(crate) fn new(vec: &'a Vector<T, N>) -> Swizzle<'a, T, N, S, M> {
        let () = InBounds::<S, N, M>::OK;
        Swizzle { vec, sel: PhantomData }
    }

    #[inline]
    pub(crate) fn gather(&self) -> [T; M] {
        S::INDEX.map(|idx| self.vec.lane(idx))
    }

    /// Swizzles the selection again. Lane `i` of the result is lane
    /// `O::INDEX[i]` of this selection.
    #[inline]
    pub fn swizzle<O: Selector<K>, const K: usize>(self) -> Swizzle<'a, T, N, Compose<S, O, M>, K> {
        let () = InBounds::<O, M, K>::OK;
        Swizzle::new(self.vec)
    }
}

impl<'a, T: Scalar, const N: usize, S: Selector<M>, const M: usize> SwizzleMut<'a, T, N, S, M> {
    #[inline]
    pub(crate) fn new(vec: &'a mut Vector<T, N>) -> SwizzleMut<'a, T, N, S, M> {
        let () = InBounds::<S, N, M>::OK;
        SwizzleMut { vec, sel: PhantomData }
    }

    #[inline]
    pub(crate) fn gather(&self) -> [T; M] {
        S::INDEX.map(|idx| self.vec.lane(idx))
    }

    #[inline]
    pub(crate) fn scatter(&mut self, lanes: [T; M]) {
        for (&idx, &val) in S::INDEX.iter().zip(lanes.iter()) {
            self.vec.set_lane(idx, val);
        }
    }

    /// Reads the selection, combines it lane by lane with `rhs` and writes
    /// the result back.
    #[inline]
    pub(crate) fn update<F>(&mut self, rhs: [T; M], f: F) where F: FnMut(T, T) -> T {
        let lanes = zip_lanes(self.gather(), rhs, f);
        self.scatter(lanes);
    }

    /// Writes `value` into the selected lanes.
    ///
    /// `value` may be an `M`-lane vector, another `M`-lane swizzle or a
    /// scalar, which is written to every selected lane.
    #[inline]
    pub fn set<R: Operand<T, M>>(&mut self, value: R) {
        let lanes = value.lanes();
        self.scatter(lanes);
    }

    /// A read-only view of the same selection.
    #[inline]
    pub fn view(&self) -> Swizzle<'_, T, N, S, M> {
        Swizzle::new(&*self.vec)
    }

    /// A shorter-lived writable view of the same selection.
    #[inline]
    pub fn reborrow(&mut self) -> SwizzleMut<'_, T, N, S, M> {
        SwizzleMut::new(&mut *self.vec)
    }

    /// Swizzles the selection again. Lane `i` of the result is lane
    /// `O::INDEX[i]` of this selection.
    #[inline]
    pub fn swizzle<O: Selector<K>, const K: usize>(self)
            -> SwizzleMut<'a, T, N, Compose<S, O, M>, K> {
        let () = InBounds::<O, M, K>::OK;
        SwizzleMut::new(self.vec)
    }

    /// Adds one to every selected lane (`++v.xy()`) and returns the new
    /// value.
    #[inline]
    pub fn increment(&mut self) -> Value<T, M> where Width<M>: Resolve<T, M> {
        self.update([T::one(); M], Scalar::lane_add);
        self.get()
    }

    /// Subtracts one from every selected lane (`--v.xy()`) and returns the
    /// new value.
    #[inline]
    pub fn decrement(&mut self) -> Value<T, M> where Width<M>: Resolve<T, M> {
        self.update([T::one(); M], Scalar::lane_sub);
        self.get()
    }

    /// Adds one to every selected lane (`v.xy()++`) and returns the old
    /// value.
    #[inline]
    pub fn post_increment(&mut self) -> Value<T, M> where Width<M>: Resolve<T, M> {
        let old = self.get();
        self.update([T::one(); M], Scalar::lane_add);
        old
    }

    /// Subtracts one from every selected lane (`v.xy()--`) and returns the
    /// old value.
    #[inline]
    pub fn post_decrement(&mut self) -> Value<T, M> where Width<M>: Resolve<T, M> {
        let old = self.get();
        self.update([T::one(); M], Scalar::lane_sub);
        old
    }
}

macro_rules! impl_view_common {
    ($view:ident) => {
        impl<'a, T: Scalar, const N: usize, S: Selector<M>, const M: usize> $view<'a, T, N, S, M> {
            /// Reads the selection: the scalar for a single lane, otherwise
            /// an `M`-lane vector.
            #[inline]
            pub fn get(&self) -> Value<T, M> where Width<M>: Resolve<T, M> {
                <Width<M> as Resolve<T, M>>::value(self.gather())
            }

            /// The number of selected lanes.
            #[inline]
            pub fn size(&self) -> usize {
                M
            }

            /// The device size in bytes of the vector this view borrows.
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
        }

        impl<'a, T: Scalar, const N: usize, S: Selector<M>, const M: usize> Operand<T, M>
                for $view<'a, T, N, S, M> {
            #[inline]
            fn lanes(&self) -> [T; M] {
                self.gather()
            }
        }

        impl<'a, T: Scalar, const N: usize, S: Selector<M>, const M: usize> Debug
                for $view<'a, T, N, S, M> {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                f.debug_tuple(stringify!($view)).field(&self.gather()).finish()
            }
        }

        impl<'a, T: Scalar, const N: usize, S: Selector<M>, const M: usize> From<$view<'a, T, N, S, M>>
                for Vector<T, M> where Width<M>: Resolve<T, M, Value = Vector<T, M>> {
            #[inline]
            fn from(view: $view<'a, T, N, S, M>) -> Vector<T, M> {
                view.get()
            }
        }

        impl<'a, T: Scalar, const N: usize, S: Selector<M>, const M: usize> PartialEq<Vector<T, M>>
                for $view<'a, T, N, S, M> {
            #[inline]
            fn eq(&self, other: &Vector<T, M>) -> bool {
                self.gather() == *other.as_array()
            }
        }

        impl<'a, T: Scalar, const N: usize, S: Selector<M>, const M: usize> PartialEq<$view<'a, T, N, S, M>>
                for Vector<T, M> {
            #[inline]
            fn eq(&self, other: &$view<'a, T, N, S, M>) -> bool {
                *self.as_array() == other.gather()
            }
        }

        // A single lane compares as the scalar it is.
        impl<'a, T: Scalar, const N: usize, S: Selector<1>> PartialEq<T> for $view<'a, T, N, S, 1> {
            #[inline]
            fn eq(&self, other: &T) -> bool {
                self.gather()[0] == *other
            }
        }

        impl<'a, T: Scalar, const N: usize, S: Selector<1>> PartialOrd<T> for $view<'a, T, N, S, 1> {
            #[inline]
            fn partial_cmp(&self, other: &T) -> Option<Ordering> {
                self.gather()[0].partial_cmp(other)
            }
        }
    };
}

impl_view_common!(Swizzle);
impl_view_common!(SwizzleMut);

macro_rules! impl_view_halves {
    ($view:ident: $( $k:literal => $m:literal ),+) => {
        $( impl<'a, T: Scalar, const N: usize, S: Selector<$k>> $view<'a, T, N, S, $k> {
            #[inline]
            pub fn lo(self) -> $view<'a, T, N, Compose<S, Lo<$k>, $k>, $m> {
                self.swizzle::<Lo<$k>, $m>()
            }

            #[inline]
            pub fn hi(self) -> $view<'a, T, N, Compose<S, Hi<$k>, $k>, $m> {
                self.swizzle::<Hi<$k>, $m>()
            }

            #[inline]
            pub fn even(self) -> $view<'a, T, N, Compose<S, Even<$k>, $k>, $m> {
                self.swizzle::<Even<$k>, $m>()
            }

            #[inline]
            pub fn odd(self) -> $view<'a, T, N, Compose<S, Odd<$k>, $k>, $m> {
                self.swizzle::<Odd<$k>, $m>()
            }
        } )+
    };
}

// Selections have no padding lane, so 3-lane selections are not split.
impl_view_halves!(Swizzle: 2 => 1, 4 => 2, 8 => 4, 16 => 8);
impl_view_halves!(SwizzleMut: 2 => 1, 4 => 2, 8 => 4, 16 => 8);
