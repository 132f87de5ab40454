//! Compile-time swizzle index lists.
//!
//! A selector is a zero-sized type carrying an array of lane indexes as an
//! associated constant. Views are parameterized by a selector rather than
//! by a runtime index list, so gathering and scattering through a view
//! compiles down to plain indexed loads and stores.

use std::marker::PhantomData;

/// A compile-time list of `M` lane indexes.
///
/// Indexes may repeat and need not be in order. Whether they are in range
/// for a particular vector is checked when a view is created.
pub trait Selector<const M: usize> {
    const INDEX: [usize; M];

    /// Set by selectors which may reach the padding lane of a 3-lane vector
    /// (`hi` and `odd`).
    const PADDED: bool = false;
}

/// Selects one lane.
pub struct Pick1<const A: usize>;

/// Selects two lanes.
pub struct Pick2<const A: usize, const B: usize>;

/// Selects three lanes.
pub struct Pick3<const A: usize, const B: usize, const C: usize>;

/// Selects four lanes.
pub struct Pick4<const A: usize, const B: usize, const C: usize, const D: usize>;

/// Selects eight lanes.
pub struct Pick8<const A: usize, const B: usize, const C: usize, const D: usize,
    const E: usize, const F: usize, const G: usize, const H: usize>;

/// Selects sixteen lanes.
pub struct Pick16<const S0: usize, const S1: usize, const S2: usize, const S3: usize,
    const S4: usize, const S5: usize, const S6: usize, const S7: usize,
    const S8: usize, const S9: usize, const SA: usize, const SB: usize,
    const SC: usize, const SD: usize, const SE: usize, const SF: usize>;

impl<const A: usize> Selector<1> for Pick1<A> {
    const INDEX: [usize; 1] = [A];
}

impl<const A: usize, const B: usize> Selector<2> for Pick2<A, B> {
    const INDEX: [usize; 2] = [A, B];
}

impl<const A: usize, const B: usize, const C: usize> Selector<3> for Pick3<A, B, C> {
    const INDEX: [usize; 3] = [A, B, C];
}

impl<const A: usize, const B: usize, const C: usize, const D: usize> Selector<4>
        for Pick4<A, B, C, D> {
    const INDEX: [usize; 4] = [A, B, C, D];
}

impl<const A: usize, const B: usize, const C: usize, const D: usize,
        const E: usize, const F: usize, const G: usize, const H: usize> Selector<8>
        for Pick8<A, B, C, D, E, F, G, H> {
    const INDEX: [usize; 8] = [A, B, C, D, E, F, G, H];
}

impl<const S0: usize, const S1: usize, const S2: usize, const S3: usize,
        const S4: usize, const S5: usize, const S6: usize, const S7: usize,
        const S8: usize, const S9: usize, const SA: usize, const SB: usize,
        const SC: usize, const SD: usize, const SE: usize, const SF: usize> Selector<16>
        for Pick16<S0, S1, S2, S3, S4, S5, S6, S7, S8, S9, SA, SB, SC, SD, SE, SF> {
    const INDEX: [usize; 16] = [S0, S1, S2, S3, S4, S5, S6, S7, S8, S9, SA, SB, SC, SD, SE, SF];
}

/// The selector of a swizzle taken of a swizzle: lane `i` of the result is
/// lane `Outer::INDEX[i]` of the `K`-lane `Inner` selection.
pub struct Compose<Inner, Outer, const K: usize>(PhantomData<fn() -> (Inner, Outer)>);

impl<I, O, const K: usize, const M: usize> Selector<M> for Compose<I, O, K>
        where I: Selector<K>, O: Selector<M> {
    const INDEX: [usize; M] = compose(I::INDEX, O::INDEX);
    const PADDED: bool = I::PADDED;
}

const fn compose<const K: usize, const M: usize>(inner: [usize; K], outer: [usize; M])
        -> [usize; M] {
    let mut index = [0; M];
    let mut i = 0;
    while i < M {
        index[i] = inner[outer[i]];
        i += 1;
    }
    index
}

/// The lower half of an `N`-lane vector.
pub struct Lo<const N: usize>;

/// The upper half of an `N`-lane vector.
pub struct Hi<const N: usize>;

/// The even-numbered lanes of an `N`-lane vector.
pub struct Even<const N: usize>;

/// The odd-numbered lanes of an `N`-lane vector.
pub struct Odd<const N: usize>;

const fn stride<const M: usize>(start: usize, step: usize) -> [usize; M] {
    let mut index = [0; M];
    let mut i = 0;
    while i < M {
        index[i] = start + i * step;
        i += 1;
    }
    index
}

// 3-lane vectors are split as if they had four lanes, the fourth being
// padding.
macro_rules! impl_halves {
    ($( $n:literal => $m:literal, $padded:literal );+) => {
        $(
            impl Selector<$m> for Lo<$n> {
                const INDEX: [usize; $m] = stride::<$m>(0, 1);
            }

            impl Selector<$m> for Hi<$n> {
                const INDEX: [usize; $m] = stride::<$m>($m, 1);
                const PADDED: bool = $padded;
            }

            impl Selector<$m> for Even<$n> {
                const INDEX: [usize; $m] = stride::<$m>(0, 2);
            }

            impl Selector<$m> for Odd<$n> {
                const INDEX: [usize; $m] = stride::<$m>(1, 2);
                const PADDED: bool = $padded;
            }
        )+
    };
}

impl_halves!(2 => 1, false; 3 => 2, true; 4 => 2, false; 8 => 4, false; 16 => 8, false);

/// Compile-time bounds check of a selector against a vector width.
pub(crate) struct InBounds<S, const N: usize, const M: usize>(PhantomData<fn() -> S>);

impl<S: Selector<M>, const N: usize, const M: usize> InBounds<S, N, M> {
    pub(crate) const OK: () = assert!(
        fits(&S::INDEX, N, S::PADDED),
        "swizzle index out of range for the vector width"
    );
}

const fn fits<const M: usize>(index: &[usize; M], width: usize, padded: bool) -> bool {
    let limit = if padded && width == 3 { 4 } else { width };
    let mut i = 0;
    while i < M {
        if index[i] >= limit {
            return false;
        }
        i += 1;
    }
    M > 0
}

/// Declares a named selector.
///
/// ```
/// use ocl_swizzle::{selector, prm::Int8};
///
/// selector!(pub Reverse8: 8 = [7, 6, 5, 4, 3, 2, 1, 0]);
///
/// let v = Int8::new(0, 1, 2, 3, 4, 5, 6, 7);
/// assert_eq!(v.swizzle::<Reverse8, 8>().get(), Int8::new(7, 6, 5, 4, 3, 2, 1, 0));
/// ```
#[macro_export]
macro_rules! selector {
    ($vis:vis $name:ident: $m:literal = [$( $idx:expr ),+ $(,)?]) => {
        $vis struct $name;

        impl $crate::Selector<$m> for $name {
            const INDEX: [usize; $m] = [$( $idx ),+];
        }
    };
}
