//! Named component accessors.
//!
//! `x()`..`w()` and `r()`..`a()` combinations of up to four components for
//! vectors of up to four lanes, `s0()`..`sf()` for every width, each with a
//! `_mut` form. Swizzles of 2, 3 and 4 lanes carry the same names for
//! swizzling again (`v.xyz().zy()`). The method bodies are generated by the
//! build script.

use crate::selector::{Compose, Pick1, Pick2, Pick3, Pick4, Selector};
use crate::{Scalar, Swizzle, SwizzleMut, Vector};

include!(concat!(env!("OUT_DIR"), "/accessors.rs"));
