//! Standard error type for ocl-swizzle.
//!
//! Static swizzles cannot fail at runtime (every selection is checked by the
//! compiler). Errors only arise from the dynamic entry points: building a
//! vector from a slice and runtime [`Pattern`](crate::Pattern)s.

/// Ocl-swizzle error result type.
pub type Result<T> = ::std::result::Result<T, Error>;

/// An enum of all the ways a dynamic vector or swizzle operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("A slice of length {found} cannot fill a {expected}-lane vector.")]
    Length { expected: usize, found: usize },
    #[error("Swizzle pattern is empty.")]
    EmptyPattern,
    #[error("Unknown swizzle component '{0}'.")]
    UnknownComponent(char),
    #[error("Swizzle pattern '{0}' mixes component families.")]
    MixedFamilies(String),
    #[error("Swizzle pattern selects {0} components (must be 1, 2, 3, 4, 8 or 16).")]
    PatternLength(usize),
    #[error("Component index {index} is out of range for a {width}-lane vector.")]
    OutOfRange { index: usize, width: usize },
    #[error("The '{family}' components are only available on vectors of up to 4 lanes \
        (vector has {width}).")]
    FamilyWidth { family: &'static str, width: usize },
    #[error("{found} values were supplied for a {expected}-component selection.")]
    Arity { expected: usize, found: usize },
}
