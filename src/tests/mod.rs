//! Swizzle and vector behaviour tests.
//!
//! The bulk of the accessors are generated, so these exercise each
//! generated shape once and the shared view machinery thoroughly.

mod compose;
mod ops;
mod relational;
mod vector_types;
