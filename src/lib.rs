//! OpenCL/SYCL-style vector types with component swizzles.
//!
//! Vector fields can be accessed with index operations (`[0]`, `[1]`, ...)
//! or, as within kernels, through swizzles: `.x()`, `.wzyx()`, `.rgb()`,
//! `.s7()`, `.hi()`, `.even()`, etc. A swizzle does not copy anything. It is
//! a view over the lanes of the vector it was taken from and may be read,
//! written, combined with other operands or swizzled again:
//!
//! ```
//! use ocl_swizzle::prm::Int4;
//!
//! let mut v = Int4::new(1, 2, 3, 4);
//! assert_eq!(v.wzyx().get(), Int4::new(4, 3, 2, 1));
//!
//! let mut wzyx = v.wzyx_mut();
//! wzyx += Int4::new(10, 20, 30, 40);
//! assert_eq!(v, Int4::new(41, 32, 23, 14));
//! ```
//!
//! Selecting a single component yields a scalar rather than a one-lane
//! vector, exactly as a kernel would see it:
//!
//! ```
//! use ocl_swizzle::prm::Float4;
//!
//! let v = Float4::new(1.0, 2.0, 3.0, 4.0);
//! let z: f32 = v.z() * 2.0;
//! assert_eq!(z, 6.0);
//! assert!(v.z() == 3.0);
//! ```
//!
//! Every selection is checked at compile time. Letter accessors only exist
//! for the widths they are valid on:
//!
//! ```compile_fail
//! use ocl_swizzle::prm::Int2;
//!
//! let v = Int2::new(1, 2);
//! let _ = v.z();
//! ```
//!
//! and generic index lists are bounds checked when instantiated:
//!
//! ```compile_fail
//! use ocl_swizzle::prm::Int4;
//! use ocl_swizzle::Pick2;
//!
//! let v = Int4::new(1, 2, 3, 4);
//! let _ = v.swizzle::<Pick2<0, 4>, 2>().get();
//! ```
//!
//! A selection only accepts values of its own width:
//!
//! ```compile_fail
//! use ocl_swizzle::prm::{Int3, Int4};
//!
//! let mut v = Int4::new(1, 2, 3, 4);
//! v.xy_mut().set(Int3::new(7, 8, 9));
//! ```
//!
//! and a single component never becomes a one-lane vector:
//!
//! ```compile_fail
//! use ocl_swizzle::prm::{Int, Int4};
//!
//! let v = Int4::new(1, 2, 3, 4);
//! let _ = Int::from(v.x());
//! ```
//!
//! Assigning a swizzle of a vector to another swizzle of the same vector is
//! rejected by the borrow checker. Read the source first, or use
//! [`Vector::reassign`], which does the same thing:
//!
//! ```
//! use ocl_swizzle::prm::Int2;
//! use ocl_swizzle::Pick2;
//!
//! let mut v = Int2::new(1, 2);
//! let yx = v.yx().get();
//! v.xy_mut().set(yx);
//! assert_eq!(v, Int2::new(2, 1));
//!
//! v.reassign::<Pick2<0, 1>, Pick2<1, 0>, 2>();
//! assert_eq!(v, Int2::new(1, 2));
//! ```

#![doc(html_root_url = "https://docs.rs/ocl-swizzle/0.1.0")]

#[cfg(test)]
mod tests;
mod accessors;
mod ops;
mod relational;
mod resolve;
mod scalar;
mod selector;
mod swizzle;
mod vector;
pub mod error;
pub mod pattern;

pub use crate::error::{Error, Result};
pub use crate::pattern::{Family, Pattern};
pub use crate::relational::{select, Relational};
pub use crate::resolve::{Operand, Resolve, Width};
pub use crate::scalar::{MaskLane, Scalar};
pub use crate::selector::{Compose, Even, Hi, Lo, Odd, Pick1, Pick16, Pick2, Pick3, Pick4, Pick8,
    Selector};
pub use crate::swizzle::{Swizzle, SwizzleMut};
pub use crate::vector::Vector;

pub mod prm {
    //! OpenCL vector type aliases.
    //!
    //! Names follow the kernel language (`int4`, `float3`, ...). 3-component
    //! vectors report the byte size of their 4-component counterparts, as
    //! they do on the device.

    use crate::Vector;

    macro_rules! cl_vec_aliases {
        ($ty:ty: $n1:ident, $n2:ident, $n3:ident, $n4:ident, $n8:ident, $n16:ident) => {
            pub type $n1 = Vector<$ty, 1>;
            pub type $n2 = Vector<$ty, 2>;
            pub type $n3 = Vector<$ty, 3>;
            pub type $n4 = Vector<$ty, 4>;
            pub type $n8 = Vector<$ty, 8>;
            pub type $n16 = Vector<$ty, 16>;
        };
    }

    cl_vec_aliases!(i8: Char, Char2, Char3, Char4, Char8, Char16);
    cl_vec_aliases!(u8: Uchar, Uchar2, Uchar3, Uchar4, Uchar8, Uchar16);
    cl_vec_aliases!(i16: Short, Short2, Short3, Short4, Short8, Short16);
    cl_vec_aliases!(u16: Ushort, Ushort2, Ushort3, Ushort4, Ushort8, Ushort16);
    cl_vec_aliases!(i32: Int, Int2, Int3, Int4, Int8, Int16);
    cl_vec_aliases!(u32: Uint, Uint2, Uint3, Uint4, Uint8, Uint16);
    cl_vec_aliases!(i64: Long, Long2, Long3, Long4, Long8, Long16);
    cl_vec_aliases!(u64: Ulong, Ulong2, Ulong3, Ulong4, Ulong8, Ulong16);
    cl_vec_aliases!(f32: Float, Float2, Float3, Float4, Float8, Float16);
    cl_vec_aliases!(f64: Double, Double2, Double3, Double4, Double8, Double16);
}
