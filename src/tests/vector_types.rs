use crate::prm::{Double4, Float, Float3, Float4, Int, Int2, Int3, Int4, Uchar16, Ulong2};
use crate::{Error, Vector};

#[test]
fn construct() {
    let v = Int4::new(1, 2, 3, 4);
    assert_eq!(v.into_array(), [1, 2, 3, 4]);
    assert_eq!(Int4::from([1, 2, 3, 4]), v);
    assert_eq!(<[i32; 4]>::from(v), [1, 2, 3, 4]);
    assert_eq!(Int4::splat(7).as_array(), &[7; 4]);
    assert_eq!(Int4::default(), Int4::zero());
    assert!(Int4::zero().is_zero());
    assert!(!Int4::one().is_zero());
    assert_eq!(Float::new(2.5).into_array(), [2.5]);
}

#[test]
fn one_lane_vector() {
    let mut v = Int::new(7);
    assert_eq!(v.x().get(), 7);
    assert_eq!(v.s0().get(), 7);
    assert_eq!(v.xxx().get(), Int3::new(7, 7, 7));
    v.x_mut().set(9);
    assert_eq!(v, Int::new(9));
    assert_eq!(v.byte_size(), 4);
}

#[test]
fn from_slice() {
    assert_eq!(Int3::try_from(&[1, 2, 3][..]), Ok(Int3::new(1, 2, 3)));
    assert_eq!(Int3::try_from(&[1, 2][..]), Err(Error::Length { expected: 3, found: 2 }));
}

#[test]
fn index_and_slice_access() {
    let mut v = Float4::new(1.0, 2.0, 3.0, 4.0);
    v[2] = 30.0;
    assert_eq!(v[2], 30.0);
    assert_eq!(v.len(), 4);
    assert_eq!(v.iter().sum::<f32>(), 37.0);
    v.swap(0, 3);
    assert_eq!(v, Float4::new(4.0, 2.0, 30.0, 1.0));
}

#[test]
fn sizes() {
    assert_eq!(Float4::zero().size(), 4);
    assert_eq!(Float4::zero().byte_size(), 16);
    assert_eq!(Float3::zero().size(), 3);
    assert_eq!(Float3::zero().byte_size(), 16);
    assert_eq!(Uchar16::zero().byte_size(), 16);
    assert_eq!(Ulong2::zero().byte_size(), 16);
    assert_eq!(Int::zero().byte_size(), 4);
}

#[test]
#[allow(deprecated)]
fn sizes_deprecated() {
    assert_eq!(Double4::zero().get_count(), 4);
    assert_eq!(Double4::zero().get_size(), 32);
}

#[test]
fn convert() {
    let v = Float4::new(1.7, -2.2, 300.0, 0.0);
    assert_eq!(v.convert::<i32>(), Int4::new(1, -2, 300, 0));
    assert_eq!(Int2::new(-1, 256).convert::<u8>(), Vector::<u8, 2>::new(255, 0));
}

#[test]
fn display() {
    assert_eq!(Int3::new(1, -2, 3).to_string(), "(1, -2, 3)");
    assert_eq!(Float4::new(0.5, 1.0, 1.5, 2.0).to_string(), "(0.5, 1, 1.5, 2)");
}
