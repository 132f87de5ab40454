use crate::prm::{Char4, Float2, Float4, Int2, Int4, Long2, Uchar4, Uint2, Ushort4};

#[test]
fn vector_vector() {
    let a = Int4::new(1, 2, 3, 4);
    let b = Int4::new(10, 20, 30, 40);
    assert_eq!(a + b, Int4::new(11, 22, 33, 44));
    assert_eq!(b - a, Int4::new(9, 18, 27, 36));
    assert_eq!(a * b, Int4::new(10, 40, 90, 160));
    assert_eq!(b / a, Int4::new(10, 10, 10, 10));
    assert_eq!(b % Int4::splat(7), Int4::new(3, 6, 2, 5));
    assert_eq!(a & Int4::splat(1), Int4::new(1, 0, 1, 0));
    assert_eq!(a | Int4::splat(8), Int4::new(9, 10, 11, 12));
    assert_eq!(a ^ a, Int4::zero());
}

#[test]
fn vector_scalar() {
    let a = Float4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(a * 2.0, Float4::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(2.0 * a, Float4::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(12.0 / a, Float4::new(12.0, 6.0, 4.0, 3.0));
    assert_eq!(-a, Float4::new(-1.0, -2.0, -3.0, -4.0));
    assert_eq!(10 - Int2::new(1, 2), Int2::new(9, 8));
    assert_eq!(!Uchar4::new(0, 1, 0xf0, 0xff), Uchar4::new(0xff, 0xfe, 0x0f, 0));
}

#[test]
fn vector_view() {
    let v = Int4::new(1, 2, 3, 4);
    assert_eq!(Int2::new(10, 10) - v.zw(), Int2::new(7, 6));
    assert_eq!(v.xy() + v.zw(), Int2::new(4, 6));
    assert_eq!(v.wzyx() * v, Int4::new(4, 6, 6, 4));
    assert_eq!(v.xy() * 3, Int2::new(3, 6));
    assert_eq!(3 * v.xy(), Int2::new(3, 6));
    assert_eq!(-v.yx(), Int2::new(-2, -1));
}

#[test]
fn compound_assignment() {
    let mut v = Int4::new(1, 2, 3, 4);
    v += 1;
    assert_eq!(v, Int4::new(2, 3, 4, 5));
    v *= Int4::new(1, 0, 1, 0);
    assert_eq!(v, Int4::new(2, 0, 4, 0));

    let other = Int4::new(5, 6, 7, 8);
    let mut xz = v.xz_mut();
    xz -= other.yx();
    assert_eq!(v, Int4::new(-4, 0, -1, 0));

    let mut yw = v.yw_mut();
    yw |= Int2::new(3, 12);
    yw <<= 1;
    assert_eq!(v, Int4::new(-4, 6, -1, 24));
}

#[test]
fn compound_assignment_repeated_index() {
    let mut v = Int2::new(1, 2);
    let mut xx = v.xx_mut();
    xx += Int2::new(10, 20);
    // Both lanes read x before either is written. The second write wins.
    assert_eq!(v, Int2::new(21, 2));
}

#[test]
fn shifts_wrap_amount() {
    assert_eq!(Int4::splat(1) << 33, Int4::splat(2));
    assert_eq!(Uint2::new(0x80, 0x80) >> Uint2::new(4, 36), Uint2::new(8, 8));
    assert_eq!(Char4::splat(1) << Char4::new(0, 7, 8, 9), Char4::new(1, -128, 1, 2));
    assert_eq!(1u32 << Uint2::new(1, 33), Uint2::new(2, 2));
}

#[test]
fn increment_decrement() {
    let mut v = Float2::new(0.5, 1.5);
    assert_eq!(v.post_increment(), Float2::new(0.5, 1.5));
    assert_eq!(v, Float2::new(1.5, 2.5));
    assert_eq!(v.decrement(), Float2::new(0.5, 1.5));
    assert_eq!(v.post_decrement(), Float2::new(0.5, 1.5));
    assert_eq!(v.increment(), Float2::new(0.5, 1.5));

    let mut v = Int4::new(1, 2, 3, 4);
    assert_eq!(v.zw_mut().increment(), Int2::new(4, 5));
    assert_eq!(v.yx_mut().post_decrement(), Int2::new(2, 1));
    assert_eq!(v, Int4::new(0, 1, 4, 5));
}

#[test]
fn integer_lanes_wrap() {
    let v = Uchar4::new(255, 1, 2, 3);
    let x: u8 = v.x() + 1u8;
    assert_eq!(x, 0);
    assert_eq!(v + 1u8, Uchar4::new(0, 2, 3, 4));
    assert_eq!(0u8 - v, Uchar4::new(1, 255, 254, 253));
    assert_eq!(v * 128u8, Uchar4::new(128, 128, 0, 128));

    let mut v = Uint2::new(0, 5);
    assert_eq!(v.x_mut().decrement(), u32::MAX);
    assert_eq!(v.decrement(), Uint2::new(u32::MAX - 1, 4));

    let mut v = Uchar4::splat(200);
    let mut xy = v.xy_mut();
    xy += 100u8;
    assert_eq!(v, Uchar4::new(44, 44, 200, 200));

    let mut v = Ushort4::splat(u16::MAX);
    assert_eq!(v.post_increment(), Ushort4::splat(u16::MAX));
    assert_eq!(v, Ushort4::zero());

    assert_eq!(-Int2::new(i32::MIN, 1), Int2::new(i32::MIN, -1));
    assert_eq!(Long2::new(i64::MAX, 0) + 1i64, Long2::new(i64::MIN, 1));
    assert_eq!(Char4::splat(64) * 2i8, Char4::splat(-128));
}

#[test]
fn float_lanes_do_not_wrap() {
    let v = Float2::new(f32::MAX, 1.0);
    assert_eq!(v * 2.0f32, Float2::new(f32::INFINITY, 2.0));
    assert_eq!(-v.y(), -1.0);
}
