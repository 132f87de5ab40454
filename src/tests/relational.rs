use crate::prm::{Char4, Double2, Float4, Int2, Int4, Long2, Uchar4};
use crate::{select, Relational};

#[test]
fn masks_are_all_ones_or_zero() {
    let a = Int4::new(1, 2, 3, 4);
    let b = Int4::new(4, 2, 2, 4);
    assert_eq!(a.eq_mask(b), Int4::new(0, -1, 0, -1));
    assert_eq!(a.ne_mask(b), Int4::new(-1, 0, -1, 0));
    assert_eq!(a.lt_mask(b), Int4::new(-1, 0, 0, 0));
    assert_eq!(a.le_mask(b), Int4::new(-1, -1, 0, -1));
    assert_eq!(a.gt_mask(b), Int4::new(0, 0, -1, 0));
    assert_eq!(a.ge_mask(b), Int4::new(0, -1, -1, -1));
}

#[test]
fn mask_lane_width_follows_element() {
    let f = Float4::new(0.0, 1.0, 2.0, 3.0);
    let m: Int4 = f.gt_mask(1.0);
    assert_eq!(m, Int4::new(0, 0, -1, -1));

    let u = Uchar4::new(0, 200, 100, 255);
    let m: Char4 = u.ge_mask(Uchar4::splat(200));
    assert_eq!(m, Char4::new(0, -1, 0, -1));

    let d = Double2::new(-1.0, 1.0);
    let m: Long2 = d.lt_mask(0.0);
    assert_eq!(m, Long2::new(-1, 0));
}

#[test]
fn logical() {
    let a = Int4::new(0, 5, 0, -3);
    let b = Int4::new(0, 0, 7, 1);
    assert_eq!(a.and_mask(b), Int4::new(0, 0, 0, -1));
    assert_eq!(a.or_mask(b), Int4::new(0, -1, -1, -1));
    assert_eq!(a.not_mask(), Int4::new(-1, 0, -1, 0));
}

#[test]
fn view_masks() {
    let v = Int4::new(1, 2, 3, 4);
    let m: Int2 = v.wz().gt_mask(v.xy());
    assert_eq!(m, Int2::new(-1, -1));
    assert_eq!(v.xyz().eq_mask(2), crate::prm::Int3::new(0, -1, 0));

    let mut v = v;
    let m: Int2 = v.yx_mut().lt_mask(2);
    assert_eq!(m, Int2::new(0, -1));
}

#[test]
fn select_by_mask() {
    let a = Int4::new(1, 2, 3, 4);
    let b = Int4::new(10, 20, 30, 40);
    assert_eq!(select(a, b, a.ge_mask(3)), Int4::new(1, 2, 30, 40));
    assert_eq!(select(a, b, Int4::new(0, 1, 0, i32::MIN)), Int4::new(1, 2, 3, 40));
}
