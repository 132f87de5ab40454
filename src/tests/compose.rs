use crate::prm::{Int2, Int3, Int4, Int8};
use crate::{Compose, Pick2, Pick3, Selector};

#[test]
fn reswizzle_matches_composed_index_list() {
    let v = Int4::new(1, 2, 3, 4);
    assert_eq!(v.zyx().yx().get(), Int2::new(2, 3));
    assert_eq!(v.zyx().yx().get(), v.yz().get());
    assert_eq!(<Compose<Pick3<2, 1, 0>, Pick2<1, 0>, 3> as Selector<2>>::INDEX, [1, 2]);
}

#[test]
fn reswizzle_to_scalar() {
    let v = Int4::new(1, 2, 3, 4);
    let w: i32 = v.wzyx().x().get();
    assert_eq!(w, 4);
    assert_eq!(v.xyz().zy().x().get(), 3);
    assert_eq!(v.wzyx().s2().get(), 2);
}

#[test]
fn reswizzle_write() {
    let mut v = Int4::new(1, 2, 3, 4);
    v.wzyx_mut().xy().set(Int2::new(7, 8));
    assert_eq!(v, Int4::new(1, 2, 8, 7));

    v.zyx_mut().zyx().set(Int3::new(0, 0, 0));
    assert_eq!(v, Int4::new(0, 0, 0, 7));
}

#[test]
fn reswizzle_of_halves() {
    let v = Int8::new(0, 1, 2, 3, 4, 5, 6, 7);
    assert_eq!(v.hi().even().get(), Int2::new(4, 6));
    assert_eq!(v.odd().wzyx().get(), Int4::new(7, 5, 3, 1));
    assert_eq!(v.lo().lo().get(), Int2::new(0, 1));
    assert_eq!(v.hi().hi().hi().get(), 7);
}
