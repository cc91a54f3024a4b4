use super::*;

#[test]
fn window_covers_both_operands_with_margin() {
    let l = StageLayout::new(4, 3);
    assert_eq!(l.min_k, -6);
    assert_eq!(l.max_k, 9);
    assert_eq!(l.width, 15.0 * 40.0 + 200.0);
    assert_eq!(l.ks().count(), 16);
    assert!(l.is_visible(-6) && l.is_visible(9));
    assert!(!l.is_visible(10));
}

#[test]
fn rows_are_stacked_with_gap() {
    assert_eq!(StageLayout::row_center(StageRow::Fixed), 100.0);
    assert_eq!(StageLayout::row_center(StageRow::Moving), 260.0);
    assert_eq!(StageLayout::row_center(StageRow::Product), 420.0);
    assert_eq!(StageLayout::new(1, 1).height, 520.0);
}

#[test]
fn k_maps_linearly_from_left_padding() {
    let l = StageLayout::new(4, 3);
    assert_eq!(l.k_to_px(-6), 100.0);
    assert_eq!(l.k_to_px(0), 340.0);
    assert_eq!(l.k_to_px(1) - l.k_to_px(0), UNIT_WIDTH);
}

#[test]
fn stems_grow_upwards_for_positive_values() {
    let l = StageLayout::new(4, 3);
    let (base, tip) = l.stem(StageRow::Fixed, 0, 1.0);
    assert_eq!(base.y, 100.0);
    assert_eq!(tip.y, 70.0);
    let (_, tip) = l.stem(StageRow::Product, 0, -2.0);
    assert_eq!(tip.y, 480.0);
}
