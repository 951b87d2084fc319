use super::*;

#[test]
fn left_top_puts_top_left_on_the_anchor() {
    let r = resolve_rect(
        Point::new(0, 0),
        100,
        20,
        VerticalAlign::Top,
        HorizontalAlign::Left,
    );
    assert_eq!(r.top_left, Point::new(0, 0));
    assert_eq!(r.bottom_right, Point::new(100, 20));
}

#[test]
fn center_center_straddles_the_anchor() {
    let r = resolve_rect(
        Point::new(0, 0),
        100,
        20,
        VerticalAlign::Center,
        HorizontalAlign::Center,
    );
    assert_eq!(r.top_left, Point::new(-50, -10));
    assert_eq!(r.bottom_right, Point::new(50, 10));
}

// Integer division truncates toward zero for odd extents.
#[test]
fn odd_extents_truncate() {
    let r = resolve_rect(
        Point::new(10, 10),
        5,
        3,
        VerticalAlign::Center,
        HorizontalAlign::Center,
    );
    assert_eq!(r.top_left, Point::new(8, 9));
    assert_eq!(r.width(), 5);
    assert_eq!(r.height(), 3);
}

#[test]
fn negative_anchor_is_not_clamped() {
    let r = resolve_rect(
        Point::new(-30, -7),
        10,
        10,
        VerticalAlign::Top,
        HorizontalAlign::Left,
    );
    assert_eq!(r.top_left, Point::new(-30, -7));
    assert_eq!(r.bottom_right, Point::new(-20, 3));
}
