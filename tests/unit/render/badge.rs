use super::*;

#[test]
fn square_source_fills_the_square() {
    assert_eq!(fit_square(64, 64, 16), (0, 0, 16, 16));
    assert_eq!(fit_square(50, 50, 50), (0, 0, 50, 50));
}

// Offsets and extents truncate independently, so the 12.5px margins collapse
// to 12 on the leading edge and the trailing margin becomes 13: a 1px bias
// inherited from the float square-fit math.
#[test]
fn wide_source_is_letterboxed_with_truncation_bias() {
    let (dx, dy, dw, dh) = fit_square(100, 50, 50);
    assert_eq!((dx, dy, dw, dh), (0, 12, 50, 25));
    assert_eq!(50 - (dy + dh), 13);
}

#[test]
fn tall_source_is_pillarboxed() {
    assert_eq!(fit_square(50, 100, 50), (12, 0, 25, 50));
}

#[test]
fn small_source_upscales_to_fill() {
    assert_eq!(fit_square(10, 20, 40), (10, 0, 20, 40));
}
