use super::*;

#[test]
fn png_keeps_alpha_after_unpremultiply() {
    // One opaque red pixel and one half-transparent green pixel, premultiplied.
    let canvas = vec![255, 0, 0, 255, 0, 64, 0, 128];
    let bytes = encode_image(&canvas, 2, 1, OutputFormat::Png).unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
    let px = decoded.get_pixel(1, 0).0;
    assert_eq!(px[3], 128);
    assert!((px[1] as i16 - 128).abs() <= 1);
}

#[test]
fn jpeg_flattens_to_rgb() {
    let canvas = vec![200u8; 4 * 4 * 4];
    let bytes = encode_image(&canvas, 4, 4, OutputFormat::Jpeg).unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert!(!decoded.color().has_alpha());
    assert_eq!((decoded.width(), decoded.height()), (4, 4));
}

#[test]
fn byte_length_mismatch_is_rejected() {
    let err = encode_image(&[0u8; 5], 1, 1, OutputFormat::Png).unwrap_err();
    assert!(matches!(err, TextplateError::Validation(_)));
}
