use std::sync::Arc;

use crate::{
    foundation::error::{TextplateError, TextplateResult},
    raster::image::{RasterImage, premultiply_rgba8_in_place},
};

/// Decode encoded image bytes and convert to premultiplied RGBA8.
///
/// Malformed or truncated data surfaces as [`TextplateError::Decode`] before
/// any canvas work happens.
pub fn decode_image(bytes: &[u8]) -> TextplateResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| TextplateError::decode(format!("decode image from memory: {e}")))?;
    let has_alpha = dyn_img.color().has_alpha();
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(RasterImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
        has_alpha,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
