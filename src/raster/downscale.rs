use std::sync::Arc;

pub use image::imageops::FilterType;

use crate::{
    foundation::error::{TextplateError, TextplateResult},
    raster::image::RasterImage,
};

/// Repeatedly halve `input` until one more halving would undershoot the
/// target, resampling each step with `filter`.
///
/// Each step's ratio stays at most 2:1, the validity range of common
/// interpolation kernels, so large shrinks avoid the aliasing a single
/// direct resize produces. The result is within 2x of the target per axis;
/// the caller performs the exact final resample when drawing.
pub fn downscale_quality(
    input: &RasterImage,
    target_w: u32,
    target_h: u32,
    filter: FilterType,
) -> TextplateResult<RasterImage> {
    if target_w < 1 || target_h < 1 {
        return Err(TextplateError::validation(
            "downscale target must be >= 1px per axis",
        ));
    }

    let mut current = input.clone();
    loop {
        let (w, h) = (current.width, current.height);
        if w / 2 <= target_w && h / 2 <= target_h {
            break;
        }
        let w1 = (w / 2).max(1);
        let h1 = (h / 2).max(1);
        current = resample(&current, w1, h1, filter)?;
    }
    Ok(current)
}

/// Resample to exact dimensions, preserving the source's alpha mode.
fn resample(
    input: &RasterImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> TextplateResult<RasterImage> {
    if input.has_alpha {
        let buf =
            image::RgbaImage::from_raw(input.width, input.height, input.rgba8_premul.to_vec())
                .ok_or_else(|| {
                    TextplateError::validation("image byte length does not match dimensions")
                })?;
        let resized = image::imageops::resize(&buf, width, height, filter);
        Ok(RasterImage {
            width,
            height,
            rgba8_premul: Arc::new(resized.into_raw()),
            has_alpha: true,
        })
    } else {
        // Opaque sources stay RGB through every intermediate buffer.
        let mut rgb = Vec::with_capacity(input.rgba8_premul.len() / 4 * 3);
        for px in input.rgba8_premul.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
        }
        let buf = image::RgbImage::from_raw(input.width, input.height, rgb).ok_or_else(|| {
            TextplateError::validation("image byte length does not match dimensions")
        })?;
        let resized = image::imageops::resize(&buf, width, height, filter);
        let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for px in resized.into_raw().chunks_exact(3) {
            rgba.extend_from_slice(px);
            rgba.push(255);
        }
        Ok(RasterImage {
            width,
            height,
            rgba8_premul: Arc::new(rgba),
            has_alpha: false,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/downscale.rs"]
mod tests;
