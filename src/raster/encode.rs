use std::io::Cursor;

use crate::{
    foundation::error::{TextplateError, TextplateResult},
    raster::image::unpremultiply_rgba8_in_place,
};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
/// Encoded output format for a finished canvas.
pub enum OutputFormat {
    /// PNG; the canvas keeps its alpha channel.
    #[default]
    Png,
    /// JPEG; the canvas is background-filled before drawing and flattened.
    Jpeg,
}

impl OutputFormat {
    /// Whether the format cannot represent transparency.
    pub fn is_opaque(self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

/// Encode a premultiplied RGBA8 canvas to the requested output format.
///
/// PNG keeps the alpha channel (unpremultiplied back to straight alpha);
/// JPEG flattens to RGB — opaque-format canvases are background-filled before
/// any drawing, so discarded alpha is always 255.
pub fn encode_image(
    canvas_premul: &[u8],
    width: u32,
    height: u32,
    format: OutputFormat,
) -> TextplateResult<Vec<u8>> {
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    if canvas_premul.len() != expected {
        return Err(TextplateError::validation(
            "canvas byte length does not match dimensions",
        ));
    }

    let mut straight = canvas_premul.to_vec();
    unpremultiply_rgba8_in_place(&mut straight);

    let mut out = Vec::new();
    match format {
        OutputFormat::Png => {
            let buf = image::RgbaImage::from_raw(width, height, straight)
                .ok_or_else(|| TextplateError::encode("canvas does not fit an rgba buffer"))?;
            image::DynamicImage::ImageRgba8(buf)
                .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
                .map_err(|e| TextplateError::encode(format!("encode png: {e}")))?;
        }
        OutputFormat::Jpeg => {
            let mut rgb = Vec::with_capacity(straight.len() / 4 * 3);
            for px in straight.chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
            }
            let buf = image::RgbImage::from_raw(width, height, rgb)
                .ok_or_else(|| TextplateError::encode("canvas does not fit an rgb buffer"))?;
            image::DynamicImage::ImageRgb8(buf)
                .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Jpeg)
                .map_err(|e| TextplateError::encode(format!("encode jpeg: {e}")))?;
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/encode.rs"]
mod tests;
