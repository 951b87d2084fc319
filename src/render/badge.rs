use crate::{
    foundation::core::Rgba8,
    foundation::error::TextplateResult,
    raster::downscale::{FilterType, downscale_quality},
    raster::encode::{OutputFormat, encode_image},
    raster::image::RasterImage,
    render::model::BadgeSpec,
    render::surface::Surface,
    text::measure::{FontSpec, TextMeasurer},
    text::segment::{SeparatorClasses, segment},
    text::wrap::wrap,
};

/// Render an icon-plus-text badge and encode it as PNG.
///
/// The canvas is `icon_size + gap + text_width` wide and as tall as the
/// wrapped text block or the icon square, whichever is larger. The text strip
/// is white-filled and the lines drawn black; the icon is fitted into its
/// square with centered letterboxing.
#[tracing::instrument(skip(text, icon, font))]
pub fn render_badge(
    text: &str,
    icon: &RasterImage,
    font: &FontSpec,
    spec: &BadgeSpec,
) -> TextplateResult<Vec<u8>> {
    let mut measurer = TextMeasurer::new(font)?;
    let classes = SeparatorClasses::new();
    let words = segment(text, |c| classes.is_separator(c));
    let wrapped = wrap(&words, |s| measurer.string_width(s), spec.text_width_limit);

    let line_height = measurer.line_height();
    let text_w = wrapped.max_line_width;
    let canvas_w = spec.icon_size + spec.gap + text_w;
    let canvas_h = (wrapped.lines.len() as i32 * line_height).max(spec.icon_size);

    let mut surface = Surface::new(canvas_w.max(0) as u32, canvas_h.max(0) as u32)?;
    surface.fill_rect(spec.icon_size + spec.gap, 0, text_w, canvas_h, Rgba8::WHITE);
    for (i, line) in wrapped.lines.iter().enumerate() {
        let layout = measurer.layout_line(line, Rgba8::BLACK);
        surface.draw_text_line(
            &layout,
            measurer.font_data(),
            f64::from(spec.icon_size + spec.gap),
            f64::from(i as i32 * line_height),
        );
    }
    draw_icon_square(&mut surface, icon, spec.icon_size)?;

    let canvas = surface.finish()?;
    encode_image(
        &canvas.rgba8_premul,
        canvas.width,
        canvas.height,
        OutputFormat::Png,
    )
}

/// Fit `icon` into the `size` x `size` square at the canvas origin.
///
/// Degenerate source dimensions are reported and the draw skipped; the badge
/// still renders its text-only result.
fn draw_icon_square(surface: &mut Surface, icon: &RasterImage, size: i32) -> TextplateResult<()> {
    let sw = icon.width as i32;
    let sh = icon.height as i32;
    if sw < 1 || sh < 1 {
        tracing::error!(sw, sh, "invalid icon source dimensions, skipping icon draw");
        return Ok(());
    }
    let (dx, dy, dw, dh) = fit_square(sw, sh, size);
    if dw < 1 || dh < 1 {
        tracing::error!(dw, dh, "degenerate icon fit, skipping icon draw");
        return Ok(());
    }

    let scaled = downscale_quality(icon, dw as u32, dh as u32, FilterType::Triangle)?;
    surface.draw_image(
        &scaled,
        f64::from(dx),
        f64::from(dy),
        f64::from(dw),
        f64::from(dh),
    )
}

/// Destination placement for fitting a `src_w` x `src_h` image into a
/// `size` x `size` square: `(dx, dy, dw, dh)`.
///
/// Offsets and extents are truncated independently from float division, so
/// centering can carry a 1px bias toward the top-left for odd remainders.
pub(crate) fn fit_square(src_w: i32, src_h: i32, size: i32) -> (i32, i32, i32, i32) {
    let r = (src_w as f32 / size as f32).max(src_h as f32 / size as f32);
    let dwf = src_w as f32 / r;
    let dw = dwf as i32;
    let dx = ((size as f32 - dwf) / 2.0) as i32;
    let dhf = src_h as f32 / r;
    let dh = dhf as i32;
    let dy = ((size as f32 - dhf) / 2.0) as i32;
    (dx, dy, dw, dh)
}

#[cfg(test)]
#[path = "../../tests/unit/render/badge.rs"]
mod tests;
