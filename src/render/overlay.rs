use crate::{
    foundation::core::Rect,
    foundation::error::TextplateResult,
    layout::anchor::resolve_rect,
    raster::encode::encode_image,
    raster::image::RasterImage,
    render::model::OverlaySpec,
    render::surface::Surface,
    text::escape::unescape_unicode,
    text::measure::{FontSpec, TextMeasurer},
    text::segment::{SeparatorClasses, segment},
    text::wrap::wrap,
};

/// Resolved canvas geometry for one overlay render.
///
/// The canvas covers the union of the background at the origin and the text
/// rectangle; both draw offsets are shifted so the union's minimum lands at
/// (0, 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OverlayPlan {
    pub(crate) canvas_w: i32,
    pub(crate) canvas_h: i32,
    pub(crate) bg_x: i32,
    pub(crate) bg_y: i32,
    pub(crate) text_x: i32,
    pub(crate) text_y: i32,
}

pub(crate) fn plan_overlay(bg_w: i32, bg_h: i32, text_rect: Rect) -> OverlayPlan {
    let min_x = text_rect.left().min(0);
    let min_y = text_rect.top().min(0);
    let max_x = text_rect.right().max(bg_w);
    let max_y = text_rect.bottom().max(bg_h);
    OverlayPlan {
        canvas_w: max_x - min_x,
        canvas_h: max_y - min_y,
        bg_x: -min_x,
        bg_y: -min_y,
        text_x: text_rect.left() - min_x,
        text_y: text_rect.top() - min_y,
    }
}

/// Render `text` onto `background` at an anchored, aligned position and
/// encode the result.
///
/// Unicode escapes of the form `\u{2764}` in `text` are unescaped before
/// segmentation. The canvas grows past the background wherever the resolved
/// text rectangle extends beyond it, in any direction; for PNG the grown
/// canvas is transparent, for JPEG it is filled with the configured
/// background color first.
#[tracing::instrument(skip(background, text, font))]
pub fn render_overlay(
    background: &RasterImage,
    text: &str,
    font: &FontSpec,
    spec: &OverlaySpec,
) -> TextplateResult<Vec<u8>> {
    let mut measurer = TextMeasurer::new(font)?;
    let classes = SeparatorClasses::new();
    let text = unescape_unicode(text);
    let words = segment(&text, |c| classes.is_separator(c));
    let wrapped = wrap(&words, |s| measurer.string_width(s), spec.width_limit);

    let line_height = measurer.line_height();
    let block_h = wrapped.lines.len() as i32 * line_height;
    let text_rect = resolve_rect(
        spec.anchor,
        wrapped.max_line_width,
        block_h,
        spec.v_align,
        spec.h_align,
    );
    let plan = plan_overlay(background.width as i32, background.height as i32, text_rect);

    let mut surface = Surface::new(plan.canvas_w as u32, plan.canvas_h as u32)?;
    if spec.format.is_opaque() {
        surface.fill_rect(0, 0, plan.canvas_w, plan.canvas_h, spec.background_fill);
    }
    surface.draw_image(
        background,
        f64::from(plan.bg_x),
        f64::from(plan.bg_y),
        f64::from(background.width),
        f64::from(background.height),
    )?;
    for (i, line) in wrapped.lines.iter().enumerate() {
        let layout = measurer.layout_line(line, spec.color);
        surface.draw_text_line(
            &layout,
            measurer.font_data(),
            f64::from(plan.text_x),
            f64::from(plan.text_y + i as i32 * line_height),
        );
    }

    let canvas = surface.finish()?;
    encode_image(
        &canvas.rgba8_premul,
        canvas.width,
        canvas.height,
        spec.format,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
