use std::{borrow::Cow, sync::Arc};

use crate::foundation::{
    core::Rgba8,
    error::{TextplateError, TextplateResult},
};

#[derive(Clone)]
/// Font face bytes plus the pixel size used for measurement and rendering.
pub struct FontSpec {
    /// Raw TTF/OTF face bytes.
    pub data: Arc<Vec<u8>>,
    /// Font size in pixels.
    pub size_px: f32,
}

impl std::fmt::Debug for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSpec")
            .field("data_len", &self.data.len())
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl FontSpec {
    /// Construct a font spec from face bytes and pixel size.
    pub fn new(data: impl Into<Vec<u8>>, size_px: f32) -> Self {
        Self {
            data: Arc::new(data.into()),
            size_px,
        }
    }
}

/// Glyph-metrics context for one font face at one size.
///
/// Owns the Parley font and layout contexts plus the line metrics captured at
/// construction; the same scalar line height is applied uniformly to every
/// wrapped line. Exclusively owned per render call, so concurrent renders
/// never share mutable state.
pub struct TextMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
    font_data: vello_cpu::peniko::FontData,
    size_px: f32,
    ascent: f32,
    descent: f32,
    leading: f32,
}

impl core::fmt::Debug for TextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // `parley::FontContext`/`LayoutContext` are opaque and not `Debug`; skip them.
        f.debug_struct("TextMeasurer")
            .field("family_name", &self.family_name)
            .field("size_px", &self.size_px)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .field("leading", &self.leading)
            .finish_non_exhaustive()
    }
}

impl TextMeasurer {
    /// Register `font` and capture its line metrics.
    pub fn new(font: &FontSpec) -> TextplateResult<Self> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(TextplateError::validation(
                "font size_px must be finite and > 0",
            ));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.data.as_ref().clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TextplateError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TextplateError::validation("registered font family has no name"))?
            .to_string();

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.data.as_ref().clone()),
            0,
        );

        let mut out = Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_data,
            size_px: font.size_px,
            ascent: 0.0,
            descent: 0.0,
            leading: 0.0,
        };

        // Probe layout to capture the face's line metrics at this size.
        let probe = out.layout_line("Ag", Rgba8::default());
        if let Some(line) = probe.lines().next() {
            let m = line.metrics();
            out.ascent = m.ascent;
            out.descent = m.descent;
            out.leading = m.leading;
        }
        Ok(out)
    }

    /// Uniform line height in pixels: ascent + descent + leading, rounded up.
    pub fn line_height(&self) -> i32 {
        (self.ascent + self.descent + self.leading).ceil() as i32
    }

    /// Baseline distance from the line top in pixels, rounded up.
    pub fn ascent(&self) -> i32 {
        self.ascent.ceil() as i32
    }

    /// Measured advance width of `s` in pixels, rounded up.
    pub fn string_width(&mut self, s: &str) -> i32 {
        let layout = self.layout_line(s, Rgba8::default());
        let mut w = 0.0f32;
        for line in layout.lines() {
            w = w.max(line.metrics().advance);
        }
        w.ceil() as i32
    }

    /// Build the unconstrained single-paragraph layout used to draw one line.
    pub(crate) fn layout_line(&mut self, text: &str, brush: Rgba8) -> parley::Layout<Rgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Font data handed to the glyph rasterizer.
    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font_data
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
