use crate::{
    foundation::core::{Point, Rgba8},
    layout::anchor::{HorizontalAlign, VerticalAlign},
    raster::encode::OutputFormat,
};

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Placement and styling for an overlay render.
pub struct OverlaySpec {
    /// Anchor point the text rectangle is resolved against; may lie outside
    /// the background.
    pub anchor: Point,
    /// Wrapping width limit in pixels.
    pub width_limit: i32,
    /// Text fill color.
    #[serde(default = "default_text_color")]
    pub color: Rgba8,
    /// Horizontal alignment of the text block relative to the anchor.
    #[serde(default)]
    pub h_align: HorizontalAlign,
    /// Vertical alignment of the text block relative to the anchor.
    #[serde(default)]
    pub v_align: VerticalAlign,
    /// Encoded output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Canvas fill used only for opaque formats.
    #[serde(default = "default_background_fill")]
    pub background_fill: Rgba8,
}

fn default_text_color() -> Rgba8 {
    Rgba8::BLACK
}

fn default_background_fill() -> Rgba8 {
    Rgba8::WHITE
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Geometry for a badge render: an icon square next to a wrapped text strip.
pub struct BadgeSpec {
    /// Side of the square the icon is fitted into, in pixels.
    pub icon_size: i32,
    /// Gap between the icon square and the text strip, in pixels.
    pub gap: i32,
    /// Wrapping width limit for the text strip, in pixels.
    pub text_width_limit: i32,
}

impl Default for BadgeSpec {
    fn default() -> Self {
        Self {
            icon_size: 51,
            gap: 3,
            text_width_limit: 338,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/model.rs"]
mod tests;
