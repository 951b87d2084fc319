//! Textplate is a text-to-image compositing engine.
//!
//! Given a background raster image, an arbitrary Unicode string, an anchor
//! position and a width constraint, it produces a new raster image with the
//! text laid out and rendered onto (or around) the background.
//!
//! # Pipeline overview
//!
//! 1. **Segment**: split text into words at spaces and ideographic codepoints
//! 2. **Wrap**: greedily pack words into lines under a pixel width limit
//! 3. **Resolve**: place the wrapped block's rectangle relative to an anchor
//! 4. **Composite**: allocate the union canvas, draw background and lines
//! 5. **Encode**: PNG (transparent canvas) or JPEG (background-filled)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO**: decoding consumes byte slices, encoding returns byte buffers;
//!   reading and writing them is the caller's concern.
//! - **No shared state**: every render call owns its buffers and measurement
//!   context exclusively, so independent calls can run in parallel.
//!
//! # Entry points
//!
//! [`render_overlay`] places wrapped text anywhere on a background, growing
//! the canvas when the text rectangle extends past it. [`render_badge`]
//! composes an icon square next to a wrapped text strip.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod raster;
mod render;
mod text;

pub use foundation::core::{Point, Rect, Rgba8};
pub use foundation::error::{TextplateError, TextplateResult};
pub use layout::anchor::{HorizontalAlign, VerticalAlign, resolve_rect};
pub use raster::decode::decode_image;
pub use raster::downscale::{FilterType, downscale_quality};
pub use raster::encode::{OutputFormat, encode_image};
pub use raster::image::RasterImage;
pub use render::badge::render_badge;
pub use render::model::{BadgeSpec, OverlaySpec};
pub use render::overlay::render_overlay;
pub use text::escape::unescape_unicode;
pub use text::measure::{FontSpec, TextMeasurer};
pub use text::segment::{SeparatorClasses, segment, split_words};
pub use text::wrap::{WrapResult, wrap};
