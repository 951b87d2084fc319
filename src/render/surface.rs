use std::sync::Arc;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{TextplateError, TextplateResult},
    raster::image::RasterImage,
};

/// Draw target for one render call, backed by the CPU rasterizer.
///
/// Shape and glyph edges are anti-aliased unconditionally. The surface owns
/// its buffers exclusively and is discarded after [`Surface::finish`].
pub(crate) struct Surface {
    ctx: vello_cpu::RenderContext,
    width: u32,
    height: u32,
}

impl Surface {
    pub(crate) fn new(width: u32, height: u32) -> TextplateResult<Self> {
        if width == 0 || height == 0 {
            return Err(TextplateError::validation(
                "canvas dimensions must be >= 1px per axis",
            ));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| TextplateError::validation("canvas width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| TextplateError::validation("canvas height exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            width,
            height,
        })
    }

    pub(crate) fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba8) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            f64::from(x),
            f64::from(y),
            f64::from(x + w),
            f64::from(y + h),
        ));
    }

    /// Draw `image` with its top-left at `(dst_x, dst_y)`, scaled to
    /// `dst_w` x `dst_h`.
    pub(crate) fn draw_image(
        &mut self,
        image: &RasterImage,
        dst_x: f64,
        dst_y: f64,
        dst_w: f64,
        dst_h: f64,
    ) -> TextplateResult<()> {
        let paint = rgba_premul_to_image(&image.rgba8_premul, image.width, image.height)?;
        let sx = dst_w / f64::from(image.width);
        let sy = dst_h / f64::from(image.height);
        let tr =
            kurbo::Affine::translate((dst_x, dst_y)) * kurbo::Affine::scale_non_uniform(sx, sy);
        self.ctx.set_transform(affine_to_cpu(tr));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        Ok(())
    }

    /// Draw one laid-out text line with its top at `(x, y)`; the layout's own
    /// baseline offset places glyphs at `y + ascent`.
    pub(crate) fn draw_text_line(
        &mut self,
        layout: &parley::Layout<Rgba8>,
        font: &vello_cpu::peniko::FontData,
        x: f64,
        y: f64,
    ) {
        self.ctx
            .set_transform(affine_to_cpu(kurbo::Affine::translate((x, y))));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize all queued draws and return the premultiplied RGBA8 canvas.
    pub(crate) fn finish(mut self) -> TextplateResult<RasterImage> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| TextplateError::validation("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| TextplateError::validation("canvas height exceeds u16"))?;
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.render_to_pixmap(&mut pixmap);
        RasterImage::from_premul_parts(
            self.width,
            self.height,
            pixmap.data_as_u8_slice().to_vec(),
            true,
        )
    }
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> TextplateResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| TextplateError::validation("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| TextplateError::validation("pixmap height exceeds u16"))?;
    if bytes_premul.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(TextplateError::validation("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes_premul.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}
