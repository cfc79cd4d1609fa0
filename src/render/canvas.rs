use std::sync::Arc;

use image::RgbaImage;

use crate::{
    assets::decode::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
    foundation::{
        core::{Point, Rect, Rgb8},
        error::{CardError, CardResult},
    },
    text::{builtin_font, fonts::ShapedText},
};

/// Raster surface for one report. Draw calls are recorded into a CPU render
/// context and resolved by [`Canvas::finish`].
pub struct Canvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> CardResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| CardError::render("canvas width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| CardError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(CardError::render("canvas must not be empty"));
        }
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb8) {
        self.reset_transform();
        self.set_color(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb8) {
        use vello_cpu::kurbo::Shape;

        self.reset_transform();
        self.set_color(color);
        let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius);
        self.ctx.fill_path(&circle.to_path(0.1));
    }

    /// Composite a straight-alpha image with its top-left corner at `origin`.
    pub fn draw_image(&mut self, img: &RgbaImage, origin: Point) -> CardResult<()> {
        let pixmap = rgba_to_pixmap(img)?;
        let (w, h) = (f64::from(pixmap.width()), f64::from(pixmap.height()));
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(translate(origin));
        self.ctx.set_paint(paint);
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        Ok(())
    }

    /// Draw a shaped line with its layout box's top-left corner at `origin`.
    pub(crate) fn draw_text(&mut self, shaped: &ShapedText, origin: Point) {
        match shaped {
            ShapedText::Outline { layout, font } => {
                self.ctx
                    .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                self.ctx.set_transform(translate(origin));
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
            ShapedText::Builtin {
                text,
                size_px,
                color,
            } => {
                let mut cells = Vec::new();
                builtin_font::for_each_cell(text, *size_px, |x, y, side| {
                    cells.push(Rect::new(
                        origin.x + f64::from(x),
                        origin.y + f64::from(y),
                        origin.x + f64::from(x + side),
                        origin.y + f64::from(y + side),
                    ));
                });
                for cell in cells {
                    self.fill_rect(cell, *color);
                }
            }
        }
    }

    /// Rasterize everything drawn so far into a straight-alpha image.
    pub fn finish(mut self) -> CardResult<RgbaImage> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        RgbaImage::from_raw(self.width(), self.height(), data)
            .ok_or_else(|| CardError::render("rendered pixmap byte length mismatch"))
    }

    fn reset_transform(&mut self) {
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    fn set_color(&mut self, c: Rgb8) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
    }
}

fn translate(p: Point) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::translate((p.x, p.y))
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn rgba_to_pixmap(img: &RgbaImage) -> CardResult<vello_cpu::Pixmap> {
    let w: u16 = img
        .width()
        .try_into()
        .map_err(|_| CardError::render("image width exceeds u16"))?;
    let h: u16 = img
        .height()
        .try_into()
        .map_err(|_| CardError::render("image height exceeds u16"))?;

    let mut premul = img.as_raw().clone();
    premultiply_rgba8_in_place(&mut premul);

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(premul.len() / 4);
    for px in premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
