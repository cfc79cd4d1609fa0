use crate::{
    foundation::core::{Point, Rect, Rgb8},
    layout::metrics::{ORNAMENT_COUNT, ORNAMENT_SIZE_PX},
    render::canvas::Canvas,
    text::fonts::FontSet,
};

/// Rounded rectangle as two overlapping rectangles plus four corner discs.
pub fn rounded_rect(canvas: &mut Canvas, rect: Rect, radius: f64, fill: Rgb8) {
    let r = radius.max(0.0).min(rect.width() / 2.0).min(rect.height() / 2.0);
    canvas.fill_rect(Rect::new(rect.x0 + r, rect.y0, rect.x1 - r, rect.y1), fill);
    canvas.fill_rect(Rect::new(rect.x0, rect.y0 + r, rect.x1, rect.y1 - r), fill);
    if r <= 0.0 {
        return;
    }
    for center in [
        Point::new(rect.x0 + r, rect.y0 + r),
        Point::new(rect.x1 - r, rect.y0 + r),
        Point::new(rect.x0 + r, rect.y1 - r),
        Point::new(rect.x1 - r, rect.y1 - r),
    ] {
        canvas.fill_circle(center, r, fill);
    }
}

/// Row color of a band: `base` at the vertical middle, darkened by up to
/// `darken` toward the top and bottom edges.
pub fn band_color(base: Rgb8, row: u32, height: u32, darken: f64) -> Rgb8 {
    let half = (height / 2).max(1);
    let t = f64::from(row.abs_diff(half)) / f64::from(half);
    base.scaled(1.0 - t * darken)
}

/// Fill `region` one row at a time with [`band_color`].
pub fn vertical_gradient_band(canvas: &mut Canvas, base: Rgb8, darken: f64, region: Rect) {
    let top = region.y0.max(0.0) as u32;
    let bottom = (region.y1.max(0.0) as u32).min(canvas.height());
    let height = bottom.saturating_sub(top);
    for row in 0..height {
        let y = f64::from(top + row);
        canvas.fill_rect(
            Rect::new(region.x0, y, region.x1, y + 1.0),
            band_color(base, row, height, darken),
        );
    }
}

const ORNAMENTS: [&str; 22] = [
    "β", "∫", "+", "÷", "α", "π", "Σ", "∞", "√", "≠", "≤", "≥", "x²", "y", "sin", "cos", "θ", "∂",
    "∆", "λ", "μ", "σ",
];

/// One ornament placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ornament {
    pub glyph: &'static str,
    pub x: u32,
    pub y: u32,
}

/// Ornament placements for a canvas, fully determined by its size.
pub fn ornament_layout(width: u32, height: u32) -> Vec<Ornament> {
    let mut rng = Rng64::new(u64::from(height) ^ (u64::from(width) << 32));
    (0..ORNAMENT_COUNT)
        .map(|_| Ornament {
            glyph: ORNAMENTS[rng.below(ORNAMENTS.len() as u64) as usize],
            x: rng.between(50, width.saturating_sub(100)),
            y: rng.between(50, height.saturating_sub(100)),
        })
        .collect()
}

/// Scatter white math ornaments over the background.
pub fn math_background(canvas: &mut Canvas, fonts: &FontSet) {
    for o in ornament_layout(canvas.width(), canvas.height()) {
        let shaped = fonts.shape_ornament(o.glyph, ORNAMENT_SIZE_PX, Rgb8::WHITE);
        canvas.draw_text(&shaped, Point::new(f64::from(o.x), f64::from(o.y)));
    }
}

#[derive(Clone, Copy, Debug)]
struct Rng64 {
    state: u64,
}

impl Rng64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n.max(1)
    }

    /// Uniform in `lo..=hi`; `lo` when the range is empty.
    fn between(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.below(u64::from(hi - lo) + 1) as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/primitives.rs"]
mod tests;
