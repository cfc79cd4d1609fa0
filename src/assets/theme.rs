use std::collections::HashMap;

use image::{RgbaImage, imageops};

use crate::{assets::mask::fit_within, foundation::core::Rgb8};

/// Picks the color a logo contributes to the report theme.
pub trait PaletteExtractor {
    /// `None` when the image has no usable pixels.
    fn dominant_color(&self, image: &RgbaImage) -> Option<Rgb8>;
}

/// Most frequent exact RGB value of a small thumbnail.
///
/// Fully transparent pixels are ignored; ties go to the color seen first in
/// row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExactTally {
    /// Longest thumbnail side.
    pub thumbnail: u32,
}

impl Default for ExactTally {
    fn default() -> Self {
        Self { thumbnail: 100 }
    }
}

impl PaletteExtractor for ExactTally {
    fn dominant_color(&self, image: &RgbaImage) -> Option<Rgb8> {
        let (w, h) = fit_within(image.width(), image.height(), self.thumbnail, self.thumbnail);
        let thumb;
        let pixels = if (w, h) == image.dimensions() {
            image
        } else {
            // Nearest keeps the source colors exact.
            thumb = imageops::resize(image, w, h, imageops::FilterType::Nearest);
            &thumb
        };

        let mut tally: HashMap<[u8; 3], (usize, usize)> = HashMap::new();
        for (idx, px) in pixels.pixels().enumerate() {
            let [r, g, b, a] = px.0;
            if a == 0 {
                continue;
            }
            tally.entry([r, g, b]).or_insert((0, idx)).0 += 1;
        }

        tally
            .into_iter()
            .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))
            .map(|([r, g, b], _)| Rgb8::new(r, g, b))
    }
}

/// Theme color for a report: the logo's dominant color, else `fallback`.
pub fn resolve_theme(
    logo: Option<&RgbaImage>,
    extractor: &dyn PaletteExtractor,
    fallback: Rgb8,
) -> Rgb8 {
    let Some(logo) = logo else {
        return fallback;
    };
    match extractor.dominant_color(logo) {
        Some(color) => color,
        None => {
            tracing::warn!(%fallback, "logo has no opaque pixels, using brand color");
            fallback
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/theme.rs"]
mod tests;
