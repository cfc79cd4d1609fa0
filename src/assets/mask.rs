use image::{GrayImage, Luma, RgbaImage, imageops};

use crate::{
    foundation::config::PhotoShape,
    layout::metrics::{LOGO_SIZE, PHOTO_MAX_HEIGHT, PHOTO_MAX_WIDTH},
};

/// Opacity mask of a filled circle inscribed in a `size`×`size` square.
pub fn circle_mask(size: u32) -> GrayImage {
    let r = size as f64 / 2.0;
    GrayImage::from_fn(size, size, |x, y| {
        let dx = x as f64 + 0.5 - r;
        let dy = y as f64 + 0.5 - r;
        if dx * dx + dy * dy <= r * r {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Multiply the image alpha by `mask`. Both must have the same dimensions.
pub fn apply_mask(img: &mut RgbaImage, mask: &GrayImage) {
    for (px, m) in img.pixels_mut().zip(mask.pixels()) {
        px.0[3] = ((px.0[3] as u16 * m.0[0] as u16 + 127) / 255) as u8;
    }
}

/// Logo thumbnail: stretched to the logo square, then cut to a circle.
pub fn prepare_logo(src: &RgbaImage) -> RgbaImage {
    let mut logo = imageops::resize(src, LOGO_SIZE, LOGO_SIZE, imageops::FilterType::Lanczos3);
    apply_mask(&mut logo, &circle_mask(LOGO_SIZE));
    logo
}

/// Photo thumbnail fitted inside the photo box without upscaling.
///
/// The circular shape crops the centered square before masking.
pub fn prepare_photo(src: &RgbaImage, shape: PhotoShape) -> RgbaImage {
    let base = match shape {
        PhotoShape::Rect => src.clone(),
        PhotoShape::Circle => {
            let side = src.width().min(src.height());
            let x = (src.width() - side) / 2;
            let y = (src.height() - side) / 2;
            imageops::crop_imm(src, x, y, side, side).to_image()
        }
    };

    let (w, h) = fit_within(base.width(), base.height(), PHOTO_MAX_WIDTH, PHOTO_MAX_HEIGHT);
    let mut photo = if (w, h) == base.dimensions() {
        base
    } else {
        imageops::resize(&base, w, h, imageops::FilterType::Lanczos3)
    };
    if shape == PhotoShape::Circle {
        let mask = circle_mask(photo.width().min(photo.height()));
        if mask.dimensions() == photo.dimensions() {
            apply_mask(&mut photo, &mask);
        }
    }
    photo
}

/// Largest size with the same aspect ratio that fits in `max_w`×`max_h`,
/// never larger than the source.
pub(crate) fn fit_within(w: u32, h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if w <= max_w && h <= max_h {
        return (w.max(1), h.max(1));
    }
    let scale = (max_w as f64 / w as f64).min(max_h as f64 / h as f64);
    let fw = ((w as f64 * scale).round() as u32).clamp(1, max_w);
    let fh = ((h as f64 * scale).round() as u32).clamp(1, max_h);
    (fw, fh)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/mask.rs"]
mod tests;
