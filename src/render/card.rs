use image::RgbaImage;

use crate::{
    foundation::{
        core::{Point, Rect, Rgb8, palette},
        error::CardResult,
    },
    layout::{
        metrics::{
            BANNER_HEIGHT, BANNER_INSET_X, BANNER_INSET_Y, BANNER_RADIUS, BANNER_TEXT_INSET_X,
            BANNER_WIDTH, CARD_BOTTOM_GUARD, CARD_MARGIN, CARD_RADIUS, COLUMN_MARGIN, COLUMN_WIDTH,
            DATE_OFFSET_X, DATE_OFFSET_Y, FOOTER_INSET_X, FOOTER_OFFSET_BOTTOM, HEADER_BLOCK,
            HEADING_BLOCK, ITEM_SPACING, LINE_HEIGHT, LOGO_OFFSET_RIGHT, LOGO_OFFSET_TOP,
            PHOTO_BLOCK, PHOTO_NAME_INSET, PHOTO_NAMES_GAP, ROW_GAP, SECTION_TOP_PAD,
            SIDE_BAND_DARKEN, SIDE_BAND_WIDTH, TIER_MARKER_RADIUS,
        },
        sections::{ListSection, PreparedSections, TextSection},
    },
    render::{
        canvas::Canvas,
        primitives::{math_background, rounded_rect, vertical_gradient_band},
    },
    text::fonts::{FontRole, FontSet, ShapedText},
};

/// Themes lighter than this get dark banner text.
const LIGHT_THEME_LUMINANCE: f64 = 0.8;

/// Photo area state. `Reserved(None)` keeps the space empty when the file
/// existed but could not be decoded.
pub(crate) enum PhotoSlot<'a> {
    Absent,
    Reserved(Option<&'a RgbaImage>),
}

/// Line counts actually drawn per section and the cursor positions reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct DrawnSections {
    pub objectives: usize,
    pub narrative: usize,
    pub recommendations: usize,
    pub attitude: usize,
    /// Cursor where the body rows start.
    pub content_top: f64,
    /// Bottom of the taller column in the upper row.
    pub top_row_bottom: f64,
}

/// Draws the card sections in order, threading the vertical cursor through.
pub(crate) struct CardPainter<'a> {
    canvas: &'a mut Canvas,
    fonts: &'a FontSet,
    card: Rect,
}

impl<'a> CardPainter<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas, fonts: &'a FontSet) -> Self {
        let card = Rect::new(
            CARD_MARGIN,
            CARD_MARGIN,
            f64::from(canvas.width()) - CARD_MARGIN,
            f64::from(canvas.height()) - CARD_MARGIN,
        );
        Self {
            canvas,
            fonts,
            card,
        }
    }

    #[cfg(test)]
    pub(crate) fn card(&self) -> Rect {
        self.card
    }

    /// Theme fill, side bands, ornaments and the white card.
    pub(crate) fn background(&mut self, theme: Rgb8) {
        let (w, h) = (
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        self.canvas.fill_rect(Rect::new(0.0, 0.0, w, h), theme);
        vertical_gradient_band(
            self.canvas,
            theme,
            SIDE_BAND_DARKEN,
            Rect::new(0.0, 0.0, SIDE_BAND_WIDTH, h),
        );
        vertical_gradient_band(
            self.canvas,
            theme,
            SIDE_BAND_DARKEN,
            Rect::new(w - SIDE_BAND_WIDTH, 0.0, w, h),
        );
        math_background(self.canvas, self.fonts);
        rounded_rect(self.canvas, self.card, CARD_RADIUS, palette::CARD_WHITE);
    }

    pub(crate) fn header(&mut self, theme: Rgb8, banner: &str, date: &str) {
        let c = self.card;
        let banner_box = Rect::new(
            c.x0 + BANNER_INSET_X,
            c.y0 + BANNER_INSET_Y,
            c.x0 + BANNER_INSET_X + BANNER_WIDTH,
            c.y0 + BANNER_INSET_Y + BANNER_HEIGHT,
        );
        rounded_rect(self.canvas, banner_box, BANNER_RADIUS, theme);

        let ink = if theme.luminance() > LIGHT_THEME_LUMINANCE {
            palette::TEXT_DARK
        } else {
            Rgb8::WHITE
        };
        let room = BANNER_WIDTH - 2.0 * BANNER_TEXT_INSET_X;
        let (shaped, size) = self.fitted(FontRole::Banner, banner, ink, room);
        let text_y = banner_box.y0 + (BANNER_HEIGHT - f64::from(size)) / 2.0;
        self.canvas
            .draw_text(&shaped, Point::new(banner_box.x0 + BANNER_TEXT_INSET_X, text_y));

        let date_x = c.x0 + DATE_OFFSET_X;
        let date_room = c.x1 - LOGO_OFFSET_RIGHT - BANNER_INSET_X - date_x;
        let (shaped, _) = self.fitted(FontRole::Date, date, palette::TEXT_DARK, date_room);
        self.canvas
            .draw_text(&shaped, Point::new(date_x, c.y0 + DATE_OFFSET_Y));
    }

    pub(crate) fn logo(&mut self, logo: &RgbaImage) -> CardResult<()> {
        let origin = Point::new(
            self.card.x1 - LOGO_OFFSET_RIGHT,
            self.card.y0 + LOGO_OFFSET_TOP,
        );
        self.canvas.draw_image(logo, origin)
    }

    /// Draw the photo block and return the cursor where the body starts and
    /// whether an image was composited.
    pub(crate) fn photo(&mut self, slot: PhotoSlot<'_>, student: &str, teacher: &str) -> (f64, bool) {
        let photo_y = self.card.y0 + HEADER_BLOCK;
        let image = match slot {
            PhotoSlot::Absent => return (photo_y, false),
            PhotoSlot::Reserved(None) => return (photo_y + PHOTO_BLOCK, false),
            PhotoSlot::Reserved(Some(image)) => image,
        };

        let (pw, ph) = (f64::from(image.width()), f64::from(image.height()));
        let photo_x = ((f64::from(self.canvas.width()) - pw) / 2.0).floor();
        if let Err(err) = self.canvas.draw_image(image, Point::new(photo_x, photo_y)) {
            tracing::warn!(%err, "photo composite failed, space left empty");
            return (photo_y + PHOTO_BLOCK, false);
        }

        let name_y = photo_y + ph + PHOTO_NAMES_GAP;
        self.text(
            FontRole::Small,
            student,
            palette::TEXT_DARK,
            Point::new(photo_x + PHOTO_NAME_INSET, name_y),
        );
        let shaped = self.fonts.shape(FontRole::Small, teacher, palette::TEXT_DARK);
        let teacher_x = photo_x + pw - PHOTO_NAME_INSET - f64::from(shaped.width());
        self.canvas.draw_text(&shaped, Point::new(teacher_x, name_y));

        (photo_y + PHOTO_BLOCK, true)
    }

    /// Both body rows starting at `cursor`.
    pub(crate) fn sections(&mut self, cursor: f64, prepared: &PreparedSections) -> DrawnSections {
        let left = self.card.x0 + COLUMN_MARGIN;
        let right = self.card.x0 + 2.0 * COLUMN_MARGIN + COLUMN_WIDTH;

        let top = cursor + SECTION_TOP_PAD;
        let (obj_bottom, objectives) = self.list_section(left, top, &prepared.objectives);
        let (nar_bottom, narrative) = self.list_section(right, top, &prepared.narrative);
        let top_row_bottom = obj_bottom.max(nar_bottom);

        let bottom = top_row_bottom + ROW_GAP;
        let limit = self.card.y1 - CARD_BOTTOM_GUARD;
        let recommendations = self.text_section(left, bottom, &prepared.recommendations, limit);
        let attitude = self.text_section(right, bottom, &prepared.attitude, limit);

        DrawnSections {
            objectives,
            narrative,
            recommendations,
            attitude,
            content_top: cursor,
            top_row_bottom,
        }
    }

    pub(crate) fn footer(&mut self, attribution: &str, copyright: &str) {
        let y = self.card.y1 - FOOTER_OFFSET_BOTTOM;
        let shaped = self
            .fonts
            .shape(FontRole::Small, copyright, palette::TEXT_LIGHT);
        let copyright_x = self.card.x1 - FOOTER_INSET_X - f64::from(shaped.width());
        self.canvas.draw_text(&shaped, Point::new(copyright_x, y));

        let attribution_x = self.card.x0 + FOOTER_INSET_X;
        let room = copyright_x - FOOTER_INSET_X - attribution_x;
        let (shaped, _) = self.fitted(FontRole::Small, attribution, palette::TEXT_LIGHT, room);
        self.canvas.draw_text(&shaped, Point::new(attribution_x, y));
    }

    fn list_section(&mut self, x: f64, y: f64, section: &ListSection) -> (f64, usize) {
        let (heading, _) = self.fitted(
            FontRole::Heading,
            section.heading,
            palette::HEADING_RED,
            COLUMN_WIDTH,
        );
        self.canvas.draw_text(&heading, Point::new(x, y));
        let mut text_y = y + HEADING_BLOCK;
        let mut drawn = 0;
        for item in &section.items {
            for line in item {
                self.text(FontRole::Body, line, palette::TEXT_DARK, Point::new(x, text_y));
                text_y += LINE_HEIGHT;
                drawn += 1;
            }
            text_y += ITEM_SPACING;
        }
        (text_y, drawn)
    }

    /// Lines that would reach `limit` are dropped.
    fn text_section(&mut self, x: f64, y: f64, section: &TextSection, limit: f64) -> usize {
        let room = match section.marker {
            Some(_) => COLUMN_WIDTH - 3.0 * TIER_MARKER_RADIUS,
            None => COLUMN_WIDTH,
        };
        let (heading, size) =
            self.fitted(FontRole::Heading, section.heading, palette::HEADING_RED, room);
        let heading_width = f64::from(heading.width());
        self.canvas.draw_text(&heading, Point::new(x, y));
        if let Some(marker) = section.marker {
            let center = Point::new(
                x + heading_width + 2.0 * TIER_MARKER_RADIUS,
                y + f64::from(size) / 2.0,
            );
            self.canvas.fill_circle(center, TIER_MARKER_RADIUS, marker);
        }

        let mut text_y = y + HEADING_BLOCK;
        let mut drawn = 0;
        for line in &section.lines {
            if text_y + LINE_HEIGHT >= limit {
                tracing::warn!(
                    heading = section.heading,
                    dropped = section.lines.len() - drawn,
                    "section clipped at card bottom"
                );
                break;
            }
            self.text(FontRole::Body, line, section.color, Point::new(x, text_y));
            text_y += LINE_HEIGHT;
            drawn += 1;
        }
        drawn
    }

    /// Shape chrome text at the largest size that keeps it within `max_width`.
    fn fitted(&self, role: FontRole, text: &str, color: Rgb8, max_width: f64) -> (ShapedText, f32) {
        let size = self.fonts.fitted_size(role, text, max_width as f32);
        (self.fonts.shape_at(role, text, size, color), size)
    }

    fn text(&mut self, role: FontRole, text: &str, color: Rgb8, origin: Point) {
        if text.is_empty() {
            return;
        }
        let shaped = self.fonts.shape(role, text, color);
        self.canvas.draw_text(&shaped, origin);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/card.rs"]
mod tests;
