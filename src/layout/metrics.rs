//! Fixed geometry of the report card, in canvas pixels.

pub const CANVAS_WIDTH: u32 = 1920;
pub const MIN_CANVAS_HEIGHT: u32 = 1080;

/// Distance from the canvas edge to the white card.
pub const CARD_MARGIN: f64 = 80.0;
pub const CARD_RADIUS: f64 = 30.0;

/// Gradient bands framing the card on the left and right edges.
pub const SIDE_BAND_WIDTH: f64 = 100.0;
pub const SIDE_BAND_DARKEN: f64 = 0.3;

/// Margin left of, between and right of the two body columns.
pub const COLUMN_MARGIN: f64 = 100.0;
pub const COLUMN_WIDTH: f64 =
    (CANVAS_WIDTH as f64 - 2.0 * CARD_MARGIN - 3.0 * COLUMN_MARGIN) / 2.0;

pub const HEADER_BLOCK: f64 = 170.0;
pub const SECTION_TOP_PAD: f64 = 20.0;
pub const HEADING_BLOCK: f64 = 50.0;
pub const LINE_HEIGHT: f64 = 30.0;
pub const ITEM_SPACING: f64 = 5.0;
pub const ROW_GAP: f64 = 60.0;
pub const BOTTOM_MARGIN: f64 = 100.0;
pub const FOOTER_RESERVE: f64 = 100.0;

pub const MAX_OBJECTIVES: usize = 3;
pub const MAX_SENTENCES: usize = 4;
pub const MAX_ITEM_LINES: usize = 2;
pub const MAX_BLOCK_LINES: usize = 8;

/// Lines in the lower row are dropped once they would reach this close to the
/// card's bottom edge.
pub const CARD_BOTTOM_GUARD: f64 = 80.0;

pub const PHOTO_MAX_WIDTH: u32 = 800;
pub const PHOTO_MAX_HEIGHT: u32 = 225;
pub const PHOTO_NAMES_GAP: f64 = 10.0;
pub const PHOTO_SECTION_GAP: f64 = 60.0;
pub const PHOTO_BLOCK: f64 = PHOTO_MAX_HEIGHT as f64 + PHOTO_NAMES_GAP + PHOTO_SECTION_GAP;
/// Horizontal inset of the participant names under the photo.
pub const PHOTO_NAME_INSET: f64 = 30.0;

pub const BANNER_INSET_X: f64 = 40.0;
pub const BANNER_INSET_Y: f64 = 20.0;
pub const BANNER_WIDTH: f64 = 540.0;
pub const BANNER_HEIGHT: f64 = 100.0;
pub const BANNER_RADIUS: f64 = 15.0;
pub const BANNER_TEXT_INSET_X: f64 = 30.0;
pub const DATE_OFFSET_X: f64 = 630.0;
pub const DATE_OFFSET_Y: f64 = 60.0;

pub const LOGO_SIZE: u32 = 120;
pub const LOGO_OFFSET_RIGHT: f64 = 180.0;
pub const LOGO_OFFSET_TOP: f64 = 20.0;

pub const FOOTER_OFFSET_BOTTOM: f64 = 40.0;
pub const FOOTER_INSET_X: f64 = 100.0;

pub const TIER_MARKER_RADIUS: f64 = 9.0;

/// Ornamental glyphs scattered over the background.
pub const ORNAMENT_COUNT: usize = 30;
pub const ORNAMENT_SIZE_PX: f32 = 40.0;
