use crate::{
    content::assessment::Assessment,
    foundation::core::Locale,
    layout::{
        metrics::{
            BOTTOM_MARGIN, CARD_MARGIN, COLUMN_WIDTH, FOOTER_RESERVE, HEADER_BLOCK,
            MIN_CANVAS_HEIGHT, PHOTO_BLOCK, ROW_GAP, SECTION_TOP_PAD,
        },
        sections::{ListSection, PreparedSections, TextSection, prepare_sections},
    },
    text::measure::TextMeasure,
};

/// Predicted footprint of one body section.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct SectionEstimate {
    pub lines: usize,
    pub items: usize,
    pub height: f64,
}

impl From<&ListSection> for SectionEstimate {
    fn from(s: &ListSection) -> Self {
        Self {
            lines: s.line_count(),
            items: s.item_count(),
            height: s.height(),
        }
    }
}

impl From<&TextSection> for SectionEstimate {
    fn from(s: &TextSection) -> Self {
        Self {
            lines: s.line_count(),
            items: 0,
            height: s.height(),
        }
    }
}

/// Content-space estimate for the whole card, computed before anything is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ContentEstimate {
    pub objectives: SectionEstimate,
    pub narrative: SectionEstimate,
    pub recommendations: SectionEstimate,
    pub attitude: SectionEstimate,
    /// Height reserved for the photo, its captions and the gap below it.
    pub photo_block: f64,
}

impl ContentEstimate {
    /// Columns render side by side, so a row is as tall as its taller column.
    pub fn top_row(&self) -> f64 {
        self.objectives.height.max(self.narrative.height)
    }

    pub fn bottom_row(&self) -> f64 {
        self.recommendations.height.max(self.attitude.height)
    }

    /// Card content from the header to the bottom margin.
    pub fn total(&self) -> f64 {
        HEADER_BLOCK
            + self.photo_block
            + SECTION_TOP_PAD
            + self.top_row()
            + ROW_GAP
            + self.bottom_row()
            + BOTTOM_MARGIN
    }
}

pub fn estimate_content(prepared: &PreparedSections, has_photo: bool) -> ContentEstimate {
    ContentEstimate {
        objectives: (&prepared.objectives).into(),
        narrative: (&prepared.narrative).into(),
        recommendations: (&prepared.recommendations).into(),
        attitude: (&prepared.attitude).into(),
        photo_block: if has_photo { PHOTO_BLOCK } else { 0.0 },
    }
}

/// Estimate straight from an assessment with the given body measurer.
pub fn estimate<M: TextMeasure + ?Sized>(
    assessment: &Assessment,
    locale: Locale,
    body: &M,
    has_photo: bool,
) -> ContentEstimate {
    let prepared = prepare_sections(assessment, locale, body, COLUMN_WIDTH);
    estimate_content(&prepared, has_photo)
}

/// Final canvas height: content plus outer margins and footer, never below the minimum.
pub fn canvas_height(estimate: &ContentEstimate) -> u32 {
    let total = estimate.total() + 2.0 * CARD_MARGIN + FOOTER_RESERVE;
    (total.ceil() as u32).max(MIN_CANVAS_HEIGHT)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/estimate.rs"]
mod tests;
