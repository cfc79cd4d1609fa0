use crate::{
    content::{
        assessment::{Assessment, Attitude, AttitudeTier},
        labels::labels,
    },
    foundation::core::{Locale, Rgb8, palette},
    layout::metrics::{
        HEADING_BLOCK, ITEM_SPACING, LINE_HEIGHT, MAX_BLOCK_LINES, MAX_ITEM_LINES, MAX_OBJECTIVES,
        MAX_SENTENCES,
    },
    text::{measure::TextMeasure, wrap::wrap_text},
};

/// Bulleted column: each item keeps at most [`MAX_ITEM_LINES`] wrapped lines.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSection {
    pub heading: &'static str,
    pub items: Vec<Vec<String>>,
}

impl ListSection {
    pub fn line_count(&self) -> usize {
        self.items.iter().map(Vec::len).sum()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Vertical extent from the heading top to the cursor after the last item.
    pub fn height(&self) -> f64 {
        HEADING_BLOCK
            + self.line_count() as f64 * LINE_HEIGHT
            + self.item_count() as f64 * ITEM_SPACING
    }
}

/// Free-text column wrapped to at most [`MAX_BLOCK_LINES`] lines.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
    pub color: Rgb8,
    /// Filled dot drawn beside the heading.
    pub marker: Option<Rgb8>,
}

impl TextSection {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn height(&self) -> f64 {
        HEADING_BLOCK + self.line_count() as f64 * LINE_HEIGHT
    }
}

/// Body text after defaults, truncation and wrapping have been applied.
///
/// Both the estimator and the section drawer consume this value, so they cannot
/// disagree on what will be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedSections {
    pub objectives: ListSection,
    pub narrative: ListSection,
    pub recommendations: TextSection,
    pub attitude: TextSection,
    pub tier: Option<AttitudeTier>,
}

/// Apply the per-section item caps and wrap every line to `column_width`.
pub fn prepare_sections<M: TextMeasure + ?Sized>(
    assessment: &Assessment,
    locale: Locale,
    body: &M,
    column_width: f64,
) -> PreparedSections {
    let table = labels(locale);
    let width = column_width as f32;

    let objectives = assessment
        .objectives
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .take(MAX_OBJECTIVES)
        .map(|o| format!("• {o}"));
    let sentences = narrative_sentences(&assessment.narrative).map(|s| format!("• {s}."));

    let (attitude_text, color, tier) = match &assessment.attitude {
        Attitude::Score(score) => {
            let tier = AttitudeTier::classify(*score);
            let text = format!(
                "{score}/100 · {}\n{}",
                table.tier_label(tier),
                table.tier_description(tier)
            );
            (text, tier.color(), Some(tier))
        }
        Attitude::Text(text) => (text.clone(), palette::TEXT_DARK, None),
    };

    PreparedSections {
        objectives: ListSection {
            heading: table.objectives_heading,
            items: bullet_items(objectives, body, width),
        },
        narrative: ListSection {
            heading: table.narrative_heading,
            items: bullet_items(sentences, body, width),
        },
        recommendations: TextSection {
            heading: table.recommendations_heading,
            lines: block_lines(&assessment.recommendations, body, width),
            color: palette::TEXT_DARK,
            marker: None,
        },
        attitude: TextSection {
            heading: table.attitude_heading,
            lines: block_lines(&attitude_text, body, width),
            color,
            marker: tier.map(AttitudeTier::color),
        },
        tier,
    }
}

/// Narrative split on periods, blanks dropped, capped at [`MAX_SENTENCES`].
pub(crate) fn narrative_sentences(narrative: &str) -> impl Iterator<Item = &str> {
    narrative
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_SENTENCES)
}

fn bullet_items<M: TextMeasure + ?Sized>(
    items: impl Iterator<Item = String>,
    body: &M,
    width: f32,
) -> Vec<Vec<String>> {
    items
        .map(|item| {
            let mut lines = wrap_text(&item, body, width);
            lines.truncate(MAX_ITEM_LINES);
            lines
        })
        .collect()
}

fn block_lines<M: TextMeasure + ?Sized>(text: &str, body: &M, width: f32) -> Vec<String> {
    let mut lines = wrap_text(text, body, width);
    lines.truncate(MAX_BLOCK_LINES);
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sections.rs"]
mod tests;
