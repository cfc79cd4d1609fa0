/// Pixel-width measurement of a single line of text.
///
/// Implementations must be deterministic: the estimator and the drawer both measure
/// the same strings and must agree.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str) -> f32 {
        (**self).text_width(text)
    }
}

/// Every character advances by the same amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}
