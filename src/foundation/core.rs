use std::{fmt, str::FromStr};

use crate::foundation::error::{CardError, CardResult};

pub use kurbo::{Point, Rect};

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor` (clamped to `0..=1`), truncating like an
    /// integer cast.
    pub fn scaled(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let ch = |c: u8| -> u8 { (f64::from(c) * f) as u8 };
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    /// Relative luminance in `0..=1` (WCAG coefficients over linearized channels).
    pub fn luminance(self) -> f64 {
        fn lin(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * lin(self.r) + 0.7152 * lin(self.g) + 0.0722 * lin(self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(CardError::validation(format!(
                "color must be #RRGGBB, got '{s}'"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| CardError::validation(format!("invalid hex color '{s}'")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_string()
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Triple([u8; 3]),
}

impl TryFrom<ColorRepr> for Rgb8 {
    type Error = CardError;

    fn try_from(repr: ColorRepr) -> CardResult<Self> {
        match repr {
            ColorRepr::Hex(s) => s.parse(),
            ColorRepr::Triple([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

/// Fixed palette shared by every report.
pub mod palette {
    use super::Rgb8;

    /// Fallback theme when no logo color is available.
    pub const BRAND_RED: Rgb8 = Rgb8::new(220, 38, 38);
    pub const CARD_WHITE: Rgb8 = Rgb8::WHITE;
    pub const HEADING_RED: Rgb8 = Rgb8::new(220, 38, 38);
    pub const TEXT_DARK: Rgb8 = Rgb8::new(31, 41, 55);
    pub const TEXT_LIGHT: Rgb8 = Rgb8::new(107, 114, 128);
    pub const TIER_EXCELLENT: Rgb8 = Rgb8::new(22, 163, 74);
    pub const TIER_GOOD: Rgb8 = Rgb8::new(217, 119, 6);
    pub const TIER_NEEDS_SUPPORT: Rgb8 = Rgb8::new(220, 38, 38);
}

/// Language used for every piece of generated chrome (dates, headings, tier labels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl FromStr for Locale {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" | "es_es" => Ok(Self::Es),
            "en" | "en-us" | "en_us" | "en-gb" => Ok(Self::En),
            other => Err(CardError::validation(format!(
                "unsupported locale '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
