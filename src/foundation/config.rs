use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::{
    core::{Locale, Rgb8, palette},
    error::CardResult,
};

/// Report generation settings.
///
/// Every field has a default so an empty JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory that receives finished reports. Created on first write.
    pub reports_dir: PathBuf,
    /// Language of dates, headings and tier labels.
    pub locale: Locale,
    /// Theme used when no logo is supplied or its color cannot be extracted.
    pub brand_color: Rgb8,
    pub fonts: FontConfig,
    pub footer: FooterConfig,
    /// How the session photograph is composited.
    pub photo_shape: PhotoShape,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reports_dir: PathBuf::from("reports"),
            locale: Locale::Es,
            brand_color: palette::BRAND_RED,
            fonts: FontConfig::default(),
            footer: FooterConfig::default(),
            photo_shape: PhotoShape::Rect,
        }
    }
}

/// Optional font files. Missing entries resolve through system fonts, then the
/// built-in bitmap font.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
    /// Query installed sans-serif faces when a file is not configured.
    pub system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            regular: None,
            bold: None,
            system_fonts: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub attribution: String,
    pub copyright_holder: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            attribution: "Generado automáticamente por More Insight Engine".to_string(),
            copyright_holder: "More Academy".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoShape {
    #[default]
    Rect,
    Circle,
}

impl ReportConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse config '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Apply `LESSONCARD_*` environment overrides on top of this configuration.
    pub fn with_env_overrides(self) -> CardResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> CardResult<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_empty("LESSONCARD_REPORTS_DIR") {
            self.reports_dir = PathBuf::from(dir);
        }
        if let Some(p) = non_empty("LESSONCARD_FONT_REGULAR") {
            self.fonts.regular = Some(PathBuf::from(p));
        }
        if let Some(p) = non_empty("LESSONCARD_FONT_BOLD") {
            self.fonts.bold = Some(PathBuf::from(p));
        }
        if let Some(tag) = non_empty("LESSONCARD_LOCALE") {
            self.locale = tag.parse()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
