use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use image::RgbaImage;

use crate::{
    assets::{
        decode::load_image,
        mask::{prepare_logo, prepare_photo},
        theme::{ExactTally, PaletteExtractor, resolve_theme},
    },
    content::{
        assessment::{Assessment, AttitudeTier},
        date::{format_long_date, resolve_session_date},
        labels::{copyright_line, session_banner},
        session::SessionContext,
    },
    foundation::{config::ReportConfig, core::Rgb8, error::CardResult},
    layout::{
        estimate::{ContentEstimate, canvas_height, estimate_content},
        metrics::{CANVAS_WIDTH, COLUMN_WIDTH},
        sections::prepare_sections,
    },
    render::{
        canvas::Canvas,
        card::{CardPainter, DrawnSections, PhotoSlot},
        writer::write_report,
    },
    text::fonts::{FontRole, FontSet},
};

/// Per-call overrides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Use this theme instead of extracting one from the logo.
    pub theme_override: Option<Rgb8>,
    /// Date used when the session date is absent or unparseable.
    pub today: Option<NaiveDate>,
}

/// What was predicted and what was drawn for one report.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayoutSummary {
    pub estimate: ContentEstimate,
    pub drawn: DrawnSections,
    pub width: u32,
    pub height: u32,
    pub theme: Rgb8,
    pub header: String,
    pub date: String,
    /// The session date fell back to today.
    pub date_fallback: bool,
    pub tier: Option<AttitudeTier>,
    pub logo_drawn: bool,
    /// Space was reserved for a photo.
    pub photo_reserved: bool,
    pub photo_drawn: bool,
}

/// A rendered, not yet written, report.
#[derive(Clone, Debug)]
pub struct RenderedReport {
    pub image: RgbaImage,
    pub summary: LayoutSummary,
}

/// Renders report cards for a fixed configuration.
///
/// Holds no per-report state: every call builds its own fonts, canvas and cursor,
/// so one generator can serve concurrent callers.
pub struct ReportGenerator {
    config: ReportConfig,
    extractor: Box<dyn PaletteExtractor + Send + Sync>,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            extractor: Box::new(ExactTally::default()),
        }
    }

    /// Replace the logo color extractor.
    pub fn with_extractor(mut self, extractor: impl PaletteExtractor + Send + Sync + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Lay out and rasterize one report.
    #[tracing::instrument(
        skip_all,
        fields(session = context.session_number, total = context.total_sessions)
    )]
    pub fn render(
        &self,
        assessment: &Assessment,
        context: &SessionContext,
        options: &RenderOptions,
    ) -> CardResult<RenderedReport> {
        let cfg = &self.config;
        let fonts = FontSet::load(&cfg.fonts);

        let today = options
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let (date, date_fallback) = resolve_session_date(context.date.as_deref(), today);
        let date_text = format_long_date(date, cfg.locale);
        let header = session_banner(cfg.locale, context.session_number, context.total_sessions);

        let logo = context.existing_logo().and_then(|path| match load_image(path) {
            Ok(img) => Some(img),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "logo unreadable, block omitted");
                None
            }
        });
        let theme = match options.theme_override {
            Some(theme) => theme,
            None => resolve_theme(logo.as_ref(), self.extractor.as_ref(), cfg.brand_color),
        };

        let photo_path = context.existing_photo();
        let photo = photo_path.and_then(|path| match load_image(path) {
            Ok(img) => Some(prepare_photo(&img, cfg.photo_shape)),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "photo unreadable, space left empty");
                None
            }
        });
        let slot = match photo_path {
            Some(_) => PhotoSlot::Reserved(photo.as_ref()),
            None => PhotoSlot::Absent,
        };

        let body = fonts.get(FontRole::Body);
        let prepared = prepare_sections(assessment, cfg.locale, &body, COLUMN_WIDTH);
        let estimate = estimate_content(&prepared, photo_path.is_some());
        let height = canvas_height(&estimate);
        tracing::debug!(
            height,
            top_row = estimate.top_row(),
            bottom_row = estimate.bottom_row(),
            "canvas sized"
        );

        let mut canvas = Canvas::new(CANVAS_WIDTH, height)?;
        let mut painter = CardPainter::new(&mut canvas, &fonts);
        painter.background(theme);
        painter.header(theme, &header, &date_text);

        let logo_drawn = match logo {
            Some(img) => match painter.logo(&prepare_logo(&img)) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(%err, "logo composite failed, block omitted");
                    false
                }
            },
            None => false,
        };

        let (cursor, photo_drawn) =
            painter.photo(slot, &context.student_name, &context.teacher_name);

        let drawn = painter.sections(cursor, &prepared);
        painter.footer(
            &cfg.footer.attribution,
            &copyright_line(date.year(), &cfg.footer.copyright_holder),
        );

        let image = canvas.finish()?;
        Ok(RenderedReport {
            image,
            summary: LayoutSummary {
                estimate,
                drawn,
                width: CANVAS_WIDTH,
                height,
                theme,
                header,
                date: date_text,
                date_fallback,
                tier: prepared.tier,
                logo_drawn,
                photo_reserved: photo_path.is_some(),
                photo_drawn,
            },
        })
    }

    /// Render with default options and write the result under the reports directory.
    pub fn generate(&self, assessment: &Assessment, context: &SessionContext) -> CardResult<PathBuf> {
        self.generate_with(assessment, context, &RenderOptions::default())
    }

    pub fn generate_with(
        &self,
        assessment: &Assessment,
        context: &SessionContext,
        options: &RenderOptions,
    ) -> CardResult<PathBuf> {
        let report = self.render(assessment, context, options)?;
        write_report(&report.image, &self.config.reports_dir)
    }
}

/// Render and write a report with the default configuration and `LESSONCARD_*`
/// environment overrides.
pub fn generate_report(assessment: &Assessment, context: &SessionContext) -> CardResult<PathBuf> {
    let config = ReportConfig::default().with_env_overrides()?;
    ReportGenerator::new(config).generate(assessment, context)
}

#[cfg(test)]
#[path = "../../tests/unit/render/generator.rs"]
mod tests;
