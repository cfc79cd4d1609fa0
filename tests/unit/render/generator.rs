use super::*;
use crate::{
    content::assessment::Attitude,
    foundation::config::FontConfig,
    layout::metrics::MIN_CANVAS_HEIGHT,
};

fn builtin_config() -> ReportConfig {
    ReportConfig {
        fonts: FontConfig {
            regular: None,
            bold: None,
            system_fonts: false,
        },
        ..ReportConfig::default()
    }
}

fn fixed_options() -> RenderOptions {
    RenderOptions {
        theme_override: None,
        today: NaiveDate::from_ymd_opt(2024, 1, 2),
    }
}

#[test]
fn empty_inputs_render_the_minimum_card() {
    let generator = ReportGenerator::new(builtin_config());
    let report = generator
        .render(&Assessment::default(), &SessionContext::default(), &fixed_options())
        .unwrap();
    let s = &report.summary;
    assert_eq!(report.image.dimensions(), (CANVAS_WIDTH, MIN_CANVAS_HEIGHT));
    assert_eq!(s.theme, generator.config().brand_color);
    assert!(s.date_fallback);
    assert_eq!(s.date, "02 de enero de 2024");
    assert!(!s.logo_drawn && !s.photo_reserved && !s.photo_drawn);
    assert_eq!(s.tier, None);
}

#[test]
fn missing_image_paths_are_ignored() {
    let generator = ReportGenerator::new(builtin_config());
    let context = SessionContext {
        photo_path: Some("/nonexistent/photo.jpg".into()),
        logo_path: Some("/nonexistent/logo.png".into()),
        ..SessionContext::default()
    };
    let report = generator
        .render(&Assessment::default(), &context, &fixed_options())
        .unwrap();
    assert!(!report.summary.photo_reserved);
    assert!(!report.summary.logo_drawn);
    assert_eq!(report.summary.estimate.photo_block, 0.0);
}

#[test]
fn undecodable_photo_keeps_its_reserved_space() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("photo.png");
    std::fs::write(&photo, b"definitely not a png").unwrap();

    let generator = ReportGenerator::new(builtin_config());
    let context = SessionContext {
        photo_path: Some(photo),
        ..SessionContext::default()
    };
    let report = generator
        .render(&Assessment::default(), &context, &fixed_options())
        .unwrap();
    let s = &report.summary;
    assert!(s.photo_reserved);
    assert!(!s.photo_drawn);
    assert_eq!(s.drawn.content_top, 80.0 + 170.0 + 295.0);
}

#[test]
fn drawn_lines_agree_with_the_estimate() {
    let generator = ReportGenerator::new(builtin_config());
    let assessment = Assessment {
        objectives: vec![vec!["fracciones"; 30].join(" "); 4],
        narrative: vec![vec!["ejercicio"; 25].join(" "); 5].join(". "),
        attitude: Attitude::Score(45),
        recommendations: vec!["practicar"; 120].join(" "),
    };
    let report = generator
        .render(&assessment, &SessionContext::default(), &fixed_options())
        .unwrap();
    let s = &report.summary;
    assert_eq!(s.drawn.objectives, s.estimate.objectives.lines);
    assert_eq!(s.drawn.narrative, s.estimate.narrative.lines);
    assert_eq!(s.drawn.recommendations, s.estimate.recommendations.lines);
    assert_eq!(s.drawn.attitude, s.estimate.attitude.lines);
    assert_eq!(s.tier, Some(AttitudeTier::NeedsSupport));
    assert!(s.height > MIN_CANVAS_HEIGHT);
}

struct FixedPalette(Rgb8);

impl PaletteExtractor for FixedPalette {
    fn dominant_color(&self, _image: &RgbaImage) -> Option<Rgb8> {
        Some(self.0)
    }
}

#[test]
fn custom_extractor_sets_the_theme_from_the_logo() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    RgbaImage::from_pixel(64, 64, image::Rgba([200, 10, 10, 255]))
        .save(&logo)
        .unwrap();
    let context = SessionContext {
        logo_path: Some(logo),
        ..SessionContext::default()
    };
    let teal = Rgb8::new(20, 120, 130);

    let generator = ReportGenerator::new(builtin_config()).with_extractor(FixedPalette(teal));
    let report = generator
        .render(&Assessment::default(), &context, &fixed_options())
        .unwrap();
    assert!(report.summary.logo_drawn);
    assert_eq!(report.summary.theme, teal);

    let plain = ReportGenerator::new(builtin_config())
        .render(&Assessment::default(), &SessionContext::default(), &fixed_options())
        .unwrap();
    assert_eq!(plain.summary.theme, generator.config().brand_color);
}
