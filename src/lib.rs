//! `lessoncard` renders lesson assessments as fixed-width PNG report cards.
//!
//! The canvas height is decided before anything is drawn: body text is wrapped and
//! truncated once ([`layout::prepare_sections`]), measured ([`layout::estimate_content`])
//! and sized ([`layout::canvas_height`]), and the same prepared lines are then drawn.
//! Missing fields, unreadable images and unavailable fonts degrade with a warning;
//! only failing to write the report is an error.
//!
//! Main entry points:
//! - [`ReportGenerator`] / [`generate_report`]
//! - [`parse_analysis`] and [`assessment_or_default`] for upstream model output
//! - [`LessonPipeline`] to chain transcription, analysis and rendering
#![forbid(unsafe_code)]

pub mod assets;
pub mod content;
pub mod foundation;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod text;

pub use content::{
    analysis::{assessment_or_default, build_analysis_prompt, default_assessment, parse_analysis},
    assessment::{Assessment, Attitude, AttitudeTier},
    date::format_long_date,
    session::SessionContext,
};
pub use foundation::{
    config::{FontConfig, FooterConfig, PhotoShape, ReportConfig},
    core::{Locale, Rgb8},
    error::{CardError, CardResult},
};
pub use pipeline::{LanguageModel, LessonPipeline, ProcessedLesson, Service, Transcriber};
pub use render::{
    LayoutSummary, RenderOptions, RenderedReport, ReportGenerator, generate_report,
};
pub use text::{FontRole, FontSet};
