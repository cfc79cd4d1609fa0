pub mod canvas;
pub mod card;
pub mod generator;
pub mod primitives;
pub mod writer;

pub use canvas::Canvas;
pub use card::DrawnSections;
pub use generator::{
    LayoutSummary, RenderOptions, RenderedReport, ReportGenerator, generate_report,
};
pub use writer::{report_file_name, write_report};
