pub mod estimate;
pub mod metrics;
pub mod sections;

pub use estimate::{ContentEstimate, SectionEstimate, canvas_height, estimate, estimate_content};
pub use sections::{ListSection, PreparedSections, TextSection, prepare_sections};
