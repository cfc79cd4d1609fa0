pub(crate) mod builtin_font;
pub(crate) mod engine;
pub mod fonts;
pub mod measure;
pub mod wrap;

pub use fonts::{FaceSource, FontRef, FontRole, FontSet};
pub use measure::{FixedAdvance, TextMeasure};
pub use wrap::wrap_text;
