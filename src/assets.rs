pub mod decode;
pub mod mask;
pub mod theme;

pub use decode::load_image;
pub use mask::{circle_mask, prepare_logo, prepare_photo};
pub use theme::{ExactTally, PaletteExtractor, resolve_theme};
