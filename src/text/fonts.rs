use std::{
    cell::RefCell,
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    foundation::{config::FontConfig, core::Rgb8},
    text::{
        builtin_font,
        engine::{TextBrushRgba8, TextLayoutEngine},
        measure::TextMeasure,
    },
};

/// Floor for text shrunk to fit a fixed box.
pub(crate) const MIN_FIT_SIZE_PX: f32 = 8.0;
const FIT_STEP_PX: f32 = 2.0;

/// Logical text roles on the report, each with a fixed pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Banner,
    Date,
    Heading,
    Body,
    Small,
}

impl FontRole {
    pub const ALL: [FontRole; 5] = [
        FontRole::Banner,
        FontRole::Date,
        FontRole::Heading,
        FontRole::Body,
        FontRole::Small,
    ];

    pub fn size_px(self) -> f32 {
        match self {
            FontRole::Banner => 56.0,
            FontRole::Date => 28.0,
            FontRole::Heading => 36.0,
            FontRole::Body => 22.0,
            FontRole::Small => 18.0,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, FontRole::Banner | FontRole::Heading)
    }
}

/// Where a resolved face came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FaceSource {
    File(PathBuf),
    System(String),
    Builtin,
}

impl fmt::Display for FaceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceSource::File(p) => write!(f, "file {}", p.display()),
            FaceSource::System(name) => write!(f, "system {name}"),
            FaceSource::Builtin => f.write_str("built-in bitmap"),
        }
    }
}

#[derive(Clone)]
pub(crate) struct OutlineFace {
    pub(crate) family: String,
    pub(crate) data: vello_cpu::peniko::FontData,
}

#[derive(Clone)]
pub(crate) enum Face {
    Outline(OutlineFace),
    Builtin,
}

/// Text ready to be rasterized.
pub(crate) enum ShapedText {
    Outline {
        layout: parley::Layout<TextBrushRgba8>,
        font: vello_cpu::peniko::FontData,
    },
    Builtin {
        text: String,
        size_px: f32,
        color: Rgb8,
    },
}

impl ShapedText {
    /// Advance width of the shaped line.
    pub(crate) fn width(&self) -> f32 {
        match self {
            ShapedText::Outline { layout, .. } => layout.width(),
            ShapedText::Builtin { text, size_px, .. } => builtin_font::text_width(text, *size_px),
        }
    }
}

/// Fonts for one report invocation.
///
/// Owns its shaping context; one set serves a single render at a time.
pub struct FontSet {
    regular: Face,
    bold: Face,
    sources: [FaceSource; 2],
    engine: RefCell<TextLayoutEngine>,
}

impl FontSet {
    /// Resolve the regular and bold faces. Never fails: each face falls back from the
    /// configured file to an installed sans-serif face to the built-in bitmap font.
    pub fn load(cfg: &FontConfig) -> Self {
        let mut engine = TextLayoutEngine::new();
        let system = cfg.system_fonts.then(load_system_db);

        let (regular, regular_src) =
            resolve_face(&mut engine, cfg.regular.as_deref(), false, system.as_ref());
        let (bold, bold_src) = match resolve_face(&mut engine, cfg.bold.as_deref(), true, system.as_ref())
        {
            (Face::Builtin, _) if matches!(regular, Face::Outline(_)) => {
                (regular.clone(), regular_src.clone())
            }
            found => found,
        };

        tracing::debug!(regular = %regular_src, bold = %bold_src, "fonts resolved");
        Self {
            regular,
            bold,
            sources: [regular_src, bold_src],
            engine: RefCell::new(engine),
        }
    }

    /// A font set that only uses the built-in bitmap font.
    pub fn builtin() -> Self {
        Self {
            regular: Face::Builtin,
            bold: Face::Builtin,
            sources: [FaceSource::Builtin, FaceSource::Builtin],
            engine: RefCell::new(TextLayoutEngine::new()),
        }
    }

    /// Sources of the regular and bold faces.
    pub fn sources(&self) -> (&FaceSource, &FaceSource) {
        (&self.sources[0], &self.sources[1])
    }

    pub fn get(&self, role: FontRole) -> FontRef<'_> {
        FontRef { set: self, role }
    }

    fn face(&self, role: FontRole) -> &Face {
        if role.is_bold() {
            &self.bold
        } else {
            &self.regular
        }
    }

    pub(crate) fn measure(&self, role: FontRole, text: &str) -> f32 {
        self.measure_at(role, text, role.size_px())
    }

    fn measure_at(&self, role: FontRole, text: &str, size_px: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self.face(role) {
            Face::Builtin => builtin_font::text_width(text, size_px),
            Face::Outline(face) => self
                .engine
                .borrow_mut()
                .layout_line(
                    text,
                    &face.family,
                    size_px,
                    role.is_bold(),
                    TextBrushRgba8::default(),
                )
                .width(),
        }
    }

    /// Largest size, no larger than the role's own, at which `text` fits in
    /// `max_width`. Stops at [`MIN_FIT_SIZE_PX`] when nothing fits.
    pub(crate) fn fitted_size(&self, role: FontRole, text: &str, max_width: f32) -> f32 {
        let mut size = role.size_px();
        while size > MIN_FIT_SIZE_PX && self.measure_at(role, text, size) > max_width {
            size = (size - FIT_STEP_PX).max(MIN_FIT_SIZE_PX);
        }
        if size < role.size_px() {
            tracing::debug!(?role, text, size, "text shrunk to fit its box");
        }
        size
    }

    pub(crate) fn shape(&self, role: FontRole, text: &str, color: Rgb8) -> ShapedText {
        self.shape_at(role, text, role.size_px(), color)
    }

    /// Shape `text` in the role's face at an explicit size.
    pub(crate) fn shape_at(&self, role: FontRole, text: &str, size_px: f32, color: Rgb8) -> ShapedText {
        shape_with(
            &self.engine,
            self.face(role),
            text,
            size_px,
            role.is_bold(),
            color,
        )
    }

    /// Shape ornamental text in the regular face at an arbitrary size.
    pub(crate) fn shape_ornament(&self, text: &str, size_px: f32, color: Rgb8) -> ShapedText {
        shape_with(&self.engine, &self.regular, text, size_px, false, color)
    }
}

fn shape_with(
    engine: &RefCell<TextLayoutEngine>,
    face: &Face,
    text: &str,
    size_px: f32,
    bold: bool,
    color: Rgb8,
) -> ShapedText {
    match face {
        Face::Builtin => ShapedText::Builtin {
            text: text.to_string(),
            size_px,
            color,
        },
        Face::Outline(face) => {
            let brush = TextBrushRgba8 {
                r: color.r,
                g: color.g,
                b: color.b,
                a: 255,
            };
            let layout = engine
                .borrow_mut()
                .layout_line(text, &face.family, size_px, bold, brush);
            ShapedText::Outline {
                layout,
                font: face.data.clone(),
            }
        }
    }
}

/// A font role bound to its set; measures with that role's face and size.
#[derive(Clone, Copy)]
pub struct FontRef<'a> {
    set: &'a FontSet,
    role: FontRole,
}

impl FontRef<'_> {
    pub fn role(&self) -> FontRole {
        self.role
    }
}

impl TextMeasure for FontRef<'_> {
    fn text_width(&self, text: &str) -> f32 {
        self.set.measure(self.role, text)
    }
}

const PREFERRED_FAMILIES: [&str; 4] = ["Helvetica", "DejaVu Sans", "Liberation Sans", "Arial"];

fn load_system_db() -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    db
}

fn resolve_face(
    engine: &mut TextLayoutEngine,
    configured: Option<&Path>,
    bold: bool,
    system: Option<&usvg::fontdb::Database>,
) -> (Face, FaceSource) {
    if let Some(path) = configured {
        match std::fs::read(path) {
            Ok(bytes) => match outline_face(engine, bytes, 0) {
                Some(face) => return (face, FaceSource::File(path.to_path_buf())),
                None => {
                    tracing::warn!(path = %path.display(), "configured font is not usable");
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "configured font unreadable");
            }
        }
    }

    if let Some(db) = system
        && let Some((name, bytes, index)) = system_face(db, bold)
        && let Some(face) = outline_face(engine, bytes, index)
    {
        return (face, FaceSource::System(name));
    }

    tracing::warn!(bold, "no outline font available, using built-in bitmap font");
    (Face::Builtin, FaceSource::Builtin)
}

fn outline_face(engine: &mut TextLayoutEngine, bytes: Vec<u8>, index: u32) -> Option<Face> {
    let family = match engine.register_font(&bytes) {
        Ok(family) => family,
        Err(err) => {
            tracing::warn!(%err, "font registration failed");
            return None;
        }
    };
    let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index);
    Some(Face::Outline(OutlineFace { family, data }))
}

fn system_face(db: &usvg::fontdb::Database, bold: bool) -> Option<(String, Vec<u8>, u32)> {
    use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

    let mut families: Vec<Family<'_>> = PREFERRED_FAMILIES
        .iter()
        .map(|name| Family::Name(*name))
        .collect();
    families.push(Family::SansSerif);

    let id = db.query(&Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: Style::Normal,
    })?;
    let name = db.face(id)?.post_script_name.clone();
    db.with_face_data(id, |data, index| (name, data.to_vec(), index))
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
