use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use uuid::Uuid;

use crate::foundation::error::{CardError, CardResult};

/// `report_{YYYYMMDD_HHMMSS}_{id}.png`; the id keeps concurrent writers apart.
pub fn report_file_name<Tz: TimeZone>(at: &DateTime<Tz>, id: Uuid) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("report_{}_{}.png", at.format("%Y%m%d_%H%M%S"), id.simple())
}

/// Write `image` as PNG under `dir`, creating it if needed, and return the path.
pub fn write_report(image: &image::RgbaImage, dir: &Path) -> CardResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| CardError::output(dir, e.to_string()))?;

    let path = dir.join(report_file_name(&chrono::Local::now(), Uuid::new_v4()));
    image
        .save_with_format(&path, image::ImageFormat::Png)
        .map_err(|e| CardError::output(&path, e.to_string()))?;

    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/writer.rs"]
mod tests;
