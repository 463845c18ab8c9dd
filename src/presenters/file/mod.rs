use std::fs;
use std::io;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::errors::{MandelError, MandelResult};

pub mod image;
pub mod ppm;

use self::image::ImageFilePresenter;
use self::ppm::PpmFilePresenter;

/// Output formats the renderer can write.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "ppm"];

/// Picks a presenter from the file extension, case-insensitively.
pub fn presenter_for_path(filepath: &Path) -> MandelResult<Box<dyn FilePresenterPort + Send + Sync>> {
    let extension = filepath
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => Ok(Box::new(ImageFilePresenter::jpeg())),
        "png" => Ok(Box::new(ImageFilePresenter::png())),
        "ppm" => Ok(Box::new(PpmFilePresenter::new())),
        other => Err(MandelError::output(
            filepath,
            format!(
                "unsupported image format '{other}' (expected one of {})",
                SUPPORTED_EXTENSIONS.join(", ")
            ),
        )),
    }
}

pub(crate) fn ensure_parent_dir(filepath: &Path) -> io::Result<()> {
    match filepath.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
