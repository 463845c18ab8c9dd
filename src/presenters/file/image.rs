use std::path::Path;

use image::{ColorType, ImageFormat};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;
use crate::core::errors::{MandelError, MandelResult};
use crate::presenters::file::ensure_parent_dir;

/// Encodes rasters through the `image` crate. Used for JPEG and PNG output.
pub struct ImageFilePresenter {
    format: ImageFormat,
}

impl ImageFilePresenter {
    pub fn jpeg() -> Self {
        Self {
            format: ImageFormat::Jpeg,
        }
    }

    pub fn png() -> Self {
        Self {
            format: ImageFormat::Png,
        }
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, raster: &Raster, filepath: &Path) -> MandelResult<()> {
        ensure_parent_dir(filepath).map_err(|err| MandelError::output(filepath, err))?;

        image::save_buffer_with_format(
            filepath,
            &raster.to_rgb_bytes(),
            raster.width(),
            raster.height(),
            ColorType::Rgb8,
            self.format,
        )
        .map_err(|err| MandelError::output(filepath, err))
    }

    fn extension(&self) -> &str {
        match self.format {
            ImageFormat::Png => "png",
            _ => "jpg",
        }
    }
}
