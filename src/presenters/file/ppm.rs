use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;
use crate::core::errors::{MandelError, MandelResult};
use crate::presenters::file::ensure_parent_dir;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &Raster, filepath: &Path) -> MandelResult<()> {
        write_ppm(raster, filepath).map_err(|err| MandelError::output(filepath, err))
    }

    fn extension(&self) -> &str {
        "ppm"
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn write_ppm(raster: &Raster, filepath: &Path) -> std::io::Result<()> {
    ensure_parent_dir(filepath)?;
    let mut file = BufWriter::new(File::create(filepath)?);

    // P6 is binary RGB: magic, dimensions, max channel value, then the pixels.
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", raster.width(), raster.height())?;
    writeln!(file, "255")?;
    file.write_all(&raster.to_rgb_bytes())?;
    file.flush()
}
