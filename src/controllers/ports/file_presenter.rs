use std::path::Path;

use crate::core::data::raster::Raster;
use crate::core::errors::MandelResult;

pub trait FilePresenterPort {
    fn present(&self, raster: &Raster, filepath: &Path) -> MandelResult<()>;

    fn extension(&self) -> &str;
}

impl<T: FilePresenterPort + ?Sized> FilePresenterPort for Box<T> {
    fn present(&self, raster: &Raster, filepath: &Path) -> MandelResult<()> {
        (**self).present(raster, filepath)
    }

    fn extension(&self) -> &str {
        (**self).extension()
    }
}
