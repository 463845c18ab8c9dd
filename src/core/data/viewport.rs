use crate::core::errors::ConfigError;

/// Rectangular region of the complex plane mapped onto a raster.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ConfigError> {
        let width = xmax - xmin;
        let height = ymax - ymin;

        // NaN compares false both ways, so test for the valid case.
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::InvalidViewport { width, height });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Builds the viewport centred on `(center_x, center_y)` that spans `scale`
    /// along the real axis. The imaginary span keeps the raster's aspect ratio.
    pub fn from_center(
        center_x: f64,
        center_y: f64,
        scale: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ConfigError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ConfigError::InvalidScale(scale));
        }
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidRasterSize { width, height });
        }

        let yscale = scale / width as f64 * height as f64;

        Self::new(
            center_x - scale / 2.0,
            center_x + scale / 2.0,
            center_y - yscale / 2.0,
            center_y + yscale / 2.0,
        )
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}
