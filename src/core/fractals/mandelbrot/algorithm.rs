use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::errors::ConfigError;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts orbit steps of `z -> z² + c`, starting at `z = c`, until `|z|² > 4`.
///
/// Returns `max_iterations` when the orbit stays bounded that long. A magnitude
/// of exactly 4 keeps iterating.
#[inline]
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;
    let mut iteration = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z * z + c;
        iteration += 1;
    }

    iteration
}

/// Escape-time Mandelbrot over a fixed raster size and viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    width: u32,
    height: u32,
    viewport: Viewport,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        let c = pixel_to_complex_coords(pixel, self.width, self.height, &self.viewport);

        escape_iterations(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        width: u32,
        height: u32,
        viewport: Viewport,
        max_iterations: u32,
    ) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidRasterSize { width, height });
        }

        Ok(Self {
            width,
            height,
            viewport,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
