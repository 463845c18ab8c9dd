use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel to the complex plane by linear interpolation over the viewport.
///
/// Pixel `(0, 0)` lands exactly on `(xmin, ymin)`; the far edge is never reached
/// because the step is `extent / size`, not `extent / (size - 1)`.
#[inline]
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, width: u32, height: u32, viewport: &Viewport) -> Complex {
    let real = viewport.xmin() + pixel.x as f64 * (viewport.xmax() - viewport.xmin()) / width as f64;
    let imag = viewport.ymin() + pixel.y as f64 * (viewport.ymax() - viewport.ymin()) / height as f64;

    Complex { real, imag }
}
