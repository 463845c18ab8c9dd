use crate::core::data::point::Point;

/// Per-pixel computation run by the raster generators.
///
/// Implementations must be pure: the generators call `compute` from several
/// threads at once and rely on identical answers for identical pixels.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
