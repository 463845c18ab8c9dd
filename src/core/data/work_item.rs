use std::ops::Range;

use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// A band of whole rows handed to one worker, with exclusive access to its pixels.
#[derive(Debug)]
pub struct WorkItem<'a> {
    pixels: &'a mut [Colour],
    rows: Range<u32>,
    width: u32,
}

impl<'a> WorkItem<'a> {
    pub(crate) fn new(pixels: &'a mut [Colour], rows: Range<u32>, width: u32) -> Self {
        debug_assert_eq!(pixels.len(), rows.len() * width as usize);

        Self {
            pixels,
            rows,
            width,
        }
    }

    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.rows.clone()
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Computes every pixel of the band, row by row, left to right.
    pub fn fill<Alg, CMap>(self, algorithm: &Alg, colour_map: &CMap)
    where
        Alg: FractalAlgorithm,
        CMap: ColourMap<Alg::Success>,
    {
        let width = self.width;
        let coords = self
            .rows
            .flat_map(move |y| (0..width).map(move |x| Point { x, y }));

        for (slot, pixel) in self.pixels.iter_mut().zip(coords) {
            *slot = colour_map.map(algorithm.compute(pixel));
        }
    }
}
