use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::work_item::WorkItem;
use crate::core::data::worker_count::WorkerCount;
use crate::core::errors::ConfigError;
use crate::core::util::calculate_row_bands::calculate_row_bands;

/// Row-major grid of colours, `width * height` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Raster {
    /// Creates a black raster.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidRasterSize { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Colour::BLACK; width as usize * height as usize],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if point.x >= self.width || point.y >= self.height {
            return None;
        }

        self.pixels
            .get(point.y as usize * self.width as usize + point.x as usize)
            .copied()
    }

    /// Splits the raster into one work item per worker, each owning a disjoint
    /// band of whole rows. The bands tile `0..height` in order.
    pub fn work_items(&mut self, workers: WorkerCount) -> Vec<WorkItem<'_>> {
        let width = self.width;
        let row_len = width as usize;
        let mut rest: &mut [Colour] = &mut self.pixels;

        calculate_row_bands(self.height, workers)
            .into_iter()
            .map(|rows| {
                let (band, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * row_len);
                rest = tail;
                WorkItem::new(band, rows, width)
            })
            .collect()
    }

    /// Packs the raster as row-major RGB triples, the layout image encoders expect.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|colour| [colour.r, colour.g, colour.b])
            .collect()
    }
}
