use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::errors::ConfigError;

const FULL_SCALE: u64 = 0xFF_FF_FF;

/// Linear ramp from black at zero iterations to white at the iteration limit.
///
/// The 24-bit scalar is `floor(0xFFFFFF * k / max)`, unpacked as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearRamp {
    max_iterations: u32,
}

impl LinearRamp {
    pub fn new(max_iterations: u32) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    /// The packed colour value before it is split into channels.
    #[must_use]
    pub fn scalar(&self, iterations: u32) -> u32 {
        let k = iterations.min(self.max_iterations) as u64;

        (FULL_SCALE * k / self.max_iterations as u64) as u32
    }
}

impl ColourMap<u32> for LinearRamp {
    fn map(&self, iterations: u32) -> Colour {
        Colour::from_packed(self.scalar(iterations))
    }

    fn display_name(&self) -> &str {
        "Linear ramp"
    }
}
