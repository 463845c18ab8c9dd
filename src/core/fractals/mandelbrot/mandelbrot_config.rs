use std::path::PathBuf;

use crate::core::actions::generate_fractal::executor_backend::ExecutorBackend;
use crate::core::data::viewport::Viewport;
use crate::core::data::worker_count::WorkerCount;
use crate::core::errors::ConfigError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::linear_ramp::LinearRamp;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_SCALE: f64 = 4.0;
pub const DEFAULT_OUTPUT: &str = "mandel.jpg";

/// Everything needed to render one image, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub workers: u32,
    pub backend: ExecutorBackend,
    pub output: PathBuf,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            scale: DEFAULT_SCALE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            workers: 1,
            backend: ExecutorBackend::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// A config that passed validation, with its derived pieces ready to use.
#[derive(Debug, Clone, Copy)]
pub struct RenderPlan {
    pub viewport: Viewport,
    pub workers: WorkerCount,
    pub algorithm: MandelbrotAlgorithm,
    pub colour_map: LinearRamp,
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plan().map(|_| ())
    }

    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        Viewport::from_center(self.center_x, self.center_y, self.scale, self.width, self.height)
    }

    pub fn plan(&self) -> Result<RenderPlan, ConfigError> {
        let workers = WorkerCount::new(self.workers)?;
        let colour_map = LinearRamp::new(self.max_iterations)?;
        let viewport = self.viewport()?;
        let algorithm =
            MandelbrotAlgorithm::new(self.width, self.height, viewport, self.max_iterations)?;

        Ok(RenderPlan {
            viewport,
            workers,
            algorithm,
            colour_map,
        })
    }
}
