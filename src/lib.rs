mod controllers;
mod core;
pub mod logging;
mod presenters;

pub use controllers::mandelbrot::{MandelbrotController, mandelbrot_controller, render_mandelbrot};
pub use controllers::movie::job::{
    FrameJobRunner, FrameRenderSettings, JobOutcome, JobStatus, RenderJobCommand,
};
pub use controllers::movie::movie_config::{FrameFormat, MovieConfig};
pub use controllers::movie::movie_controller::{default_renderer_path, movie_controller};
pub use controllers::movie::runners::in_process::InProcessJobRunner;
pub use controllers::movie::runners::process::ProcessJobRunner;
pub use controllers::movie::scheduler::{BatchReport, BatchStatus, FrameScheduler};
pub use controllers::movie::slot_pool::{SlotPermit, SlotPool};
pub use controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::generate_fractal::executor_backend::{
    ExecutorBackend, generate_fractal_parallel,
};
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_descriptor::FrameDescriptor;
pub use crate::core::data::point::Point;
pub use crate::core::data::raster::Raster;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::data::worker_count::{MAX_WORKERS, MIN_WORKERS, WorkerCount};
pub use crate::core::errors::{ConfigError, MandelError, MandelResult};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_iterations};
pub use crate::core::fractals::mandelbrot::colour_maps::linear_ramp::LinearRamp;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::util::calculate_row_bands::calculate_row_bands;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
pub use crate::core::zoom::frame_sequence::{FrameNaming, FrameSequence, ZoomState, ZoomTrajectory};

pub use presenters::file::image::ImageFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::file::presenter_for_path;
