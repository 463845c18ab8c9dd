use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::actions::generate_fractal::executor_backend::ExecutorBackend;
use crate::core::data::frame_descriptor::FrameDescriptor;
use crate::core::errors::MandelResult;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, MandelbrotConfig,
};

/// Image settings shared by every frame of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRenderSettings {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub workers: u32,
    pub backend: ExecutorBackend,
}

impl Default for FrameRenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            workers: 1,
            backend: ExecutorBackend::default(),
        }
    }
}

impl FrameRenderSettings {
    /// The single-image config that renders `frame`.
    #[must_use]
    pub fn config_for(&self, frame: &FrameDescriptor) -> MandelbrotConfig {
        MandelbrotConfig {
            center_x: frame.center_x(),
            center_y: frame.center_y(),
            scale: frame.scale(),
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            workers: self.workers,
            backend: self.backend,
            output: frame.output().to_path_buf(),
        }
    }
}

/// Typed parameters of one renderer invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJobCommand {
    pub config: MandelbrotConfig,
}

impl RenderJobCommand {
    #[must_use]
    pub fn new(settings: &FrameRenderSettings, frame: &FrameDescriptor) -> Self {
        Self {
            config: settings.config_for(frame),
        }
    }

    /// Argument vector for the `mandel` binary. Each value is its own argument.
    #[must_use]
    pub fn to_args(&self) -> Vec<OsString> {
        let config = &self.config;

        vec![
            "-x".into(),
            config.center_x.to_string().into(),
            "-y".into(),
            config.center_y.to_string().into(),
            "-s".into(),
            config.scale.to_string().into(),
            "-W".into(),
            config.width.to_string().into(),
            "-H".into(),
            config.height.to_string().into(),
            "-m".into(),
            config.max_iterations.to_string().into(),
            "-t".into(),
            config.workers.to_string().into(),
            "--backend".into(),
            config.backend.name().into(),
            "-o".into(),
            config.output.clone().into_os_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Succeeded,
    Failed { details: String },
}

/// What happened to one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct JobOutcome {
    pub frame_index: u32,
    pub output: PathBuf,
    pub status: JobStatus,
    pub elapsed: Duration,
}

impl JobOutcome {
    #[must_use]
    pub fn succeeded(frame: &FrameDescriptor, elapsed: Duration) -> Self {
        Self {
            frame_index: frame.frame_index(),
            output: frame.output().to_path_buf(),
            status: JobStatus::Succeeded,
            elapsed,
        }
    }

    #[must_use]
    pub fn failed(frame: &FrameDescriptor, details: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            frame_index: frame.frame_index(),
            output: frame.output().to_path_buf(),
            status: JobStatus::Failed {
                details: details.into(),
            },
            elapsed,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == JobStatus::Succeeded
    }
}

/// Executes one frame in isolation from the others.
///
/// `Ok` carries the outcome of a job that ran, whether it succeeded or not.
/// `Err` means the job could not be started at all and the batch must stop.
pub trait FrameJobRunner: Sync {
    fn run(&self, frame: &FrameDescriptor) -> MandelResult<JobOutcome>;
}

impl<F> FrameJobRunner for F
where
    F: Fn(&FrameDescriptor) -> MandelResult<JobOutcome> + Sync,
{
    fn run(&self, frame: &FrameDescriptor) -> MandelResult<JobOutcome> {
        self(frame)
    }
}
