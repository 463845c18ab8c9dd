use std::time::Instant;

use crate::controllers::mandelbrot::render_mandelbrot;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::movie::job::{FrameJobRunner, FrameRenderSettings, JobOutcome};
use crate::core::data::frame_descriptor::FrameDescriptor;
use crate::core::errors::MandelResult;
use crate::presenters::file::presenter_for_path;

/// Renders each frame on the job's own thread through the library pipeline.
///
/// A frame whose render or write fails becomes a failed outcome. Errors that
/// would fail every frame the same way, like bad settings or thread exhaustion,
/// stop the batch instead.
#[derive(Debug, Clone, Default)]
pub struct InProcessJobRunner {
    settings: FrameRenderSettings,
}

impl InProcessJobRunner {
    pub fn new(settings: FrameRenderSettings) -> Self {
        Self { settings }
    }
}

impl FrameJobRunner for InProcessJobRunner {
    fn run(&self, frame: &FrameDescriptor) -> MandelResult<JobOutcome> {
        let start = Instant::now();
        let config = self.settings.config_for(frame);

        let result = presenter_for_path(&config.output).and_then(|presenter| {
            let raster = render_mandelbrot(&config)?;
            presenter.present(&raster, &config.output)
        });

        match result {
            Ok(()) => Ok(JobOutcome::succeeded(frame, start.elapsed())),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => Ok(JobOutcome::failed(frame, err.to_string(), start.elapsed())),
        }
    }
}
