use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::debug;

use crate::controllers::movie::job::{FrameJobRunner, FrameRenderSettings, JobOutcome, RenderJobCommand};
use crate::core::data::frame_descriptor::FrameDescriptor;
use crate::core::errors::{MandelError, MandelResult};

const STDERR_TAIL_LINES: usize = 5;

/// Renders each frame in a child `mandel` process.
#[derive(Debug, Clone)]
pub struct ProcessJobRunner {
    program: PathBuf,
    settings: FrameRenderSettings,
}

impl ProcessJobRunner {
    pub fn new(program: impl Into<PathBuf>, settings: FrameRenderSettings) -> Self {
        Self {
            program: program.into(),
            settings,
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl FrameJobRunner for ProcessJobRunner {
    fn run(&self, frame: &FrameDescriptor) -> MandelResult<JobOutcome> {
        let start = Instant::now();
        let command = RenderJobCommand::new(&self.settings, frame);

        let mut cmd = Command::new(&self.program);
        cmd.args(command.to_args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let child = cmd.spawn().map_err(|e| {
            MandelError::resource_exhaustion(
                format!(
                    "failed to spawn renderer '{}' for frame {}",
                    self.program.display(),
                    frame.frame_index()
                ),
                e,
            )
        })?;
        debug!(frame = frame.frame_index(), pid = child.id(), "renderer spawned");

        let output = match child.wait_with_output() {
            Ok(output) => output,
            Err(e) => {
                return Ok(JobOutcome::failed(
                    frame,
                    format!("failed to wait for renderer: {e}"),
                    start.elapsed(),
                ));
            }
        };

        if output.status.success() {
            return Ok(JobOutcome::succeeded(frame, start.elapsed()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Ok(JobOutcome::failed(
            frame,
            format!(
                "renderer exited with {}: {}",
                output.status,
                stderr_tail(&stderr)
            ),
            start.elapsed(),
        ))
    }
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim().lines().collect();
    let skip = lines.len().saturating_sub(STDERR_TAIL_LINES);

    lines[skip..].join(" | ")
}
