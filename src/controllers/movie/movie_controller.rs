use std::fs;
use std::path::PathBuf;

use tracing::{info, instrument};

use crate::controllers::movie::movie_config::MovieConfig;
use crate::controllers::movie::runners::in_process::InProcessJobRunner;
use crate::controllers::movie::runners::process::ProcessJobRunner;
use crate::controllers::movie::scheduler::{BatchReport, FrameScheduler};
use crate::controllers::movie::slot_pool::SlotPool;
use crate::core::errors::{MandelError, MandelResult};

/// Renders the whole zoom sequence described by `config`.
///
/// Returns `Err` only for conditions that stop the batch. Individual frame
/// failures are in the report.
#[instrument(skip_all, fields(frames = config.frames, processes = config.processes))]
pub fn movie_controller(config: &MovieConfig) -> MandelResult<BatchReport> {
    config.validate()?;
    let trajectory = config.trajectory()?;
    let slots = SlotPool::new(config.processes)?;

    fs::create_dir_all(&config.out_dir).map_err(|e| MandelError::output(&config.out_dir, e))?;

    info!(
        frames = trajectory.frame_count(),
        max_concurrent = slots.capacity(),
        out_dir = %config.out_dir.display(),
        format = %config.format,
        in_process = config.in_process,
        "rendering zoom sequence"
    );

    if config.in_process {
        let runner = InProcessJobRunner::new(config.render);
        return FrameScheduler::new(&slots, runner).run(trajectory.frames());
    }

    let program = match &config.renderer {
        Some(path) => path.clone(),
        None => default_renderer_path()?,
    };
    info!(renderer = %program.display(), "using renderer binary");

    let runner = ProcessJobRunner::new(program, config.render);
    FrameScheduler::new(&slots, runner).run(trajectory.frames())
}

/// The `mandel` binary installed next to the running executable.
pub fn default_renderer_path() -> MandelResult<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| MandelError::resource_exhaustion("failed to locate the running executable", e))?;

    Ok(exe.with_file_name(format!("mandel{}", std::env::consts::EXE_SUFFIX)))
}
