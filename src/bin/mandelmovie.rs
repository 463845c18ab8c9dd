use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing::warn;

use mandel::logging::{DEFAULT_LOG_LEVEL, init_logging};
use mandel::{
    BatchStatus, ExecutorBackend, FrameFormat, FrameRenderSettings, JobStatus, MovieConfig,
    ZoomState, movie_controller,
};

/// Render a zoom into the Mandelbrot set as a numbered sequence of images.
#[derive(Parser, Debug)]
#[command(name = "mandelmovie", version)]
struct Cli {
    /// Most frames rendered at the same time.
    #[arg(short = 'p', default_value_t = 1)]
    processes: usize,

    /// Number of frames to render.
    #[arg(long, default_value_t = 50)]
    frames: u32,

    /// Directory the frames are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Image format of the frames.
    #[arg(long, default_value_t = FrameFormat::Jpg)]
    format: FrameFormat,

    /// Frame width in pixels.
    #[arg(short = 'W', default_value_t = 1000)]
    width: u32,

    /// Frame height in pixels.
    #[arg(short = 'H', default_value_t = 1000)]
    height: u32,

    /// Iteration budget per pixel.
    #[arg(short = 'm', default_value_t = 1000)]
    max_iterations: u32,

    /// Worker threads inside each frame (1-20).
    #[arg(short = 't', default_value_t = 1)]
    threads: u32,

    /// How each frame's row bands are executed.
    #[arg(long, default_value_t = ExecutorBackend::ScopedThreads)]
    backend: ExecutorBackend,

    /// Renderer binary run once per frame. Defaults to the `mandel` next to this program.
    #[arg(long, conflicts_with = "in_process")]
    renderer: Option<PathBuf>,

    /// Render frames on threads of this process instead of child processes.
    #[arg(long)]
    in_process: bool,
}

impl From<Cli> for MovieConfig {
    fn from(cli: Cli) -> Self {
        Self {
            processes: cli.processes,
            frames: cli.frames,
            start: ZoomState::default(),
            out_dir: cli.out_dir,
            format: cli.format,
            render: FrameRenderSettings {
                width: cli.width,
                height: cli.height,
                max_iterations: cli.max_iterations,
                workers: cli.threads,
                backend: cli.backend,
            },
            renderer: cli.renderer,
            in_process: cli.in_process,
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<BatchStatus> {
    init_logging(DEFAULT_LOG_LEVEL).context("initialise logging")?;

    let config = MovieConfig::from(cli);
    let report = movie_controller(&config).context("render zoom sequence")?;

    for outcome in report.failures() {
        if let JobStatus::Failed { details } = &outcome.status {
            warn!(
                frame = outcome.frame_index,
                output = %outcome.output.display(),
                %details,
                "frame failed"
            );
        }
    }

    Ok(report.status())
}

fn main() -> ExitCode {
    // Bad arguments are fatal (1); exit code 2 is reserved for partial failure.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("mandelmovie: {err:#}");
            ExitCode::FAILURE
        }
    }
}
