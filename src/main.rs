use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use mandel::logging::{DEFAULT_LOG_LEVEL, init_logging};
use mandel::{ExecutorBackend, MandelbrotConfig, mandelbrot_controller};

/// Render one image of the Mandelbrot set.
#[derive(Parser, Debug)]
#[command(name = "mandel", version)]
struct Cli {
    /// Real coordinate of the image centre.
    #[arg(short = 'x', default_value_t = 0.0, allow_negative_numbers = true)]
    center_x: f64,

    /// Imaginary coordinate of the image centre.
    #[arg(short = 'y', default_value_t = 0.0, allow_negative_numbers = true)]
    center_y: f64,

    /// Width of the view along the real axis.
    #[arg(short = 's', default_value_t = 4.0)]
    scale: f64,

    /// Image width in pixels.
    #[arg(short = 'W', default_value_t = 1000)]
    width: u32,

    /// Image height in pixels.
    #[arg(short = 'H', default_value_t = 1000)]
    height: u32,

    /// Iteration budget per pixel.
    #[arg(short = 'm', default_value_t = 1000)]
    max_iterations: u32,

    /// Number of worker threads (1-20).
    #[arg(short = 't', default_value_t = 1)]
    threads: u32,

    /// Output file; the extension picks the format (jpg, png or ppm).
    #[arg(short = 'o', default_value = "mandel.jpg")]
    output: PathBuf,

    /// How the row bands are executed.
    #[arg(long, default_value_t = ExecutorBackend::ScopedThreads)]
    backend: ExecutorBackend,
}

impl From<Cli> for MandelbrotConfig {
    fn from(cli: Cli) -> Self {
        Self {
            center_x: cli.center_x,
            center_y: cli.center_y,
            scale: cli.scale,
            width: cli.width,
            height: cli.height,
            max_iterations: cli.max_iterations,
            workers: cli.threads,
            backend: cli.backend,
            output: cli.output,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(DEFAULT_LOG_LEVEL).context("initialise logging")?;

    let config = MandelbrotConfig::from(cli);
    mandelbrot_controller(&config)
        .with_context(|| format!("render '{}'", config.output.display()))?;

    Ok(())
}
