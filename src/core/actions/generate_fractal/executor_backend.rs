use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::info;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_parallel_scoped_threads::generate_fractal_parallel_scoped_threads;
use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::raster::Raster;
use crate::core::data::worker_count::WorkerCount;
use crate::core::errors::MandelResult;

/// How the row bands of one image are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutorBackend {
    #[default]
    ScopedThreads,
    RayonPool,
}

impl ExecutorBackend {
    pub const ALL: &'static [Self] = &[Self::ScopedThreads, Self::RayonPool];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScopedThreads => "threads",
            Self::RayonPool => "rayon",
        }
    }
}

impl fmt::Display for ExecutorBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExecutorBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|backend| backend.name() == s)
            .ok_or_else(|| format!("unknown executor backend '{s}' (expected threads or rayon)"))
    }
}

/// Partitions the raster into row bands, runs them on the chosen backend and
/// waits for all of them. Returns a fully rendered raster or an error, never a
/// partial image.
pub fn generate_fractal_parallel<Alg, CMap>(
    backend: ExecutorBackend,
    width: u32,
    height: u32,
    workers: WorkerCount,
    algorithm: &Alg,
    colour_map: &CMap,
) -> MandelResult<Raster>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let start = Instant::now();

    let raster = match backend {
        ExecutorBackend::ScopedThreads => {
            generate_fractal_parallel_scoped_threads(width, height, workers, algorithm, colour_map)
        }
        ExecutorBackend::RayonPool => {
            generate_fractal_parallel_rayon(width, height, workers, algorithm, colour_map)
        }
    }?;

    info!(
        %backend,
        workers = workers.get(),
        width,
        height,
        elapsed = ?start.elapsed(),
        "raster rendered"
    );

    Ok(raster)
}
