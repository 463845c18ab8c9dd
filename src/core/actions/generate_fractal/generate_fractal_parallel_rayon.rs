use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::raster::Raster;
use crate::core::data::worker_count::WorkerCount;
use crate::core::errors::{MandelError, MandelResult};

fn build_thread_pool(workers: WorkerCount) -> MandelResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers.get() as usize)
        .thread_name(|idx| format!("mandel-pool-{idx}"))
        .build()
        .map_err(|e| MandelError::resource_exhaustion("build render thread pool", e))
}

/// Renders the same row bands as the scoped-thread generator on a rayon pool
/// sized to the worker count.
///
/// Each band is one task; rayon never splits a band further, so the partition
/// stays the static one.
pub fn generate_fractal_parallel_rayon<Alg, CMap>(
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
    let mut raster = Raster::new(width, height)?;
    let pool = build_thread_pool(workers)?;
    let items = raster.work_items(workers);

    let results: Vec<Result<(), u32>> = pool.install(|| {
        items
            .into_par_iter()
            .with_max_len(1)
            .enumerate()
            .map(|(worker, item)| {
                panic::catch_unwind(AssertUnwindSafe(|| item.fill(algorithm, colour_map)))
                    .map_err(|_| worker as u32)
            })
            .collect()
    });

    if let Some(worker) = results.into_iter().find_map(Result::err) {
        return Err(MandelError::WorkerPanicked { worker });
    }

    Ok(raster)
}
