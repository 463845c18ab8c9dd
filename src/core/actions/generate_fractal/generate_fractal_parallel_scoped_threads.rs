use std::thread;

use tracing::debug;

use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::raster::Raster;
use crate::core::data::worker_count::WorkerCount;
use crate::core::errors::{MandelError, MandelResult};

/// Renders with one scoped OS thread per row band.
///
/// Workers write straight into disjoint slices of the raster, so the only
/// synchronisation is the join at the end of the scope. If a worker cannot be
/// started or panics, the whole render fails and the raster is dropped.
pub fn generate_fractal_parallel_scoped_threads<Alg, CMap>(
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
    let items = raster.work_items(workers);

    thread::scope(|scope| -> MandelResult<()> {
        let mut handles = Vec::with_capacity(items.len());
        let mut spawn_failure = None;

        for (worker, item) in items.into_iter().enumerate() {
            debug!(worker, rows = ?item.rows(), "starting row band");

            let spawned = thread::Builder::new()
                .name(format!("mandel-band-{worker}"))
                .spawn_scoped(scope, move || item.fill(algorithm, colour_map));

            match spawned {
                Ok(handle) => handles.push((worker as u32, handle)),
                Err(err) => {
                    spawn_failure = Some(MandelError::resource_exhaustion(
                        format!("spawn render worker {worker}"),
                        err,
                    ));
                    break;
                }
            }
        }

        // Join everything that did start before reporting anything.
        let mut panicked = None;
        for (worker, handle) in handles {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(MandelError::WorkerPanicked { worker });
            }
        }

        match spawn_failure.or(panicked) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    })?;

    Ok(raster)
}
