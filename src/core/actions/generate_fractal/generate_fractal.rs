use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::raster::Raster;
use crate::core::data::worker_count::WorkerCount;
use crate::core::errors::MandelResult;

/// Single-threaded reference renderer. The parallel generators must match it byte for byte.
pub fn generate_fractal<Alg, CMap>(
    width: u32,
    height: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> MandelResult<Raster>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut raster = Raster::new(width, height)?;

    for item in raster.work_items(WorkerCount::SINGLE) {
        item.fill(algorithm, colour_map);
    }

    Ok(raster)
}
