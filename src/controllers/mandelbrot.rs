use std::path::Path;

use tracing::{debug, info, instrument};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_fractal::executor_backend::generate_fractal_parallel;
use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::data::raster::Raster;
use crate::core::errors::{MandelError, MandelResult};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::presenters::file::presenter_for_path;

/// Validates the config and renders one image into memory.
#[instrument(level = "debug", skip_all, fields(width = config.width, height = config.height))]
pub fn render_mandelbrot(config: &MandelbrotConfig) -> MandelResult<Raster> {
    let plan = config.plan()?;

    debug!(
        center_x = config.center_x,
        center_y = config.center_y,
        scale = config.scale,
        xmin = plan.viewport.xmin(),
        xmax = plan.viewport.xmax(),
        ymin = plan.viewport.ymin(),
        ymax = plan.viewport.ymax(),
        colour_map = plan.colour_map.display_name(),
        "viewport resolved"
    );

    generate_fractal_parallel(
        config.backend,
        config.width,
        config.height,
        plan.workers,
        &plan.algorithm,
        &plan.colour_map,
    )
}

/// Renders with a fixed presenter and keeps the last raster until it is written.
pub struct MandelbrotController<P: FilePresenterPort> {
    presenter: P,
    raster: Option<Raster>,
}

impl<P: FilePresenterPort> MandelbrotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            raster: None,
        }
    }

    pub fn generate(&mut self, config: &MandelbrotConfig) -> MandelResult<&Raster> {
        Ok(&*self.raster.insert(render_mandelbrot(config)?))
    }

    /// Writes the last generated raster. Fails if nothing has been generated yet.
    pub fn write(&self, filepath: &Path) -> MandelResult<()> {
        let raster = self
            .raster
            .as_ref()
            .ok_or_else(|| MandelError::output(filepath, "no image has been generated"))?;

        self.presenter.present(raster, filepath)?;
        info!(path = %filepath.display(), "image written");

        Ok(())
    }
}

/// Renders `config` and writes it to `config.output`, choosing the encoder from
/// the file extension. Nothing is written unless the whole image rendered.
#[instrument(skip_all, fields(output = %config.output.display()))]
pub fn mandelbrot_controller(config: &MandelbrotConfig) -> MandelResult<()> {
    let presenter = presenter_for_path(&config.output)?;

    info!(
        width = config.width,
        height = config.height,
        max_iterations = config.max_iterations,
        workers = config.workers,
        backend = %config.backend,
        "rendering mandelbrot set"
    );

    let mut controller = MandelbrotController::new(presenter);
    controller.generate(config)?;
    controller.write(&config.output)
}
