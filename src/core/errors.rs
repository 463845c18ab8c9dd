use std::error::Error as StdError;
use std::path::PathBuf;

pub type MandelResult<T> = Result<T, MandelError>;

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// Rejected settings. Every variant is raised before any computation starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("worker count must be between {min} and {max}, got {got}")]
    WorkerCountOutOfRange { got: u32, min: u32, max: u32 },

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("viewport extents must be positive: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("raster size must be positive: {width}x{height}")]
    InvalidRasterSize { width: u32, height: u32 },

    #[error("scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("concurrent job limit must be at least 1")]
    ZeroConcurrency,

    #[error("frame count must be at least 1")]
    ZeroFrames,
}

#[derive(thiserror::Error, Debug)]
pub enum MandelError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("resource exhaustion: {context}: {source}")]
    ResourceExhaustion {
        context: String,
        #[source]
        source: BoxedSource,
    },

    #[error("render worker {worker} panicked")]
    WorkerPanicked { worker: u32 },

    #[error("failed to write '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
}

impl MandelError {
    pub fn resource_exhaustion(
        context: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self::ResourceExhaustion {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: impl Into<BoxedSource>) -> Self {
        Self::Output {
            path: path.into(),
            source: source.into(),
        }
    }

    /// True for the conditions that must stop a whole batch rather than a single frame.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration(_) | Self::ResourceExhaustion { .. }
        )
    }
}
