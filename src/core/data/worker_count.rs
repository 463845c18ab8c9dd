use crate::core::errors::ConfigError;

pub const MIN_WORKERS: u32 = 1;
pub const MAX_WORKERS: u32 = 20;

/// Number of row-band workers used for one image, always within `1..=20`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkerCount(u32);

impl WorkerCount {
    pub const SINGLE: Self = Self(1);

    pub fn new(workers: u32) -> Result<Self, ConfigError> {
        if !(MIN_WORKERS..=MAX_WORKERS).contains(&workers) {
            return Err(ConfigError::WorkerCountOutOfRange {
                got: workers,
                min: MIN_WORKERS,
                max: MAX_WORKERS,
            });
        }

        Ok(Self(workers))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl TryFrom<u32> for WorkerCount {
    type Error = ConfigError;

    fn try_from(workers: u32) -> Result<Self, Self::Error> {
        Self::new(workers)
    }
}
