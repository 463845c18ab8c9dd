use std::path::{Path, PathBuf};

use crate::core::data::viewport::Viewport;
use crate::core::errors::ConfigError;

/// One frame of a zoom animation: where to look and where to write it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDescriptor {
    frame_index: u32,
    center_x: f64,
    center_y: f64,
    scale: f64,
    output: PathBuf,
}

impl FrameDescriptor {
    #[must_use]
    pub fn new(frame_index: u32, center_x: f64, center_y: f64, scale: f64, output: PathBuf) -> Self {
        Self {
            frame_index,
            center_x,
            center_y,
            scale,
            output,
        }
    }

    #[must_use]
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn viewport(&self, width: u32, height: u32) -> Result<Viewport, ConfigError> {
        Viewport::from_center(self.center_x, self.center_y, self.scale, width, height)
    }
}
