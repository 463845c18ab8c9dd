use std::path::{Path, PathBuf};

use crate::core::data::frame_descriptor::FrameDescriptor;
use crate::core::errors::ConfigError;

pub const TOTAL_IMAGES: u32 = 50;
pub const ZOOM_FACTOR: f64 = 0.9;
pub const CENTER_DRIFT: f64 = 0.05;

/// Camera state carried from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            scale: 4.0,
        }
    }
}

impl ZoomState {
    /// Zooms in, then drifts the centre by a fraction of the *new* scale.
    #[must_use]
    pub fn advance(self) -> Self {
        let scale = self.scale * ZOOM_FACTOR;

        Self {
            center_x: self.center_x + scale * CENTER_DRIFT,
            center_y: self.center_y + scale * CENTER_DRIFT,
            scale,
        }
    }
}

/// Output file names of the form `<dir>/<prefix><NN>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNaming {
    directory: PathBuf,
    prefix: String,
    extension: String,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self::new(".", "jpg")
    }
}

impl FrameNaming {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: "mandel".to_string(),
            extension: extension.into(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn path_for(&self, frame_index: u32) -> PathBuf {
        self.directory
            .join(format!("{}{frame_index:02}.{}", self.prefix, self.extension))
    }
}

/// A finite logarithmic zoom. Iterating it twice yields the same frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTrajectory {
    start: ZoomState,
    frame_count: u32,
    naming: FrameNaming,
}

impl Default for ZoomTrajectory {
    fn default() -> Self {
        Self {
            start: ZoomState::default(),
            frame_count: TOTAL_IMAGES,
            naming: FrameNaming::default(),
        }
    }
}

impl ZoomTrajectory {
    pub fn new(start: ZoomState, frame_count: u32, naming: FrameNaming) -> Result<Self, ConfigError> {
        if frame_count == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        if !(start.scale.is_finite() && start.scale > 0.0) {
            return Err(ConfigError::InvalidScale(start.scale));
        }

        Ok(Self {
            start,
            frame_count,
            naming,
        })
    }

    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    #[must_use]
    pub fn naming(&self) -> &FrameNaming {
        &self.naming
    }

    /// Lazily produces the frames, starting over from the initial state.
    #[must_use]
    pub fn frames(&self) -> FrameSequence<'_> {
        FrameSequence {
            trajectory: self,
            state: self.start,
            next_index: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameSequence<'a> {
    trajectory: &'a ZoomTrajectory,
    state: ZoomState,
    next_index: u32,
}

impl Iterator for FrameSequence<'_> {
    type Item = FrameDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.trajectory.frame_count {
            return None;
        }

        let frame_index = self.next_index;
        let frame = FrameDescriptor::new(
            frame_index,
            self.state.center_x,
            self.state.center_y,
            self.state.scale,
            self.trajectory.naming.path_for(frame_index),
        );

        self.state = self.state.advance();
        self.next_index += 1;

        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.trajectory.frame_count - self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSequence<'_> {}
