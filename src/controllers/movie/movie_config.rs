use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::controllers::movie::job::FrameRenderSettings;
use crate::core::data::frame_descriptor::FrameDescriptor;
use crate::core::errors::ConfigError;
use crate::core::zoom::frame_sequence::{FrameNaming, TOTAL_IMAGES, ZoomState, ZoomTrajectory};

/// Encoding of the frames a batch writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameFormat {
    #[default]
    Jpg,
    Png,
    Ppm,
}

impl FrameFormat {
    pub const ALL: &'static [Self] = &[Self::Jpg, Self::Png, Self::Ppm];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Ppm => "ppm",
        }
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FrameFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown frame format '{s}' (expected jpg, png or ppm)"))
    }
}

/// Settings of one zoom-movie batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieConfig {
    /// Most frame jobs allowed to run at once.
    pub processes: usize,
    pub frames: u32,
    pub start: ZoomState,
    pub out_dir: PathBuf,
    pub format: FrameFormat,
    pub render: FrameRenderSettings,
    /// Renderer binary for subprocess jobs. `None` means the `mandel` next to
    /// the running executable.
    pub renderer: Option<PathBuf>,
    pub in_process: bool,
}

impl Default for MovieConfig {
    fn default() -> Self {
        Self {
            processes: 1,
            frames: TOTAL_IMAGES,
            start: ZoomState::default(),
            out_dir: PathBuf::from("."),
            format: FrameFormat::default(),
            render: FrameRenderSettings::default(),
            renderer: None,
            in_process: false,
        }
    }
}

impl MovieConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.processes == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        let trajectory = self.trajectory()?;
        // Every frame shares the image settings, so checking the first covers all.
        let seed = FrameDescriptor::new(
            0,
            self.start.center_x,
            self.start.center_y,
            self.start.scale,
            trajectory.naming().path_for(0),
        );
        self.render.config_for(&seed).validate()
    }

    pub fn trajectory(&self) -> Result<ZoomTrajectory, ConfigError> {
        ZoomTrajectory::new(
            self.start,
            self.frames,
            FrameNaming::new(&self.out_dir, self.format.extension()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid_fifty_jpegs_one_at_a_time() {
        let config = MovieConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.processes, 1);
        assert_eq!(config.trajectory().unwrap().frame_count(), 50);
        assert_eq!(
            config.trajectory().unwrap().naming().path_for(3),
            PathBuf::from("./mandel03.jpg")
        );
    }

    #[test]
    fn test_zero_processes_is_rejected() {
        let config = MovieConfig {
            processes: 0,
            ..MovieConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroConcurrency));
    }

    #[test]
    fn test_zero_frames_is_rejected() {
        let config = MovieConfig {
            frames: 0,
            ..MovieConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroFrames));
    }

    #[test]
    fn test_bad_render_settings_are_rejected_up_front() {
        let config = MovieConfig {
            render: FrameRenderSettings {
                max_iterations: 0,
                ..FrameRenderSettings::default()
            },
            ..MovieConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("PNG".parse::<FrameFormat>(), Ok(FrameFormat::Png));
        assert_eq!("ppm".parse::<FrameFormat>(), Ok(FrameFormat::Ppm));
        assert!("gif".parse::<FrameFormat>().is_err());
    }
}
