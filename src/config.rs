use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::render_settings::{RenderSettings, RenderStrategy};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.1;
pub const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Settings shared by the CLI and GUI binaries. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub zoom_factor: f64,
    pub caching_enabled: bool,
    pub strategy: RenderStrategy,
    pub output_path: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            caching_enabled: true,
            strategy: RenderStrategy::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ExplorerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded config");

        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        PixelRect::new(self.width, self.height)?;

        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "zoom_factor must be finite and greater than 1, got {}",
                self.zoom_factor
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings::new(self.max_iterations)
            .with_caching(self.caching_enabled)
            .with_strategy(self.strategy)
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, ConfigError> {
        Ok(PixelRect::new(self.width, self.height)?)
    }
}
