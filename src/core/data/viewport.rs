use crate::core::data::complex::Complex;
use thiserror::Error;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_OFFSET: Complex = Complex::new(-0.5, 0.0);

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom must be finite and greater than zero, got {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("offset must be finite, got ({}, {})", .offset.real, .offset.imag)]
    InvalidOffset { offset: Complex },
    #[error("zoom factor must be finite and greater than zero, got {factor}")]
    InvalidZoomFactor { factor: f64 },
}

/// Which part of the complex plane is visible.
///
/// Only obtainable through [`ViewportState::new`] or `Default`, so `zoom` is always
/// finite and positive and `offset` is always finite. Navigation produces a new value
/// rather than mutating in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    zoom: f64,
    offset: Complex,
}

impl ViewportState {
    pub fn new(zoom: f64, offset: Complex) -> Result<Self, ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if !offset.is_finite() {
            return Err(ViewportError::InvalidOffset { offset });
        }

        Ok(Self { zoom, offset })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
        }
    }
}
