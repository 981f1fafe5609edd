use thiserror::Error;
use tracing::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::{
    generate_fractal_parallel_rayon::generate_fractal_parallel_rayon,
    generate_fractal_serial::generate_fractal_serial,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::cache::value_cache::ValueCache;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::render_settings::{RenderSettings, RenderStrategy};
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, MandelbrotAlgorithmError};
use crate::core::fractals::mandelbrot::colour_map::BandedColourMap;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderFrameError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(transparent)]
    Algorithm(#[from] MandelbrotAlgorithmError),
    #[error(transparent)]
    Pixel(#[from] PixelToComplexCoordsError),
    #[error(transparent)]
    PixelBuffer(GeneratePixelBufferError),
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderFrameError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GenerateFractalError::Algorithm(err) => Self::Pixel(err),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            other => Self::PixelBuffer(other),
        }
    }
}

impl RenderFrameError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

/// Recomputes a whole frame for `viewport`.
///
/// Every pixel goes pixel -> complex -> iteration count (through `cache` when given)
/// -> colour, and lands at its row-major position. `cache` is ignored when
/// `settings.caching_enabled` is off. The previous frame is never
/// patched; the caller replaces it with the returned buffer.
pub fn render_frame<C: CancelToken>(
    pixel_rect: PixelRect,
    settings: RenderSettings,
    viewport: ViewportState,
    cache: Option<&ValueCache>,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    let cache = cache.filter(|_| settings.caching_enabled);
    let algorithm = MandelbrotAlgorithm::new(pixel_rect, viewport, settings.max_iterations, cache)?;

    let iterations = match settings.strategy {
        RenderStrategy::Serial => generate_fractal_serial(pixel_rect, &algorithm, cancel)?,
        RenderStrategy::Parallel => {
            generate_fractal_parallel_rayon(pixel_rect, &algorithm, cancel)?
        }
    };

    let colour_map = BandedColourMap::new(algorithm.max_iterations());
    let pixel_buffer = generate_pixel_buffer(iterations, &colour_map, pixel_rect, cancel)?;

    debug!(
        width = pixel_rect.width(),
        height = pixel_rect.height(),
        zoom = viewport.zoom(),
        strategy = ?settings.strategy,
        colour_map = colour_map.display_name(),
        "frame rendered"
    );

    Ok(pixel_buffer)
}
