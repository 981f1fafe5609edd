use thiserror::Error;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::cache::value_cache::ValueCache;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportState;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Squared escape radius. Any orbit with |z| > 2 diverges.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of iterations of `z <- z² + c`, starting from `z = 0`, before |z| exceeds 2.
///
/// Returns `max_iterations` when the orbit stays bounded for the whole budget.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotAlgorithmError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Escape-time evaluation of every pixel of one frame.
///
/// With a cache attached, counts go through [`ValueCache::get_value`]; without one the
/// evaluator runs directly.
#[derive(Debug)]
pub struct MandelbrotAlgorithm<'a> {
    pixel_rect: PixelRect,
    viewport: ViewportState,
    max_iterations: u32,
    cache: Option<&'a ValueCache>,
}

impl FractalAlgorithm for MandelbrotAlgorithm<'_> {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.viewport)?;

        Ok(match self.cache {
            Some(cache) => cache.get_value(c, self.max_iterations),
            None => escape_time(c, self.max_iterations),
        })
    }
}

impl<'a> MandelbrotAlgorithm<'a> {
    pub fn new(
        pixel_rect: PixelRect,
        viewport: ViewportState,
        max_iterations: u32,
        cache: Option<&'a ValueCache>,
    ) -> Result<Self, MandelbrotAlgorithmError> {
        if max_iterations == 0 {
            return Err(MandelbrotAlgorithmError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            viewport,
            max_iterations,
            cache,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
