use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Computes every pixel on the calling thread, row by row.
///
/// Results are row-major. The token is polled at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it.
pub fn generate_fractal_serial<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let width = pixel_rect.width() as i32;
    let height = pixel_rect.height() as i32;
    let mut results = Vec::with_capacity(pixel_rect.size() as usize);

    for y in 0..height {
        for x in 0..width {
            if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
                cancel.check()?;
            }

            let value = algorithm
                .compute(Point { x, y })
                .map_err(GenerateFractalError::Algorithm)?;
            results.push(value);
        }
    }

    Ok(results)
}
