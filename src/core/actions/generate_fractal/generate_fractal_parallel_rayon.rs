use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Computes rows in parallel on rayon's work-stealing pool.
///
/// Output is row-major and identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
/// Each row polls the token at its start and every [`CANCEL_CHECK_INTERVAL_PIXELS`]
/// pixels; the first cancelled or failed row aborts the whole frame.
pub fn generate_fractal_parallel_rayon<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let width = pixel_rect.width() as i32;
    let height = pixel_rect.height() as i32;

    let rows: Vec<Vec<Alg::Success>> = (0..height)
        .into_par_iter()
        .map(|y| -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>> {
            let mut row = Vec::with_capacity(width as usize);

            for x in 0..width {
                if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
                    cancel.check()?;
                }

                let value = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(value);
            }

            Ok(row)
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}
