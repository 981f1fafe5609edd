use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportState;
use thiserror::Error;

/// Width of the visible real axis at zoom 1.
pub const BASE_SPAN_REAL: f64 = 3.5;
/// Height of the visible imaginary axis at zoom 1.
pub const BASE_SPAN_IMAG: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} frame",
        .point.x, .point.y, .pixel_rect.width(), .pixel_rect.height()
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Maps a pixel to the complex coordinate under it.
///
/// `real = 3.5 * (x / width - 0.5) / zoom + offset.real`, and likewise for the
/// imaginary axis with span 2.0. The centre pixel of an even-sized frame lands exactly
/// on the offset. The expression order is fixed so that identical inputs always give
/// bit-identical coordinates.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    viewport: ViewportState,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let zoom = viewport.zoom();
    let offset = viewport.offset();

    let real = BASE_SPAN_REAL * (pixel_position.x as f64 / pixel_rect.width() as f64 - 0.5)
        / zoom
        + offset.real;
    let imag = BASE_SPAN_IMAG * (pixel_position.y as f64 / pixel_rect.height() as f64 - 0.5)
        / zoom
        + offset.imag;

    Ok(Complex { real, imag })
}
