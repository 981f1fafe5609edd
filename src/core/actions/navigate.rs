//! Pan and zoom. Each operation takes the current viewport and returns its successor;
//! on error the caller keeps the previous viewport.

use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::{ViewportError, ViewportState};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum NavigateError {
    #[error(transparent)]
    Pixel(#[from] PixelToComplexCoordsError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Recentres on the point under `pixel`, then multiplies the zoom by `factor`.
///
/// `factor > 1` zooms in, `0 < factor < 1` zooms out.
pub fn zoom_at(
    viewport: ViewportState,
    pixel_rect: PixelRect,
    pixel: Point,
    factor: f64,
) -> Result<ViewportState, NavigateError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ViewportError::InvalidZoomFactor { factor }.into());
    }

    let offset = pixel_to_complex_coords(pixel, pixel_rect, viewport)?;

    Ok(ViewportState::new(viewport.zoom() * factor, offset)?)
}

/// Recentres on the point under `pixel`, keeping the zoom.
pub fn centre_on(
    viewport: ViewportState,
    pixel_rect: PixelRect,
    pixel: Point,
) -> Result<ViewportState, NavigateError> {
    let offset = pixel_to_complex_coords(pixel, pixel_rect, viewport)?;

    Ok(ViewportState::new(viewport.zoom(), offset)?)
}
