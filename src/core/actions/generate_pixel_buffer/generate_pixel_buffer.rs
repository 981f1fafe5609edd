use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratePixelBufferError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours a row-major sequence of values into a frame of `pixel_rect`'s size.
///
/// Streams RGB bytes into a preallocated buffer, polling the token every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. Fails with `BoundsMismatch` when the input
/// length does not match the frame.
pub fn generate_pixel_buffer<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(pixel_rect.size() as usize * 3);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
            cancel.check()?;
        }

        let Colour { r, g, b } = mapper.map(value)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
