use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} frame",
        .pixel.x, .pixel.y, .pixel_rect.width(), .pixel_rect.height()
    )]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// A rendered frame: row-major RGB triples, `height` rows of `width` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// An all-black frame.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let pixel_rect_size = pixel_rect_to_buffer_size(pixel_rect);

        if pixel_rect_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn colour_at(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let index = (pixel.y as usize * self.pixel_rect.width() as usize + pixel.x as usize)
            * BYTES_PER_PIXEL;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Expands the RGB data into an RGBA surface of the same dimensions, alpha opaque.
    pub fn copy_into_rgba(&self, dest: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.pixel_rect.size() as usize * 4;

        if dest.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: dest.len(),
            });
        }

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dest.chunks_exact_mut(4))
        {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(pixel_rect, data.clone()).unwrap();

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let pixel_rect = create_pixel_rect(2, 2);

        let result = PixelBuffer::from_data(pixel_rect, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let pixel_rect = create_pixel_rect(2, 2);

        let result = PixelBuffer::from_data(pixel_rect, vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_colour_at_reads_row_major() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let buffer = PixelBuffer::from_data(pixel_rect, data).unwrap();

        assert_eq!(
            buffer.colour_at(Point { x: 1, y: 0 }),
            Ok(Colour { r: 4, g: 5, b: 6 })
        );
        assert_eq!(
            buffer.colour_at(Point { x: 0, y: 1 }),
            Ok(Colour { r: 7, g: 8, b: 9 })
        );
    }

    #[test]
    fn test_colour_at_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(
            buffer.colour_at(Point { x: 3, y: 1 }),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 1 },
                pixel_rect
            })
        );
        assert!(buffer.colour_at(Point { x: -1, y: 0 }).is_err());
    }

    #[test]
    fn test_copy_into_rgba() {
        let pixel_rect = create_pixel_rect(2, 1);
        let buffer = PixelBuffer::from_data(pixel_rect, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut rgba = vec![0u8; 8];

        buffer.copy_into_rgba(&mut rgba).unwrap();

        assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_copy_into_rgba_rejects_wrong_length() {
        let pixel_rect = create_pixel_rect(2, 1);
        let buffer = PixelBuffer::new(pixel_rect);
        let mut rgba = vec![0u8; 6];

        assert_eq!(
            buffer.copy_into_rgba(&mut rgba),
            Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: 8,
                buffer_size: 6
            })
        );
    }
}
