use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// The screen area being rendered. Valid pixels are `[0, width) x [0, height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Floor-divided centre pixel. Only maps exactly onto the viewport offset when both
    /// dimensions are even; odd sizes land half a pixel up and left of the true centre.
    #[must_use]
    pub fn centre(&self) -> Point {
        Point {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(800, 600).unwrap();

        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
        assert_eq!(rect.size(), 480_000);
    }

    #[test]
    fn test_pixel_rect_single_pixel_is_valid() {
        let rect = PixelRect::new(1, 1).unwrap();

        assert_eq!(rect.size(), 1);
        assert_eq!(rect.centre(), Point { x: 0, y: 0 });
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        assert_eq!(
            PixelRect::new(0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            PixelRect::new(10, 0),
            Err(PixelRectError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_pixel_rect_centre() {
        let rect = PixelRect::new(100, 60).unwrap();

        assert_eq!(rect.centre(), Point { x: 50, y: 30 });
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(100, 50).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 99, y: 49 }));
        assert!(!rect.contains_point(Point { x: 100, y: 10 }));
        assert!(!rect.contains_point(Point { x: 10, y: 50 }));
        assert!(!rect.contains_point(Point { x: -1, y: 10 }));
        assert!(!rect.contains_point(Point { x: 10, y: -1 }));
    }

    #[test]
    fn test_pixel_rect_centre_rounds_down_for_odd_sizes() {
        let rect = PixelRect::new(101, 75).unwrap();

        assert_eq!(rect.centre(), Point { x: 50, y: 37 });
    }
}
