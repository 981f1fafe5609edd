use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;

/// Repeating three-channel banding keyed on the raw iteration count.
///
/// Points that never escaped are black. Everything else gets
/// `(255 - n % 256, 255 - 5n % 256, 255 - 15n % 256)`.
#[must_use]
pub fn colour_of(iterations: u32, max_iterations: u32) -> Colour {
    if iterations == max_iterations {
        return Colour::BLACK;
    }

    let n = iterations as u64;

    Colour {
        r: 255 - (n % 256) as u8,
        g: 255 - ((n * 5) % 256) as u8,
        b: 255 - ((n * 15) % 256) as u8,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BandedColourMap {
    max_iterations: u32,
}

impl ColourMap<u32> for BandedColourMap {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        Ok(colour_of(iterations, self.max_iterations))
    }

    fn display_name(&self) -> &str {
        "Banded"
    }
}

impl BandedColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
