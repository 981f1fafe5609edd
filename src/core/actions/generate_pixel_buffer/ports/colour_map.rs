use crate::core::data::colour::Colour;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

pub trait ColourMap<T>: Send + Sync {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
