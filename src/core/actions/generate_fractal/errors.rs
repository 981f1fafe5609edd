use crate::core::actions::cancellation::Cancelled;
use thiserror::Error;

/// Failure of a cancel-aware fractal generation.
///
/// Cancellation is expected control flow for interactive callers and should not be
/// shown to the user as an error.
#[derive(Debug, Error)]
pub enum GenerateFractalError<E> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}
