use std::sync::Arc;

use thiserror::Error;

use crate::core::actions::navigate::NavigateError;
use crate::core::actions::render_frame::RenderFrameError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithmError;

/// Why the explorer refused a request. The view is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    Algorithm(#[from] MandelbrotAlgorithmError),
    #[error(transparent)]
    Navigate(#[from] NavigateError),
    #[error("render failed: {0}")]
    Render(#[from] RenderFrameError),
    #[error(transparent)]
    Worker(#[from] WorkerSpawnError),
}

/// The OS refused to start the render thread.
#[derive(Debug, Clone, Error)]
#[error("failed to start render worker: {0}")]
pub struct WorkerSpawnError(#[source] Arc<std::io::Error>);

impl From<std::io::Error> for WorkerSpawnError {
    fn from(err: std::io::Error) -> Self {
        Self(Arc::new(err))
    }
}

// io::Error has no equality; two values are equal only when they share the same error.
impl PartialEq for WorkerSpawnError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_worker_error_keeps_io_source() {
        let err = ExplorerError::from(WorkerSpawnError::from(io::Error::new(
            io::ErrorKind::OutOfMemory,
            "no threads left",
        )));

        let source = err.source().unwrap();
        let io_err = source.downcast_ref::<Arc<io::Error>>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::OutOfMemory);
        assert_eq!(
            err.to_string(),
            "failed to start render worker: no threads left"
        );
    }

    #[test]
    fn test_worker_error_clones_compare_equal() {
        let err = WorkerSpawnError::from(io::Error::other("spawn failed"));

        assert_eq!(err.clone(), err);
        assert_ne!(err, WorkerSpawnError::from(io::Error::other("spawn failed")));
    }
}
