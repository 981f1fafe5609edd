//! Synchronous explorer: every navigation call blocks until the new frame is ready.

mod errors;
mod explorer;

pub use errors::{ExplorerError, WorkerSpawnError};
pub use explorer::MandelbrotExplorer;
