//! GUI input adapter for interactive exploration.
//!
//! winit owns the window and event loop, pixels scales the rendered frame onto it.
//! Mouse wheel zooms at the cursor, left click recentres.

mod app;
mod errors;
mod events;
mod frame_sink;

pub use app::run_gui;
pub use errors::GuiError;
