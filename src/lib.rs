//! Interactive Mandelbrot set explorer.
//!
//! [`MandelbrotExplorer`] keeps a viewport over the complex plane and re-renders a
//! fixed-size RGB frame after every zoom or recentre. [`InteractiveController`] does the
//! same on a worker thread for event-driven front ends.

pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod storage;

pub use crate::config::{ConfigError, ExplorerConfig};
pub use crate::controllers::explorer::{ExplorerError, MandelbrotExplorer};
pub use crate::controllers::interactive::{
    FrameData, FrameSink, InteractiveController, RenderError, RenderEvent,
};
pub use crate::core::cache::value_cache::{CacheStats, ValueCache};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_rect::PixelRect;
pub use crate::core::data::point::Point;
pub use crate::core::data::render_settings::{RenderSettings, RenderStrategy};
pub use crate::core::data::viewport::ViewportState;
pub use crate::storage::write_ppm::write_ppm;
