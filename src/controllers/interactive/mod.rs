//! Interactive controller for event-driven front ends.
//!
//! Navigation commands return immediately with a generation number. A worker thread
//! renders only the newest request and hands finished frames to a [`FrameSink`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::frame_sink::FrameSink;
