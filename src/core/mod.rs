pub mod actions;
pub mod cache;
pub mod data;
pub mod fractals;
pub mod util;
