pub mod cancellation;
pub mod generate_fractal;
pub mod generate_pixel_buffer;
pub mod navigate;
pub mod render_frame;
