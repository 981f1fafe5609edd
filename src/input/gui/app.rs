//! Main GUI application loop.

use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, info, warn};
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{EventLoopBuilder, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

use crate::config::ExplorerConfig;
use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::core::data::point::Point;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::frame_sink::WakingFrameSink;

struct App {
    window: &'static Window,
    pixels: Pixels<'static>,
    controller: InteractiveController,
    sink: Arc<WakingFrameSink>,
    zoom_factor: f64,
    cursor: Option<PhysicalPosition<f64>>,
    last_presented_generation: u64,
}

impl App {
    /// Maps the cursor to a frame pixel. `None` over the letterbox margins.
    fn cursor_pixel(&self) -> Option<Point> {
        let cursor = self.cursor?;
        let (x, y) = self
            .pixels
            .window_pos_to_pixel((cursor.x as f32, cursor.y as f32))
            .ok()?;

        Some(Point {
            x: i32::try_from(x).ok()?,
            y: i32::try_from(y).ok()?,
        })
    }

    fn handle_scroll(&self, delta: MouseScrollDelta) {
        let Some(factor) = wheel_zoom_factor(delta, self.zoom_factor) else {
            return;
        };
        let Some(pixel) = self.cursor_pixel() else {
            return;
        };

        if let Err(err) = self.controller.zoom(pixel, factor) {
            warn!(%err, "zoom ignored");
        }
    }

    fn handle_click(&self) {
        let Some(pixel) = self.cursor_pixel() else {
            return;
        };

        if let Err(err) = self.controller.centre(pixel) {
            warn!(%err, "centre ignored");
        }
    }

    /// Copies a newer frame into the pixels buffer. Returns whether a redraw is needed.
    fn take_frame(&mut self) -> bool {
        match self.sink.take_render_event() {
            Some(RenderEvent::Frame(frame)) => {
                if frame.generation <= self.last_presented_generation {
                    return false;
                }

                if let Err(err) = frame.pixel_buffer.copy_into_rgba(self.pixels.frame_mut()) {
                    warn!(%err, "frame does not fit the surface");
                    return false;
                }

                self.last_presented_generation = frame.generation;
                debug!(
                    generation = frame.generation,
                    elapsed_ms = frame.render_duration.as_millis() as u64,
                    zoom = frame.viewport.zoom(),
                    "presenting frame"
                );
                self.window.set_title(&window_title(frame.viewport.zoom()));

                true
            }
            Some(RenderEvent::Error(err)) => {
                warn!(generation = err.generation, message = %err.message, "render failed");
                false
            }
            None => false,
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.pixels.render() {
                    warn!(%err, "render to surface failed");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Err(err) = self.pixels.resize_surface(size.width, size.height) {
                        warn!(%err, "failed to resize surface");
                        elwt.exit();
                        return;
                    }
                    self.window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::MouseWheel { delta, .. } => self.handle_scroll(delta),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.handle_click(),
            _ => {}
        }
    }
}

/// Wheel up zooms in by `zoom_factor`, wheel down zooms out by its inverse.
fn wheel_zoom_factor(delta: MouseScrollDelta, zoom_factor: f64) -> Option<f64> {
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if dy > 0.0 {
        Some(zoom_factor)
    } else if dy < 0.0 {
        Some(1.0 / zoom_factor)
    } else {
        None
    }
}

fn window_title(zoom: f64) -> String {
    format!("Mandelbrot Explorer ({zoom:.3}x)")
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui(config: &ExplorerConfig) -> Result<(), GuiError> {
    let pixel_rect = config.pixel_rect()?;

    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;

    // leaked so pixels can borrow it for 'static
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(window_title(1.0))
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_min_inner_size(LogicalSize::new(100.0, 100.0))
            .build(&event_loop)?,
    ));

    let surface_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(surface_size.width, surface_size.height, window);
    let pixels = Pixels::new(pixel_rect.width(), pixel_rect.height(), surface_texture)?;

    let sink = Arc::new(WakingFrameSink::new(event_loop.create_proxy()));
    let controller =
        InteractiveController::new(pixel_rect, config.render_settings(), sink.clone())?;

    let mut app = App {
        window,
        pixels,
        controller,
        sink,
        zoom_factor: config.zoom_factor,
        cursor: None,
        last_presented_generation: 0,
    };

    info!(
        width = pixel_rect.width(),
        height = pixel_rect.height(),
        "gui started"
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == app.window.id() => {
            app.handle_window_event(event, elwt);
        }
        Event::UserEvent(GuiEvent::Wake) => {
            if app.take_frame() {
                app.window.request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}
