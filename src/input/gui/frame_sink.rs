use parking_lot::Mutex;
use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::input::gui::events::GuiEvent;

/// Holds the most recent render event until the UI thread picks it up.
pub struct WakingFrameSink {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl FrameSink for WakingFrameSink {
    fn submit(&self, event: RenderEvent) {
        *self.render_event.lock() = Some(event);

        // the loop has already exited when this fails
        let _ = self.event_loop_proxy.lock().send_event(GuiEvent::Wake);
    }
}

impl WakingFrameSink {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.render_event.lock().take()
    }
}
