/// Custom user events for the GUI event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A render event may be waiting in the frame sink. Does not by itself
    /// trigger a redraw; the handler requests one after taking a newer frame.
    Wake,
}
