use maybe_sync::{MaybeSend, MaybeSync};

/// Notifies the application that the displayed symbols changed and the frame should be redrawn.
pub trait Messenger: MaybeSend + MaybeSync {
    /// Requests a new render pass.
    fn request_redraw(&self);
}

/// Messenger that ignores all requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn request_redraw(&self) {}
}
