//! [Layers](Layer) aggregate symbols and render them in one pass.

use std::any::Any;
use std::sync::Arc;

use maybe_sync::{MaybeSend, MaybeSync};
use parking_lot::RwLock;

use crate::messenger::Messenger;
use crate::render::RenderContext;

mod symbol_layer;

pub use symbol_layer::{SymbolContainerMut, SymbolLayer};

/// Renderable collection of objects, drawn once per frame by the display loop.
pub trait Layer: MaybeSend + MaybeSync {
    /// Renders the layer into the given context.
    fn render(&self, context: &mut dyn RenderContext);
    /// Sets the messenger for the layer. Messenger is used to notify the application when the layer content changed
    /// and should be redrawn.
    fn set_messenger(&mut self, messenger: Box<dyn Messenger>);
    /// Layers are often stored as trait objects. This method can be used to convert the trait object into the
    /// concrete type.
    fn as_any(&self) -> &dyn Any;
    /// Layers are often stored as trait objects. This method can be used to convert the trait object into the
    /// concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Layer + 'static> Layer for Arc<RwLock<T>> {
    fn render(&self, context: &mut dyn RenderContext) {
        self.read().render(context)
    }

    fn set_messenger(&mut self, messenger: Box<dyn Messenger>) {
        self.write().set_messenger(messenger)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
