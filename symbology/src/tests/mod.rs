use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use symbology_types::{AltitudeMode, GeoPosition};

use crate::render::{RenderContext, SymbolPrimitive};
use crate::symbol::{ModifierValue, ResolvedAttributes};
use crate::Messenger;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnSymbol {
    pub identifier: String,
    pub position: GeoPosition,
    pub altitude_mode: AltitudeMode,
    pub attributes: ResolvedAttributes,
    pub highlighted: bool,
    pub graphic_modifiers: Vec<String>,
    pub text_modifiers: Vec<String>,
}

/// Render context that remembers everything drawn into it.
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub drawn: Vec<DrawnSymbol>,
}

fn keys(list: &[(&str, &ModifierValue)]) -> Vec<String> {
    list.iter().map(|(key, _)| key.to_string()).collect()
}

impl RenderContext for RecordingContext {
    fn draw_symbol(&mut self, primitive: SymbolPrimitive<'_>) {
        self.drawn.push(DrawnSymbol {
            identifier: primitive.identifier.to_string(),
            position: primitive.position,
            altitude_mode: primitive.altitude_mode,
            attributes: primitive.attributes.clone(),
            highlighted: primitive.highlighted,
            graphic_modifiers: keys(&primitive.graphic_modifiers),
            text_modifiers: keys(&primitive.text_modifiers),
        });
    }
}

#[derive(Debug, Default, Clone)]
pub struct CountingMessenger {
    pub requests: Arc<AtomicUsize>,
}

impl CountingMessenger {
    pub fn count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl Messenger for CountingMessenger {
    fn request_redraw(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
