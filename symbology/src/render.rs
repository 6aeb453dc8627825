//! Types the symbols use to hand their drawing description to a renderer.

use symbology_types::{AltitudeMode, GeoPosition};

use crate::symbol::{ModifierValue, ResolvedAttributes};

/// Drawing target provided by the renderer for a render pass.
///
/// Symbols call the context synchronously from their [`render`](crate::symbol::Renderable::render) method. The
/// context decides how to turn the primitive into pixels (icon atlas lookup, screen projection, terrain clamping).
pub trait RenderContext {
    /// Draws one symbol.
    fn draw_symbol(&mut self, primitive: SymbolPrimitive<'_>);
}

/// Everything a renderer needs to draw one symbol in the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolPrimitive<'a> {
    /// Identifier of the symbol in its symbology set.
    pub identifier: &'a str,
    /// Geographic position.
    pub position: GeoPosition,
    /// How the elevation of `position` is interpreted.
    pub altitude_mode: AltitudeMode,
    /// Attributes for the current highlight state.
    pub attributes: ResolvedAttributes,
    /// Whether the symbol is highlighted.
    pub highlighted: bool,
    /// Graphic modifiers to draw, sorted by key. Empty if graphic modifiers are hidden.
    pub graphic_modifiers: Vec<(&'a str, &'a ModifierValue)>,
    /// Text modifiers to draw, sorted by key. Empty if text modifiers are hidden.
    pub text_modifiers: Vec<(&'a str, &'a ModifierValue)>,
}
