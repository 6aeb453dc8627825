//! Tactical symbols display graphic and textual information about an object at a single geographic position.
//!
//! The symbol contract is split into small capability traits, all of which a [`TacticalSymbol`] implements:
//!
//! * [`Visible`] - whether the symbol is drawn at all;
//! * [`Positioned`] - where the symbol is and how its elevation is interpreted;
//! * [`Modifiable`] - modifiers that augment the symbol graphic, and toggles for graphic and text modifiers;
//! * [`Styled`] - normal and highlight attributes;
//! * [`Highlightable`] - highlight state;
//! * [`Renderable`] - the per-frame render hook.
//!
//! The format of the identifier and the set of recognized modifier keys depend on the symbology set. Decoding
//! identifiers into icons is the job of the renderer, which receives them through
//! [`SymbolPrimitive`](crate::render::SymbolPrimitive).

mod attributes;
mod basic;
mod modifier;

pub use attributes::{FontSpec, ResolvedAttributes, TacticalSymbolAttributes};
pub use basic::BasicTacticalSymbol;
pub use modifier::{keys, ModifierKind, ModifierValue};
use symbology_types::{AltitudeMode, GeoPosition};

use crate::error::SymbologyError;
use crate::render::RenderContext;

/// Object that can be hidden without removing it from its layer.
pub trait Visible {
    /// Returns true if the object is drawn when in view.
    fn is_visible(&self) -> bool;
    /// Specifies whether the object is drawn when in view.
    fn set_visible(&mut self, visible: bool);
}

/// Object placed at a geographic position.
pub trait Positioned {
    /// Current position.
    fn position(&self) -> GeoPosition;

    /// Moves the object to the given position. The elevation is interpreted according to
    /// [`Positioned::altitude_mode`].
    ///
    /// Returns [`SymbologyError::InvalidArgument`] if the position does not describe a location (any of its
    /// components is NaN or infinite). The current position is not changed in this case.
    fn set_position(&mut self, position: GeoPosition) -> Result<(), SymbologyError>;

    /// Current altitude mode.
    fn altitude_mode(&self) -> AltitudeMode;

    /// Sets the altitude mode. Use [`AltitudeMode::from_code`] to convert numeric codes: unrecognized codes become
    /// [`AltitudeMode::Absolute`].
    fn set_altitude_mode(&mut self, altitude_mode: AltitudeMode);
}

/// Object which graphic can be augmented with modifiers.
pub trait Modifiable {
    /// Returns the value of the modifier, or `None` if the modifier is not displayed.
    ///
    /// Unlike [`Modifiable::set_modifier`], reading never fails: an empty key is never set, so it returns `None`.
    fn modifier(&self, key: &str) -> Option<&ModifierValue>;

    /// Sets the value of the modifier. `None` removes the modifier.
    ///
    /// Returns [`SymbologyError::InvalidArgument`] if the key is empty.
    fn set_modifier(&mut self, key: &str, value: Option<ModifierValue>)
        -> Result<(), SymbologyError>;

    /// Iterates over all set modifiers. Order is not specified.
    fn modifiers(&self) -> Box<dyn Iterator<Item = (&str, &ModifierValue)> + '_>;

    /// Returns true if graphic modifiers are drawn.
    fn is_show_graphic_modifiers(&self) -> bool;

    /// Specifies whether graphic modifiers are drawn.
    fn set_show_graphic_modifiers(&mut self, show: bool);

    /// Returns true if text modifiers are drawn.
    fn is_show_text_modifiers(&self) -> bool;

    /// Specifies whether text modifiers are drawn.
    fn set_show_text_modifiers(&mut self, show: bool);
}

/// Object with normal and highlight attributes.
pub trait Styled {
    /// Normal attributes. `None` means the default attributes are used.
    fn attributes(&self) -> Option<&TacticalSymbolAttributes>;

    /// Sets normal attributes. `None` resets them to defaults.
    fn set_attributes(&mut self, attributes: Option<TacticalSymbolAttributes>);

    /// Highlight attributes. `None` means the default highlight attributes are used.
    fn highlight_attributes(&self) -> Option<&TacticalSymbolAttributes>;

    /// Sets highlight attributes. `None` resets them to defaults.
    fn set_highlight_attributes(&mut self, attributes: Option<TacticalSymbolAttributes>);
}

/// Object that can be drawn in highlighted state.
pub trait Highlightable {
    /// Returns true if the object is highlighted.
    fn is_highlighted(&self) -> bool;
    /// Sets the highlight state.
    fn set_highlighted(&mut self, highlighted: bool);
}

/// Object drawn once per frame by a layer.
pub trait Renderable {
    /// Draws the object into the context. Rendering never changes the state of the object.
    fn render(&self, context: &mut dyn RenderContext);
}

/// Tactical point symbol from a symbology set.
pub trait TacticalSymbol:
    Visible + Positioned + Modifiable + Styled + Highlightable + Renderable
{
    /// Identifier given at construction, e.g. a 15-character MIL-STD-2525 SIDC.
    fn identifier(&self) -> &str;

    /// Attributes the symbol is drawn with in its current state.
    fn active_attributes(&self) -> ResolvedAttributes {
        if self.is_highlighted() {
            let base = ResolvedAttributes::highlight();
            match self.highlight_attributes() {
                Some(attributes) => attributes.apply_to(&base),
                None => base,
            }
        } else {
            let base = ResolvedAttributes::normal();
            match self.attributes() {
                Some(attributes) => attributes.apply_to(&base),
                None => base,
            }
        }
    }
}
