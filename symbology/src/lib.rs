//! Tactical symbols are icons from a symbology set (for example MIL-STD-2525) displayed at a single geographic
//! position on a globe. A symbol carries graphic and textual information about an object at a particular point in
//! time.
//!
//! # Quick start
//!
//! ```
//! use symbology::layer::SymbolLayer;
//! use symbology::symbol::{keys, BasicTacticalSymbol, Modifiable, TacticalSymbol};
//! use symbology::symbology_types::{latlonh, Angle};
//!
//! let mut symbol = BasicTacticalSymbol::new("SFGPU----------", latlonh!(40.0, -120.0, 0.0)).unwrap();
//! symbol
//!     .set_modifier(keys::DIRECTION_OF_MOVEMENT, Some(Angle::from_degrees(45.0).into()))
//!     .unwrap();
//!
//! let mut layer = SymbolLayer::default();
//! layer.insert(symbol);
//! assert_eq!(layer.get(0).map(|s| s.identifier()), Some("SFGPU----------"));
//! ```
//!
//! # Main components
//!
//! * [`symbol`] defines the symbol contract as a set of small capability traits ([`Visible`](symbol::Visible),
//!   [`Positioned`](symbol::Positioned), [`Modifiable`](symbol::Modifiable), [`Styled`](symbol::Styled),
//!   [`Highlightable`](symbol::Highlightable), [`Renderable`](symbol::Renderable)) composed into
//!   [`TacticalSymbol`](symbol::TacticalSymbol), and a ready to use
//!   [`BasicTacticalSymbol`](symbol::BasicTacticalSymbol).
//! * [`layer`] contains [`SymbolLayer`](layer::SymbolLayer), an ordered collection of symbols rendered in one
//!   pass.
//! * [`render`] describes what the external renderer receives each frame.
//!
//! The library never draws anything itself. A renderer implements [`RenderContext`](render::RenderContext) and
//! receives one [`SymbolPrimitive`](render::SymbolPrimitive) per visible symbol.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod layer;
mod messenger;
pub mod render;
pub mod symbol;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use messenger::{DummyMessenger, Messenger};

// Reexport symbology_types
pub use symbology_types;
