//! Symbol descriptions used to load and store symbols as JSON.
//!
//! ```json
//! [
//!   {
//!     "identifier": "SFGPU----------",
//!     "position": { "lat": 40.0, "lon": -120.0 },
//!     "altitude_mode": "clamp-to-ground",
//!     "modifiers": { "DirectionOfMovement": { "angle": 45.0 } }
//!   }
//! ]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use symbology_types::{AltitudeMode, GeoPosition};

use crate::error::SymbologyError;
use crate::layer::SymbolLayer;
use crate::symbol::{
    BasicTacticalSymbol, Highlightable, Modifiable, ModifierValue, Positioned, Styled,
    TacticalSymbol, TacticalSymbolAttributes, Visible,
};

/// Serializable state of a single symbol. Omitted fields take the defaults of a new symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDescription {
    /// Symbol identifier.
    pub identifier: String,
    /// Symbol position.
    pub position: GeoPosition,
    /// Altitude mode. Unknown names are read as `absolute`.
    #[serde(default)]
    pub altitude_mode: AltitudeMode,
    /// Whether the symbol is drawn.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Whether the symbol is highlighted.
    #[serde(default)]
    pub highlighted: bool,
    /// Whether graphic modifiers are drawn.
    #[serde(default = "default_true")]
    pub show_graphic_modifiers: bool,
    /// Whether text modifiers are drawn.
    #[serde(default = "default_true")]
    pub show_text_modifiers: bool,
    /// Modifier values by key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub modifiers: BTreeMap<String, ModifierValue>,
    /// Normal attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<TacticalSymbolAttributes>,
    /// Highlight attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_attributes: Option<TacticalSymbolAttributes>,
}

fn default_true() -> bool {
    true
}

impl TryFrom<SymbolDescription> for BasicTacticalSymbol {
    type Error = SymbologyError;

    fn try_from(value: SymbolDescription) -> Result<Self, Self::Error> {
        let mut symbol = BasicTacticalSymbol::with_modifiers(
            value.identifier,
            value.position,
            value.modifiers.into_iter().map(|(k, v)| (k, Some(v))),
        )?
        .with_altitude_mode(value.altitude_mode);

        symbol.set_visible(value.visible);
        symbol.set_highlighted(value.highlighted);
        symbol.set_show_graphic_modifiers(value.show_graphic_modifiers);
        symbol.set_show_text_modifiers(value.show_text_modifiers);
        symbol.set_attributes(value.attributes);
        symbol.set_highlight_attributes(value.highlight_attributes);

        Ok(symbol)
    }
}

impl BasicTacticalSymbol {
    /// Returns the serializable description of the symbol.
    pub fn to_description(&self) -> SymbolDescription {
        SymbolDescription {
            identifier: self.identifier().to_string(),
            position: self.position(),
            altitude_mode: self.altitude_mode(),
            visible: self.is_visible(),
            highlighted: self.is_highlighted(),
            show_graphic_modifiers: self.is_show_graphic_modifiers(),
            show_text_modifiers: self.is_show_text_modifiers(),
            modifiers: self
                .modifiers()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            attributes: self.attributes().cloned(),
            highlight_attributes: self.highlight_attributes().cloned(),
        }
    }
}

impl SymbolLayer<BasicTacticalSymbol> {
    /// Creates a layer from a JSON array of [`SymbolDescription`]s.
    pub fn from_json(json: &str) -> Result<Self, SymbologyError> {
        let descriptions: Vec<SymbolDescription> = serde_json::from_str(json)?;
        let symbols = descriptions
            .into_iter()
            .map(BasicTacticalSymbol::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Loaded {} symbols from description", symbols.len());
        Ok(Self::new(symbols))
    }

    /// Serializes the symbols of the layer into a JSON array of [`SymbolDescription`]s.
    pub fn to_json(&self) -> Result<String, SymbologyError> {
        let descriptions: Vec<_> = self.iter().map(|s| s.to_description()).collect();
        Ok(serde_json::to_string_pretty(&descriptions)?)
    }
}
