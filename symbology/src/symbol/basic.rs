use ahash::{HashMap, HashMapExt};
use symbology_types::{AltitudeMode, GeoPosition};

use crate::error::SymbologyError;
use crate::render::{RenderContext, SymbolPrimitive};
use crate::symbol::{
    Highlightable, Modifiable, ModifierKind, ModifierValue, Positioned, Renderable, Styled,
    TacticalSymbol, TacticalSymbolAttributes, Visible,
};

type ModifierList<'a> = Vec<(&'a str, &'a ModifierValue)>;

/// Tactical symbol that stores its state in memory and describes itself to the renderer as a
/// [`SymbolPrimitive`].
///
/// The altitude mode of a new symbol is [`AltitudeMode::Absolute`]. Symbol sets that derive a different mode from
/// the identifier (e.g. ground units clamped to the terrain) can set it with
/// [`BasicTacticalSymbol::with_altitude_mode`].
#[derive(Debug, Clone, PartialEq)]
pub struct BasicTacticalSymbol {
    identifier: String,
    position: GeoPosition,
    altitude_mode: AltitudeMode,
    visible: bool,
    highlighted: bool,
    show_graphic_modifiers: bool,
    show_text_modifiers: bool,
    modifiers: HashMap<String, ModifierValue>,
    attributes: Option<TacticalSymbolAttributes>,
    highlight_attributes: Option<TacticalSymbolAttributes>,
}

impl BasicTacticalSymbol {
    /// Creates a new visible symbol without modifiers.
    ///
    /// Returns [`SymbologyError::InvalidArgument`] if the identifier is empty or the position has non-finite
    /// components.
    pub fn new(identifier: impl Into<String>, position: GeoPosition) -> Result<Self, SymbologyError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(SymbologyError::InvalidArgument(
                "symbol identifier is empty".into(),
            ));
        }

        check_position(&position)?;

        Ok(Self {
            identifier,
            position,
            altitude_mode: AltitudeMode::default(),
            visible: true,
            highlighted: false,
            show_graphic_modifiers: true,
            show_text_modifiers: true,
            modifiers: HashMap::new(),
            attributes: None,
            highlight_attributes: None,
        })
    }

    /// Creates a new symbol and sets the given modifiers. `None` values are skipped, same as with
    /// [`Modifiable::set_modifier`].
    pub fn with_modifiers<K, I>(
        identifier: impl Into<String>,
        position: GeoPosition,
        modifiers: I,
    ) -> Result<Self, SymbologyError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Option<ModifierValue>)>,
    {
        let mut symbol = Self::new(identifier, position)?;
        for (key, value) in modifiers {
            symbol.set_modifier(key.as_ref(), value)?;
        }

        Ok(symbol)
    }

    /// Sets the altitude mode of the symbol.
    pub fn with_altitude_mode(mut self, altitude_mode: AltitudeMode) -> Self {
        self.altitude_mode = altitude_mode;
        self
    }

    fn visible_modifiers(&self) -> (ModifierList<'_>, ModifierList<'_>) {
        let mut graphic = vec![];
        let mut text = vec![];

        for (key, value) in &self.modifiers {
            match ModifierKind::of(key) {
                ModifierKind::Graphic if self.show_graphic_modifiers => {
                    graphic.push((key.as_str(), value))
                }
                ModifierKind::Text if self.show_text_modifiers => text.push((key.as_str(), value)),
                _ => {}
            }
        }

        graphic.sort_by_key(|(key, _)| *key);
        text.sort_by_key(|(key, _)| *key);

        (graphic, text)
    }
}

fn check_position(position: &GeoPosition) -> Result<(), SymbologyError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(SymbologyError::InvalidArgument(format!(
            "position {position:?} is not a location"
        )))
    }
}

impl Visible for BasicTacticalSymbol {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Positioned for BasicTacticalSymbol {
    fn position(&self) -> GeoPosition {
        self.position
    }

    fn set_position(&mut self, position: GeoPosition) -> Result<(), SymbologyError> {
        check_position(&position)?;
        self.position = position;
        Ok(())
    }

    fn altitude_mode(&self) -> AltitudeMode {
        self.altitude_mode
    }

    fn set_altitude_mode(&mut self, altitude_mode: AltitudeMode) {
        self.altitude_mode = altitude_mode;
    }
}

impl Modifiable for BasicTacticalSymbol {
    fn modifier(&self, key: &str) -> Option<&ModifierValue> {
        self.modifiers.get(key)
    }

    fn set_modifier(
        &mut self,
        key: &str,
        value: Option<ModifierValue>,
    ) -> Result<(), SymbologyError> {
        if key.is_empty() {
            return Err(SymbologyError::InvalidArgument(
                "modifier key is empty".into(),
            ));
        }

        match value {
            Some(value) => {
                self.modifiers.insert(key.to_string(), value);
            }
            None => {
                if self.modifiers.remove(key).is_some() {
                    log::trace!("Removed modifier {key} from symbol {}", self.identifier);
                }
            }
        }

        Ok(())
    }

    fn modifiers(&self) -> Box<dyn Iterator<Item = (&str, &ModifierValue)> + '_> {
        Box::new(self.modifiers.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn is_show_graphic_modifiers(&self) -> bool {
        self.show_graphic_modifiers
    }

    fn set_show_graphic_modifiers(&mut self, show: bool) {
        self.show_graphic_modifiers = show;
    }

    fn is_show_text_modifiers(&self) -> bool {
        self.show_text_modifiers
    }

    fn set_show_text_modifiers(&mut self, show: bool) {
        self.show_text_modifiers = show;
    }
}

impl Styled for BasicTacticalSymbol {
    fn attributes(&self) -> Option<&TacticalSymbolAttributes> {
        self.attributes.as_ref()
    }

    fn set_attributes(&mut self, attributes: Option<TacticalSymbolAttributes>) {
        self.attributes = attributes;
    }

    fn highlight_attributes(&self) -> Option<&TacticalSymbolAttributes> {
        self.highlight_attributes.as_ref()
    }

    fn set_highlight_attributes(&mut self, attributes: Option<TacticalSymbolAttributes>) {
        self.highlight_attributes = attributes;
    }
}

impl Highlightable for BasicTacticalSymbol {
    fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

impl Renderable for BasicTacticalSymbol {
    fn render(&self, context: &mut dyn RenderContext) {
        if !self.visible {
            return;
        }

        let (graphic_modifiers, text_modifiers) = self.visible_modifiers();
        context.draw_symbol(SymbolPrimitive {
            identifier: &self.identifier,
            position: self.position,
            altitude_mode: self.altitude_mode,
            attributes: self.active_attributes(),
            highlighted: self.highlighted,
            graphic_modifiers,
            text_modifiers,
        });
    }
}

impl TacticalSymbol for BasicTacticalSymbol {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}
