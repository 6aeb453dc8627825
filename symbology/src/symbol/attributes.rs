//! Rendering attributes of tactical symbols.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Color;

/// Font used to draw text modifiers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontSpec {
    /// Font family name.
    pub family: String,
    /// Font size in points.
    pub size: f32,
    /// Whether bold face should be used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bold: bool,
}

impl FontSpec {
    /// Creates a regular (not bold) font spec.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
        }
    }

    /// Returns the same font in bold face.
    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Arial", 18.0)
    }
}

/// Attributes applied to a symbol in normal or highlighted state.
///
/// Every field is optional. A field set to `None` is taken from the defaults of the symbol (see
/// [`ResolvedAttributes::normal`] and [`ResolvedAttributes::highlight`]).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TacticalSymbolAttributes {
    /// Scale factor applied to the symbol graphic. Must be positive.
    pub scale: Option<f64>,
    /// Opacity of the symbol in range `[0, 1]`.
    pub opacity: Option<f64>,
    /// Fill color of the icon frame. Overrides the colors defined by the symbol identifier.
    pub interior_color: Option<Color>,
    /// Color of text modifiers.
    pub text_modifier_color: Option<Color>,
    /// Font of text modifiers.
    pub text_modifier_font: Option<FontSpec>,
}

impl TacticalSymbolAttributes {
    /// Sets the scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets the interior color.
    pub fn with_interior_color(mut self, color: Color) -> Self {
        self.interior_color = Some(color);
        self
    }

    /// Sets the text modifier color.
    pub fn with_text_modifier_color(mut self, color: Color) -> Self {
        self.text_modifier_color = Some(color);
        self
    }

    /// Sets the text modifier font.
    pub fn with_text_modifier_font(mut self, font: FontSpec) -> Self {
        self.text_modifier_font = Some(font);
        self
    }

    /// Overlays the fields set in `self` on top of `base`.
    ///
    /// Values that cannot be used (non-positive or non-finite scale, non-finite opacity) are ignored. Opacity is
    /// clamped into `[0, 1]`.
    pub fn apply_to(&self, base: &ResolvedAttributes) -> ResolvedAttributes {
        let mut resolved = base.clone();

        match self.scale {
            Some(scale) if scale.is_finite() && scale > 0.0 => resolved.scale = scale,
            Some(scale) => log::warn!("Ignoring invalid symbol scale {scale}"),
            None => {}
        }

        match self.opacity {
            Some(opacity) if opacity.is_finite() => resolved.opacity = opacity.clamp(0.0, 1.0),
            Some(opacity) => log::warn!("Ignoring invalid symbol opacity {opacity}"),
            None => {}
        }

        if let Some(color) = self.interior_color {
            resolved.interior_color = Some(color);
        }

        if let Some(color) = self.text_modifier_color {
            resolved.text_modifier_color = color;
        }

        if let Some(font) = &self.text_modifier_font {
            resolved.text_modifier_font = font.clone();
        }

        resolved
    }
}

/// Complete set of attributes a symbol is drawn with in a given frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttributes {
    /// Scale factor of the graphic.
    pub scale: f64,
    /// Opacity in range `[0, 1]`.
    pub opacity: f64,
    /// Fill color of the icon frame. `None` means the colors defined by the symbol identifier.
    pub interior_color: Option<Color>,
    /// Color of text modifiers.
    pub text_modifier_color: Color,
    /// Font of text modifiers.
    pub text_modifier_font: FontSpec,
}

impl ResolvedAttributes {
    /// Scale of highlighted symbols.
    pub const HIGHLIGHT_SCALE: f64 = 1.2;

    /// Defaults of a symbol in normal state.
    pub fn normal() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
            interior_color: None,
            text_modifier_color: Color::BLACK,
            text_modifier_font: FontSpec::default(),
        }
    }

    /// Defaults of a highlighted symbol.
    pub fn highlight() -> Self {
        Self {
            scale: Self::HIGHLIGHT_SCALE,
            interior_color: Some(Color::WHITE),
            text_modifier_color: Color::WHITE,
            ..Self::normal()
        }
    }
}
