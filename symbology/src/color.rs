#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color used for symbol interiors and text modifiers.
///
/// In serialized form the color is a `#RRGGBBAA` string. `#RRGGBB` strings are accepted as well.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_hex(&value).ok_or_else(|| format!("'{value}' is not a hex color"))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black color: `#000000FF`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Friendly identity blue: `#80E0FFFF`
    pub const CRYSTAL_BLUE: Color = Color::rgba(128, 224, 255, 255);
    /// Hostile identity red: `#FF8080FF`
    pub const SALMON: Color = Color::rgba(255, 128, 128, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        if hex_string.len() != 7 && hex_string.len() != 9 || !hex_string.starts_with('#') {
            return None;
        }

        let channel = |from: usize| {
            hex_string
                .get(from..from + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
        };

        let a = if hex_string.len() == 9 {
            channel(7)?
        } else {
            255
        };

        Some(Self {
            r: channel(1)?,
            g: channel(3)?,
            b: channel(5)?,
            a,
        })
    }

    /// Red component of the color in RGBA space.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the color in RGBA space.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the color in RGBA space.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Opacity component of the color.
    pub fn a(&self) -> u8 {
        self.a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(
            Color::try_from_hex("#80E0FF"),
            Some(Color::CRYSTAL_BLUE)
        );
        assert_eq!(
            Color::try_from_hex("#FF808080"),
            Some(Color::rgba(255, 128, 128, 128))
        );
        assert_eq!(Color::try_from_hex("80E0FF"), None);
        assert_eq!(Color::try_from_hex("#GG0000"), None);
        assert_eq!(Color::try_from_hex("#ÿÿÿ"), None);

        let color = Color::try_from_hex("#01020304").expect("valid color");
        assert_eq!((color.r(), color.g(), color.b(), color.a()), (1, 2, 3, 4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialization() {
        let json = serde_json::to_string(&Color::SALMON).expect("serialization failed");
        assert_eq!(json, "\"#FF8080FF\"");
        let color: Color = serde_json::from_str("\"#000000\"").expect("invalid color");
        assert_eq!(color, Color::BLACK);
        assert!(serde_json::from_str::<Color>("\"black\"").is_err());
    }
}
