//! [`AltitudeMode`] defines how the elevation component of a position is interpreted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Policy for interpreting the elevation of a position relative to the terrain.
///
/// Unrecognized codes and names are never an error: they are normalized to [`AltitudeMode::Absolute`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AltitudeMode {
    /// The object is placed on the terrain at the latitude and longitude of its position. Elevation is ignored.
    ClampToGround,
    /// The object is placed above the terrain at the latitude and longitude of its position, at the distance
    /// specified by its elevation.
    RelativeToGround,
    /// The object is placed at its specified position, elevation is measured from the ellipsoid.
    #[default]
    Absolute,
}

impl AltitudeMode {
    /// Numeric code of [`AltitudeMode::Absolute`].
    pub const ABSOLUTE_CODE: i32 = 0;
    /// Numeric code of [`AltitudeMode::ClampToGround`].
    pub const CLAMP_TO_GROUND_CODE: i32 = 1;
    /// Numeric code of [`AltitudeMode::RelativeToGround`].
    pub const RELATIVE_TO_GROUND_CODE: i32 = 2;

    /// Converts a numeric code into altitude mode. Unknown codes result in [`AltitudeMode::Absolute`].
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::ABSOLUTE_CODE => Self::Absolute,
            Self::CLAMP_TO_GROUND_CODE => Self::ClampToGround,
            Self::RELATIVE_TO_GROUND_CODE => Self::RelativeToGround,
            _ => {
                log::warn!("Unrecognized altitude mode code {code}, using absolute");
                Self::Absolute
            }
        }
    }

    /// Numeric code of the mode.
    pub fn code(&self) -> i32 {
        match self {
            Self::Absolute => Self::ABSOLUTE_CODE,
            Self::ClampToGround => Self::CLAMP_TO_GROUND_CODE,
            Self::RelativeToGround => Self::RELATIVE_TO_GROUND_CODE,
        }
    }

    /// Parses a mode name, e.g. `clamp-to-ground` or `RELATIVE_TO_GROUND`. Case and separators (`-`, `_`) are
    /// ignored. Unknown names result in [`AltitudeMode::Absolute`].
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "clamptoground" => Self::ClampToGround,
            "relativetoground" => Self::RelativeToGround,
            "absolute" => Self::Absolute,
            _ => {
                log::warn!("Unrecognized altitude mode '{name}', using absolute");
                Self::Absolute
            }
        }
    }

    /// Kebab-case name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClampToGround => "clamp-to-ground",
            Self::RelativeToGround => "relative-to-ground",
            Self::Absolute => "absolute",
        }
    }
}

impl From<i32> for AltitudeMode {
    fn from(value: i32) -> Self {
        Self::from_code(value)
    }
}

impl From<&str> for AltitudeMode {
    fn from(value: &str) -> Self {
        Self::from_name(value)
    }
}

#[cfg(feature = "serde")]
impl Serialize for AltitudeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum SerializedAltitudeMode {
    Code(i64),
    Name(String),
    #[allow(dead_code)]
    Other(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AltitudeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mode = match SerializedAltitudeMode::deserialize(deserializer)? {
            SerializedAltitudeMode::Code(code) => match i32::try_from(code) {
                Ok(code) => Self::from_code(code),
                Err(_) => {
                    log::warn!("Altitude mode code {code} is out of range, using absolute");
                    Self::Absolute
                }
            },
            SerializedAltitudeMode::Name(name) => Self::from_name(&name),
            SerializedAltitudeMode::Other(_) => {
                log::warn!("Altitude mode is neither a name nor a code, using absolute");
                Self::Absolute
            }
        };

        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        for mode in [
            AltitudeMode::Absolute,
            AltitudeMode::ClampToGround,
            AltitudeMode::RelativeToGround,
        ] {
            assert_eq!(AltitudeMode::from_code(mode.code()), mode);
        }
    }

    #[test]
    fn unknown_code_is_absolute() {
        assert_eq!(AltitudeMode::from(-1), AltitudeMode::Absolute);
        assert_eq!(AltitudeMode::from(3), AltitudeMode::Absolute);
        assert_eq!(AltitudeMode::from(i32::MAX), AltitudeMode::Absolute);
    }

    #[test]
    fn names() {
        assert_eq!(
            AltitudeMode::from_name("CLAMP_TO_GROUND"),
            AltitudeMode::ClampToGround
        );
        assert_eq!(
            AltitudeMode::from_name("relative-to-ground"),
            AltitudeMode::RelativeToGround
        );
        assert_eq!(AltitudeMode::from_name("underground"), AltitudeMode::Absolute);
        assert_eq!(AltitudeMode::from_name(""), AltitudeMode::Absolute);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_normalizes_unknown_names() {
        let mode: AltitudeMode = serde_json::from_str("\"on-the-moon\"").expect("invalid json");
        assert_eq!(mode, AltitudeMode::Absolute);

        let mode: AltitudeMode = serde_json::from_str("\"sideways\"").expect("invalid json");
        assert_eq!(mode, AltitudeMode::Absolute);

        let serialized = serde_json::to_string(&AltitudeMode::ClampToGround).expect("serialization");
        assert_eq!(serialized, "\"clamp-to-ground\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_accepts_codes() {
        let parse = |json: &str| serde_json::from_str::<AltitudeMode>(json).expect("invalid json");

        assert_eq!(parse("1"), AltitudeMode::ClampToGround);
        assert_eq!(parse("2"), AltitudeMode::RelativeToGround);
        assert_eq!(parse("0"), AltitudeMode::Absolute);
        assert_eq!(parse("42"), AltitudeMode::Absolute);
        assert_eq!(parse("-7"), AltitudeMode::Absolute);
        assert_eq!(parse("9999999999"), AltitudeMode::Absolute);
        assert_eq!(parse("null"), AltitudeMode::Absolute);
        assert_eq!(parse("1.5"), AltitudeMode::Absolute);
    }
}
