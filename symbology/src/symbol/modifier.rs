//! Symbol modifiers: named values that augment or change the graphic of a symbol.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use symbology_types::Angle;

/// Value of a symbol modifier.
///
/// Which value type a modifier expects depends on the modifier. Modifiers with an implicit value, that only need to
/// be enabled (e.g. [`keys::LOCATION`]), are set with `true`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModifierValue {
    /// Flag value.
    Bool(bool),
    /// Numeric value, e.g. speed or quantity.
    Number(f64),
    /// Angular value, e.g. direction of movement.
    Angle(Angle),
    /// Text value, e.g. unique designation.
    Text(String),
}

impl ModifierValue {
    /// Returns the flag if the value is a [`ModifierValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the number if the value is a [`ModifierValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the angle if the value is a [`ModifierValue::Angle`].
    pub fn as_angle(&self) -> Option<Angle> {
        match self {
            Self::Angle(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text if the value is a [`ModifierValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for ModifierValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ModifierValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ModifierValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Angle> for ModifierValue {
    fn from(value: Angle) -> Self {
        Self::Angle(value)
    }
}

impl From<&str> for ModifierValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ModifierValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Keys of the commonly used modifiers.
///
/// A symbol accepts any non-empty key, these constants only cover the modifiers most symbol sets recognize.
pub mod keys {
    /// Free text shown next to the icon.
    pub const ADDITIONAL_INFORMATION: &str = "AdditionalInformation";
    /// Altitude or depth of the object.
    pub const ALTITUDE_DEPTH: &str = "AltitudeDepth";
    /// Auxiliary equipment indicator (e.g. towed sonar array).
    pub const AUXILIARY_EQUIPMENT: &str = "AuxiliaryEquipment";
    /// Combat effectiveness of the unit.
    pub const COMBAT_EFFECTIVENESS: &str = "CombatEffectiveness";
    /// Date-time group.
    pub const DATE_TIME_GROUP: &str = "DateTimeGroup";
    /// Direction of movement, drawn as an arrow from the icon.
    pub const DIRECTION_OF_MOVEMENT: &str = "DirectionOfMovement";
    /// Echelon (size) of the unit.
    pub const ECHELON: &str = "Echelon";
    /// Feint or dummy indicator.
    pub const FEINT_DUMMY: &str = "FeintDummy";
    /// Heading of the object.
    pub const HEADING: &str = "Heading";
    /// Headquarters indicator.
    pub const HEADQUARTERS: &str = "Headquarters";
    /// Higher formation.
    pub const HIGHER_FORMATION: &str = "HigherFormation";
    /// Installation indicator.
    pub const INSTALLATION: &str = "Installation";
    /// Location text. Enabled with `true`, the text is derived from the symbol position.
    pub const LOCATION: &str = "Location";
    /// Mobility indicator.
    pub const MOBILITY: &str = "Mobility";
    /// Operational condition indicator.
    pub const OPERATIONAL_CONDITION: &str = "OperationalCondition";
    /// Quantity of equipment.
    pub const QUANTITY: &str = "Quantity";
    /// Speed of the object.
    pub const SPEED: &str = "Speed";
    /// Staff comments.
    pub const STAFF_COMMENTS: &str = "StaffComments";
    /// Task force indicator.
    pub const TASK_FORCE: &str = "TaskForce";
    /// Type of equipment.
    pub const TYPE: &str = "Type";
    /// Unique designation of the unit.
    pub const UNIQUE_DESIGNATION: &str = "UniqueDesignation";

    pub(super) const GRAPHIC: &[&str] = &[
        AUXILIARY_EQUIPMENT,
        DIRECTION_OF_MOVEMENT,
        ECHELON,
        FEINT_DUMMY,
        HEADING,
        HEADQUARTERS,
        INSTALLATION,
        MOBILITY,
        OPERATIONAL_CONDITION,
        TASK_FORCE,
    ];
}

/// Whether a modifier is drawn as a graphic element or as text around the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// Drawn as part of the graphic, suppressed when graphic modifiers are hidden.
    Graphic,
    /// Drawn as text, suppressed when text modifiers are hidden.
    Text,
}

impl ModifierKind {
    /// Returns the kind of the modifier with the given key. Keys not known to be graphic are considered text.
    pub fn of(key: &str) -> Self {
        if keys::GRAPHIC.contains(&key) {
            Self::Graphic
        } else {
            Self::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            ModifierKind::of(keys::DIRECTION_OF_MOVEMENT),
            ModifierKind::Graphic
        );
        assert_eq!(ModifierKind::of(keys::ECHELON), ModifierKind::Graphic);
        assert_eq!(ModifierKind::of(keys::SPEED), ModifierKind::Text);
        assert_eq!(ModifierKind::of("SomethingCustom"), ModifierKind::Text);
    }

    #[test]
    fn accessors() {
        let value = ModifierValue::from(45);
        assert_eq!(value.as_number(), Some(45.0));
        assert_eq!(value.as_angle(), None);

        let value = ModifierValue::from("1-32 ARMOR");
        assert_eq!(value.as_text(), Some("1-32 ARMOR"));
        assert_eq!(value.as_bool(), None);

        assert_eq!(ModifierValue::from(true).as_bool(), Some(true));
        assert_eq!(
            ModifierValue::from(Angle::from_degrees(90.0)).as_angle(),
            Some(Angle::from_degrees(90.0))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialization_is_tagged() {
        let json = serde_json::to_string(&ModifierValue::Angle(Angle::from_degrees(45.0)))
            .expect("serialization failed");
        assert_eq!(json, r#"{"angle":45.0}"#);

        let value: ModifierValue =
            serde_json::from_str(r#"{"number":12.5}"#).expect("invalid json");
        assert_eq!(value, ModifierValue::Number(12.5));
    }
}
