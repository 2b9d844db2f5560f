use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a combat unit within a battle.
///
/// Ids come from the roster producer (typically a token identifier) and are
/// opaque to the engine apart from companion pairing, see
/// [`super::CombatUnit::base_token_id`].
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(pub String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for UnitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for UnitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of a static ability definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityId(pub String);

impl AbilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for AbilityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for AbilityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The two sides of a battle.
///
/// `Player` is the caller's roster (roster A); `Opponent` is roster B and is
/// the side driven by the engine's AI turn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}
