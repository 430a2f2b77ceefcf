//! Decoder for the FRC 2018 "Power Up" game specific message.
//!
//! During a 2018 match the field management system broadcasts a 3-character
//! string in which each position encodes which plate of a field feature
//! (the near switch, the scale, the far switch) is owned by the alliance,
//! from the perspective of the alliance station. This crate decodes that
//! string into two closed enumerations, [`GameFeature`] and [`OwnedSide`].
//!
//! Decoding lives in `gamedata` (layout/reader/parser/error layering) and is
//! pure: no I/O, no panics, no escaping errors. The boundary to the live
//! driver station data is the [`GameDataSource`] trait in `source`, queried
//! fresh on every call by [`MatchData`].
//!
//! Invariants:
//! - Every failure mode (absent message, short message, unrecognized
//!   character) resolves to [`OwnedSide::Unknown`]; callers treat it as
//!   "information not yet available", never as a fatal state.
//! - Resolution is stateless and idempotent for a fixed message; nothing is
//!   cached between calls.
//!
//! # Examples
//! ```
//! use matchdata::{GameFeature, OwnedSide, resolve_owned_side};
//!
//! assert_eq!(resolve_owned_side(GameFeature::Scale, "LRL"), OwnedSide::Right);
//! assert_eq!(resolve_owned_side(GameFeature::Scale, ""), OwnedSide::Unknown);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

mod gamedata;
mod source;

pub use gamedata::resolve_owned_side;
pub use source::{GameDataSource, MatchData};

/// A field feature whose ownership is signaled positionally within the game
/// specific message. Near denotes close to the alliance wall, far denotes
/// furthest from it.
///
/// # Examples
/// ```
/// use matchdata::GameFeature;
///
/// assert_eq!(GameFeature::SwitchNear.index(), 0);
/// assert_eq!(GameFeature::Scale.to_string(), "SCALE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameFeature {
    /// The switch closest to the alliance wall (message position 0).
    SwitchNear,
    /// The scale at the center of the field (message position 1).
    Scale,
    /// The switch furthest from the alliance wall (message position 2).
    SwitchFar,
}

impl GameFeature {
    /// All features in message-position order.
    pub const ALL: [GameFeature; 3] = [
        GameFeature::SwitchNear,
        GameFeature::Scale,
        GameFeature::SwitchFar,
    ];

    /// Position of this feature's character within the game specific
    /// message. Always in `0..3`.
    pub fn index(self) -> usize {
        match self {
            GameFeature::SwitchNear => 0,
            GameFeature::Scale => 1,
            GameFeature::SwitchFar => 2,
        }
    }

    /// Stable display name for this feature.
    pub fn name(self) -> &'static str {
        match self {
            GameFeature::SwitchNear => "SWITCH_NEAR",
            GameFeature::Scale => "SCALE",
            GameFeature::SwitchFar => "SWITCH_FAR",
        }
    }
}

impl fmt::Display for GameFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of a feature is owned by the alliance, from the perspective of
/// the alliance station. [`OwnedSide::Unknown`] is both the default and the
/// explicit sentinel for "the field has not transmitted this yet".
///
/// # Examples
/// ```
/// use matchdata::OwnedSide;
///
/// assert_eq!(OwnedSide::default(), OwnedSide::Unknown);
/// assert_eq!(OwnedSide::Left.to_string(), "LEFT");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnedSide {
    /// Ownership not determinable: message absent, too short, or carrying
    /// an unrecognized character at the feature's position.
    #[default]
    Unknown,
    /// The left plate is owned.
    Left,
    /// The right plate is owned.
    Right,
}

impl OwnedSide {
    /// Stable display name for this side.
    pub fn name(self) -> &'static str {
        match self {
            OwnedSide::Unknown => "UNKNOWN",
            OwnedSide::Left => "LEFT",
            OwnedSide::Right => "RIGHT",
        }
    }
}

impl fmt::Display for OwnedSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_indices_match_message_positions() {
        for (position, feature) in GameFeature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), position);
        }
    }

    #[test]
    fn feature_names_cover_all_variants() {
        let names: Vec<_> = GameFeature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["SWITCH_NEAR", "SCALE", "SWITCH_FAR"]);
    }

    #[test]
    fn owned_side_names() {
        assert_eq!(OwnedSide::Unknown.name(), "UNKNOWN");
        assert_eq!(OwnedSide::Left.name(), "LEFT");
        assert_eq!(OwnedSide::Right.name(), "RIGHT");
    }

    #[test]
    fn enums_serialize_as_display_names() {
        let feature = serde_json::to_value(GameFeature::SwitchNear).expect("feature json");
        assert_eq!(feature, "SWITCH_NEAR");

        let side = serde_json::to_value(OwnedSide::Unknown).expect("side json");
        assert_eq!(side, "UNKNOWN");

        let parsed: OwnedSide = serde_json::from_str("\"LEFT\"").expect("side from json");
        assert_eq!(parsed, OwnedSide::Left);
    }
}
