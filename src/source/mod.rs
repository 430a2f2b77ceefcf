//! Boundary to the live game data supplier.
//!
//! The driver station refreshes the game specific message over the course of
//! a match, so [`MatchData`] queries its source on every call and never
//! caches the result. A source returning `None` models the field not having
//! transmitted the message yet.

use crate::gamedata::resolve_owned_side;
use crate::{GameFeature, OwnedSide};

/// A supplier of the current game specific message.
///
/// # Examples
/// ```
/// use matchdata::GameDataSource;
///
/// struct Fixed(&'static str);
///
/// impl GameDataSource for Fixed {
///     fn game_specific_message(&self) -> Option<String> {
///         Some(self.0.to_string())
///     }
/// }
/// ```
pub trait GameDataSource {
    /// The message as last received, or `None` when not yet available.
    fn game_specific_message(&self) -> Option<String>;
}

/// Front-end resolving feature ownership from a live source.
///
/// Stateless apart from the source itself: repeated calls with an unchanged
/// message are idempotent, and the source is re-queried every call.
///
/// # Examples
/// ```
/// use matchdata::{GameDataSource, GameFeature, MatchData, OwnedSide};
///
/// struct Fixed(&'static str);
///
/// impl GameDataSource for Fixed {
///     fn game_specific_message(&self) -> Option<String> {
///         Some(self.0.to_string())
///     }
/// }
///
/// let match_data = MatchData::new(Fixed("LRL"));
/// assert_eq!(match_data.owned_side(GameFeature::Scale), OwnedSide::Right);
/// ```
pub struct MatchData<S> {
    source: S,
}

impl<S: GameDataSource> MatchData<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Owned side of a single feature, from a fresh fetch of the message.
    pub fn owned_side(&self, feature: GameFeature) -> OwnedSide {
        match self.source.game_specific_message() {
            Some(message) => resolve_owned_side(feature, &message),
            None => OwnedSide::Unknown,
        }
    }

    /// Owned sides of all three features, in message-position order, decoded
    /// from a single fetch so the result is one consistent snapshot.
    pub fn owned_sides(&self) -> [OwnedSide; 3] {
        match self.source.game_specific_message() {
            Some(message) => GameFeature::ALL.map(|feature| resolve_owned_side(feature, &message)),
            None => [OwnedSide::Unknown; 3],
        }
    }
}
