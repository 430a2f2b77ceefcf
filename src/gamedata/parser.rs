use super::layout;
use super::reader::GameDataReader;
use crate::{GameFeature, OwnedSide};

/// Decode the owned side of a feature from a raw game specific message.
///
/// Every failure mode degrades to [`OwnedSide::Unknown`]: a message shorter
/// than three characters, or an unrecognized character at the feature's
/// position. Matching is case-insensitive. Messages longer than three
/// characters are permitted; only the first three positions are read.
///
/// # Examples
/// ```
/// use matchdata::{GameFeature, OwnedSide, resolve_owned_side};
///
/// assert_eq!(resolve_owned_side(GameFeature::SwitchNear, "LRL"), OwnedSide::Left);
/// assert_eq!(resolve_owned_side(GameFeature::SwitchFar, "lrX"), OwnedSide::Unknown);
/// ```
pub fn resolve_owned_side(feature: GameFeature, message: &str) -> OwnedSide {
    let reader = GameDataReader::new(message);
    if reader.require_len(layout::MIN_LEN).is_err() {
        return OwnedSide::Unknown;
    }

    // feature.index() is in 0..3 by construction, so this read cannot fail
    // after the length check; fold the error anyway rather than panic.
    match reader.read_char(feature.index()) {
        Ok(code) => decode_side(code),
        Err(_) => OwnedSide::Unknown,
    }
}

fn decode_side(code: char) -> OwnedSide {
    match code.to_ascii_uppercase() {
        layout::LEFT_CODE => OwnedSide::Left,
        layout::RIGHT_CODE => OwnedSide::Right,
        _ => OwnedSide::Unknown,
    }
}
