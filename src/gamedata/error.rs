use thiserror::Error;

/// Errors raised by message reading. These stay internal to the decode
/// layer; the parser folds them into `OwnedSide::Unknown`.
#[derive(Debug, Error)]
pub enum GameDataError {
    #[error("message too short: need {needed} characters, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
