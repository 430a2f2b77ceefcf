use super::error::GameDataError;

/// Safe character access over a raw game specific message. Positions are
/// counted in `char`s, not bytes, so a multi-byte character elsewhere in the
/// message never panics or skews indexing.
pub struct GameDataReader<'a> {
    message: &'a str,
}

impl<'a> GameDataReader<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), GameDataError> {
        let actual = self.message.chars().count();
        if actual < needed {
            return Err(GameDataError::TooShort { needed, actual });
        }
        Ok(())
    }

    pub fn read_char(&self, position: usize) -> Result<char, GameDataError> {
        self.message
            .chars()
            .nth(position)
            .ok_or(GameDataError::TooShort {
                needed: position + 1,
                actual: self.message.chars().count(),
            })
    }
}
