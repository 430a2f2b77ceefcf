/// Characters the message must carry to be decodable. Longer messages are
/// permitted; only the first three positions are read.
pub const MIN_LEN: usize = 3;

/// Uppercase code for a left-owned plate.
pub const LEFT_CODE: char = 'L';
/// Uppercase code for a right-owned plate.
pub const RIGHT_CODE: char = 'R';
