//! Game specific message decoding.
//!
//! The decoder follows a layered structure:
//! - `layout`: character positions and recognized side codes (source of truth)
//! - `reader`: safe character access over the raw message
//! - `parser`: domain-level decoding (no direct indexing)
//! - `error`: explicit decode errors, folded to the sentinel at the parser
//!
//! Parsing is pure and contains no I/O; the `source` module owns the
//! boundary to the live driver station data. Errors never cross the public
//! API: a short or unrecognized message resolves to `OwnedSide::Unknown`.

pub(crate) mod error;
pub(crate) mod layout;
pub(crate) mod parser;
pub(crate) mod reader;

pub use parser::resolve_owned_side;
