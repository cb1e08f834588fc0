//! Default Values
//!
//! Every value the compact wire form elides is listed here. Encoding drops a
//! field when it equals its default; decoding substitutes the default when
//! the field is missing.

/// Unit label of a repeating item when none was given.
pub const UNIT_NAME: &str = "page";

/// The ideal (early finish) line is drawn.
pub const SHOW_IDEAL_LINE: bool = true;

/// The last-minute (minimum pace) line is drawn.
pub const SHOW_LAST_MINUTE_LINE: bool = true;

/// Days before the end of the period by which the ideal line reaches zero.
pub const IDEAL_DAYS_BEFORE_END: u32 = 7;

/// Prefix of ids assigned to decoded items.
pub const DECODED_ID_PREFIX: &str = "hw-";
