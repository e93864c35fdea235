//! Utility functions.

pub mod env;
pub mod format;
pub mod numeric;

pub use format::{Amount, format_compact, format_count, format_full, format_percent};
pub use numeric::{parse_leading_int, round_half_up};
