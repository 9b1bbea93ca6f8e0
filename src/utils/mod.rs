//! Shared utilities.

mod collate;
mod text;

pub use collate::locale_compare;
pub use text::{single_line, truncate_to_width};
