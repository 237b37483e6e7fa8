//! Case conversions between delimiter-separated, camel and Pascal case.
//!
//! All conversions are total: any character that is not a letter, digit or
//! the delimiter is passed through. Missing input is handled by the caller
//! with `Option::map`.

pub mod camel;
pub mod separated;

pub use camel::{to_camel_case, to_camel_case_with, to_pascal_case, to_pascal_case_with};
pub use separated::to_separated_case;

pub const DEFAULT_DELIMITER: char = '_';
