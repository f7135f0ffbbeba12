//! Positional splitting of fixed-layout telephone numbers such as
//! `+441483924732` into country code (`44`), area code (`1483`) and local
//! number (`924732`).
//!
//! [`clean_telephone_number`] and [`TelephoneSplitter::split`] never fail and
//! return truncated parts for short input, while
//! [`TelephoneSplitter::split_strict`] rejects anything that is not a prefix
//! marker followed by the expected number of digits.

mod telephone;
pub mod greeting;
pub(crate) mod string_util;

pub use greeting::greet;
pub use telephone::{
    clean_telephone_number, errors, InvalidFormatError, LayoutError, Part, PartsFormat,
    SplitLayout, TelephoneParts, TelephoneSplitter, TELEPHONE_SPLITTER,
};

#[cfg(test)]
mod tests;
