mod helper_constants;
mod telephone_regexps;
pub mod errors;
pub mod enums;
pub mod layout;
pub mod splitter;
pub mod helper_types;

use std::sync::LazyLock;

pub use enums::{Part, PartsFormat};
pub use errors::{InvalidFormatError, LayoutError};
pub use helper_types::TelephoneParts;
pub use layout::SplitLayout;
pub use splitter::TelephoneSplitter;

pub static TELEPHONE_SPLITTER: LazyLock<TelephoneSplitter> = LazyLock::new(|| {
    TelephoneSplitter::new()
});

/// Cleans a telephone number, returning `(country code, area code, local number)`.
///
/// Positional split over chars `[1, 3)`, `[3, 7)` and `[7, 13)` of the input.
/// Never fails: malformed or short input gives truncated or empty parts.
///
/// ```
/// let (country, area, local) = rtelephone::clean_telephone_number("+441483924732");
/// assert_eq!((country, area, local), ("44", "1483", "924732"));
/// ```
pub fn clean_telephone_number(phone_number: &str) -> (&str, &str, &str) {
    TELEPHONE_SPLITTER.split(phone_number).into_tuple()
}
