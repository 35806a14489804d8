//! Phone number pattern.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` would also admit other scripts' digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+()\-]+$").expect("Failed to compile phone regex"));

/// Check a raw value against the phone pattern: digits, whitespace, `-`,
/// `+`, `(` and `)`, at least one character.
///
/// The phone field is optional, but an empty value does not match here; the
/// field rule lets it through before calling this.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
