//! Email address pattern.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` with no whitespace or second `@` in any segment.
///
/// Loose on purpose: `a@b..c` passes and `"john doe"@x.com` fails. Existing
/// callers depend on exactly this shape.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// Check a raw value against the email pattern. The value is not trimmed.
///
/// # Example
///
/// ```
/// use contact_form_validator::domain::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@example"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
