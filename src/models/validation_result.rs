//! Whole-form validation verdict.

use serde::Serialize;

/// Outcome of validating a contact form.
///
/// `is_valid` is derived from `errors` at construction, so the two can
/// never disagree.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from the collected error messages, in report order.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A passing result with no errors.
    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Whether every rule passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Error messages in field order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Take ownership of the error messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
