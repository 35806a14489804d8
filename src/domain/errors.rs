//! Field rule violations.

use std::fmt;

/// A single rule a contact form field failed.
///
/// The `Display` text is the message shown to the user, so the configured
/// minimums travel with the variant instead of being repeated in strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The trimmed name is shorter than `min` characters.
    NameTooShort { min: usize },

    /// The email address does not look like `local@domain.tld`.
    InvalidEmail,

    /// The phone number contains characters other than digits and separators.
    InvalidPhone,

    /// The trimmed message is shorter than `min` characters.
    MessageTooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort { min } => {
                write!(f, "Name must be at least {} characters long", min)
            }
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::InvalidPhone => write!(f, "Please enter a valid phone number"),
            Self::MessageTooShort { min } => {
                write!(f, "Message must be at least {} characters long", min)
            }
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_interpolate_minimum() {
        assert_eq!(
            FieldError::NameTooShort { min: 2 }.to_string(),
            "Name must be at least 2 characters long"
        );
        assert_eq!(
            FieldError::MessageTooShort { min: 25 }.to_string(),
            "Message must be at least 25 characters long"
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::InvalidPhone.to_string(),
            "Please enter a valid phone number"
        );
    }
}
