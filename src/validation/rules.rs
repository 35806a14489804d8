//! Individual field rules.
//!
//! Each `check_*` function returns the typed [`FieldError`] for its field so
//! the message always matches the minimum that was actually enforced. The
//! `validate_*` predicates apply the default minimums.

use crate::domain::{is_valid_email, is_valid_phone, FieldError};

/// Default minimum trimmed length of the name field.
pub const DEFAULT_NAME_MIN_LENGTH: usize = 2;

/// Default minimum trimmed length of the message field.
pub const DEFAULT_MESSAGE_MIN_LENGTH: usize = 10;

/// Length after trimming surrounding whitespace, in characters.
fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn check_name(value: &str, min: usize) -> Result<(), FieldError> {
    if trimmed_len(value) >= min {
        Ok(())
    } else {
        Err(FieldError::NameTooShort { min })
    }
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// An empty phone passes; the field is optional.
pub fn check_phone(value: &str) -> Result<(), FieldError> {
    if value.is_empty() || is_valid_phone(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

pub fn check_message(value: &str, min: usize) -> Result<(), FieldError> {
    if trimmed_len(value) >= min {
        Ok(())
    } else {
        Err(FieldError::MessageTooShort { min })
    }
}

/// True when the trimmed name has at least [`DEFAULT_NAME_MIN_LENGTH`] characters.
pub fn validate_name(value: &str) -> bool {
    check_name(value, DEFAULT_NAME_MIN_LENGTH).is_ok()
}

/// True when the value is `local@domain.tld`-shaped.
pub fn validate_email(value: &str) -> bool {
    check_email(value).is_ok()
}

/// True when the value is empty or made only of digits and phone separators.
pub fn validate_phone(value: &str) -> bool {
    check_phone(value).is_ok()
}

/// True when the trimmed message has at least [`DEFAULT_MESSAGE_MIN_LENGTH`] characters.
pub fn validate_message(value: &str) -> bool {
    check_message(value, DEFAULT_MESSAGE_MIN_LENGTH).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_boundary() {
        assert!(!validate_name(""));
        assert!(!validate_name("A"));
        assert!(!validate_name("   A   "));
        assert!(!validate_name("    "));
        assert!(validate_name("Al"));
        assert!(validate_name("  Al  "));
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // One character, two bytes
        assert!(!validate_name("é"));
        assert!(validate_name("Zoë"));
    }

    #[test]
    fn test_email_examples() {
        assert!(validate_email("a@b.co"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a @b.com"));
    }

    #[test]
    fn test_phone_examples() {
        assert!(validate_phone(""));
        assert!(validate_phone("123-456-7890"));
        assert!(!validate_phone("call me"));
        // Whitespace-only is non-empty and all whitespace
        assert!(validate_phone("   "));
    }

    #[test]
    fn test_message_examples() {
        assert!(!validate_message("short"));
        assert!(validate_message("exactly10!"));
        assert!(!validate_message("  123456789  "));
        assert!(validate_message("  0123456789  "));
    }

    #[test]
    fn test_check_reports_enforced_minimum() {
        assert_eq!(
            check_message("hello", 20),
            Err(FieldError::MessageTooShort { min: 20 })
        );
        assert_eq!(check_name("Bo", 3), Err(FieldError::NameTooShort { min: 3 }));
        assert_eq!(check_name("Bo", 0), Ok(()));
    }
}
