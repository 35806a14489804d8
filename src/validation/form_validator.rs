//! Whole-form and per-field validation.
//!
//! A [`FormValidator`] carries the configured minimum lengths; everything
//! else about the rules is fixed. Field dispatch goes through one table so
//! `validate_form` and `validate_field` cannot drift apart.

use super::rules::{
    check_email, check_message, check_name, check_phone, DEFAULT_MESSAGE_MIN_LENGTH,
    DEFAULT_NAME_MIN_LENGTH,
};
use crate::config::Config;
use crate::domain::{FieldError, FieldId};
use crate::models::{ContactFormData, ValidationResult};

type FieldRule = fn(&FormValidator, &str) -> Result<(), FieldError>;

/// Field rules in error-report order.
const FIELD_RULES: [(FieldId, FieldRule); 4] = [
    (FieldId::Name, |v, value| check_name(value, v.name_min_length)),
    (FieldId::Email, |_, value| check_email(value)),
    (FieldId::Phone, |_, value| check_phone(value)),
    (FieldId::Message, |v, value| {
        check_message(value, v.message_min_length)
    }),
];

/// Contact form validator.
///
/// # Example
///
/// ```
/// use contact_form_validator::models::ContactFormData;
/// use contact_form_validator::validation::FormValidator;
///
/// let validator = FormValidator::new();
/// let result = validator.validate_form(&ContactFormData::new("A", "bad", "short"));
/// assert_eq!(result.errors().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormValidator {
    name_min_length: usize,
    message_min_length: usize,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    /// Create a validator with the default minimum lengths.
    pub fn new() -> Self {
        Self {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            message_min_length: DEFAULT_MESSAGE_MIN_LENGTH,
        }
    }

    /// Create a validator using the minimums from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            name_min_length: config.name_min_length,
            message_min_length: config.message_min_length,
        }
    }

    /// Override the minimum name length.
    pub fn with_name_min_length(mut self, min: usize) -> Self {
        self.name_min_length = min;
        self
    }

    /// Override the minimum message length.
    pub fn with_message_min_length(mut self, min: usize) -> Self {
        self.message_min_length = min;
        self
    }

    pub fn name_min_length(&self) -> usize {
        self.name_min_length
    }

    pub fn message_min_length(&self) -> usize {
        self.message_min_length
    }

    /// Run the rule for a single field.
    pub fn check_field(&self, field: FieldId, value: &str) -> Result<(), FieldError> {
        FIELD_RULES
            .iter()
            .find(|(id, _)| *id == field)
            .map_or(Ok(()), |(_, rule)| rule(self, value))
    }

    /// Validate every field and collect all failures.
    ///
    /// No rule short-circuits another. Errors come back in the order name,
    /// email, phone, message; an absent or empty phone contributes nothing.
    pub fn validate_form(&self, data: &ContactFormData) -> ValidationResult {
        let errors: Vec<String> = FIELD_RULES
            .iter()
            .filter_map(|(field, rule)| {
                let value = match field {
                    FieldId::Name => data.name.as_str(),
                    FieldId::Email => data.email.as_str(),
                    FieldId::Phone => data.phone_str(),
                    FieldId::Message => data.message.as_str(),
                };
                rule(self, value).err()
            })
            .map(|e| e.to_string())
            .collect();

        tracing::debug!(
            is_valid = errors.is_empty(),
            error_count = errors.len(),
            "Validated contact form"
        );

        ValidationResult::from_errors(errors)
    }

    /// On-blur check for the field named by its form identifier.
    ///
    /// Returns `None` when the value passes, and also for identifiers that
    /// are not contact form fields.
    pub fn validate_field(&self, field_id: &str, value: &str) -> Option<String> {
        let Ok(field) = field_id.parse::<FieldId>() else {
            tracing::trace!(field_id = %field_id, "Ignoring unknown field");
            return None;
        };

        self.check_field(field, value).err().map(|e| e.to_string())
    }
}

/// Validate a form with the default minimum lengths.
pub fn validate_form(data: &ContactFormData) -> ValidationResult {
    FormValidator::new().validate_form(data)
}

/// Validate a single field with the default minimum lengths.
pub fn validate_field(field_id: &str, value: &str) -> Option<String> {
    FormValidator::new().validate_field(field_id, value)
}
