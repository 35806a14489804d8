//! Contact form submission model.

use serde::{Deserialize, Serialize};

/// One submission attempt, as entered by the user.
///
/// The validator only ever borrows this; it is never modified after the
/// caller builds it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    /// Sender's name
    pub name: String,

    /// Sender's email address
    pub email: String,

    /// Message body
    pub message: String,

    /// Optional phone number; `None` and `Some("")` are treated alike
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactFormData {
    /// Create form data without a phone number.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            phone: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// The phone number, or an empty string when none was given.
    pub fn phone_str(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }
}
