//! Contact form field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four contact form fields, keyed by the identifier the form
/// markup uses for its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    #[serde(rename = "contactName")]
    Name,
    #[serde(rename = "contactEmail")]
    Email,
    #[serde(rename = "contactPhone")]
    Phone,
    #[serde(rename = "contactMessage")]
    Message,
}

impl FieldId {
    /// All fields, in the order their errors are reported.
    pub const ALL: [FieldId; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    /// The form identifier for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "contactName",
            Self::Email => "contactEmail",
            Self::Phone => "contactPhone",
            Self::Message => "contactMessage",
        }
    }
}

impl FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown field identifier: {}", s))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
