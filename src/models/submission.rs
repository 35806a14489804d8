//! Accepted submission record.

use super::contact_form::ContactFormData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An accepted contact form submission, as kept in the submission log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Sequential identifier, starting at 1
    pub id: u64,

    /// When the submission was accepted
    pub submitted_at: DateTime<Utc>,

    /// The submitted form
    pub data: ContactFormData,
}
