//! Data models for contact form submissions.
//!
//! This module contains the snapshot a caller assembles from user input,
//! the verdict the validator returns for it, and the record kept for each
//! accepted submission.

pub mod contact_form;
pub mod submission;
pub mod validation_result;

pub use contact_form::ContactFormData;
pub use submission::Submission;
pub use validation_result::ValidationResult;
