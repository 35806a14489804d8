//! Contact Form Validator - validation engine for a website contact form.
//!
//! The core is a set of pure field rules and a [`FormValidator`] that
//! aggregates them into a whole-form verdict, reporting every failing rule
//! at once. Around it sit a small append-only submission log over a
//! caller-supplied key/value store and a service that ties the two together.
//!
//! # Architecture
//!
//! - **validation**: Field rules, whole-form and on-blur validation
//! - **domain**: Email/phone patterns, field identifiers, rule violations
//! - **models**: Form data, validation results, recorded submissions
//! - **repositories**: Key/value stores and the submission log
//! - **services**: Validate-then-record orchestration
//! - **metrics**: Outcome counters
//! - **cli**: JSON-in, JSON-out command line front end
//! - **config**: Configuration from environment variables
//! - **error**: Configuration and storage error types
//!
//! # Example
//!
//! ```
//! use contact_form_validator::{validate_form, ContactFormData};
//!
//! let result = validate_form(&ContactFormData::new("Al", "al@x.com", "0123456789"));
//! assert!(result.is_valid());
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;

pub use config::Config;
pub use domain::{FieldError, FieldId};
pub use error::{ConfigError, StoreError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactFormData, Submission, ValidationResult};
pub use repositories::{JsonFileStore, KeyValueStore, MemoryStore, SubmissionLog};
pub use services::{ContactFormService, ContactFormServiceImpl, SubmitOutcome};
pub use validation::{
    validate_email, validate_field, validate_form, validate_message, validate_name,
    validate_phone, FormValidator,
};
