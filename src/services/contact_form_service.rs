//! Contact form service.
//!
//! Validates submissions, records the accepted ones, and keeps counters.

use crate::domain::FieldId;
use crate::error::StoreResult;
use crate::metrics::{Metrics, ValidationTimer};
use crate::models::{ContactFormData, Submission, ValidationResult};
use crate::repositories::{KeyValueStore, SubmissionLog};
use crate::validation::FormValidator;

/// Result of submitting a contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed and the submission was recorded.
    Accepted(Submission),

    /// At least one rule failed; nothing was recorded.
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The validation verdict behind this outcome.
    pub fn validation(&self) -> ValidationResult {
        match self {
            Self::Accepted(_) => ValidationResult::valid(),
            Self::Rejected(result) => result.clone(),
        }
    }
}

/// Contact form service trait for the operations a form controller needs.
pub trait ContactFormService {
    /// Validate a submission and record it when it passes.
    fn submit(&self, data: ContactFormData) -> StoreResult<SubmitOutcome>;

    /// On-blur check of a single field by its form identifier.
    fn check_field(&self, field_id: &str, value: &str) -> Option<String>;

    /// Previously accepted submissions, oldest first.
    fn submissions(&self) -> StoreResult<Vec<Submission>>;
}

/// Implementation of ContactFormService over any key/value store.
pub struct ContactFormServiceImpl<S> {
    validator: FormValidator,
    log: SubmissionLog<S>,
    metrics: Metrics,
}

impl<S: KeyValueStore> ContactFormServiceImpl<S> {
    /// Create a new service.
    pub fn new(validator: FormValidator, store: S) -> Self {
        Self {
            validator,
            log: SubmissionLog::new(store),
            metrics: Metrics::new(),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn log(&self) -> &SubmissionLog<S> {
        &self.log
    }

    /// Validate without recording anything.
    pub fn validate(&self, data: &ContactFormData) -> ValidationResult {
        let timer = ValidationTimer::new(self.metrics.clone());
        let result = self.validator.validate_form(data);
        timer.complete(result.is_valid());
        result
    }
}

impl<S: KeyValueStore> ContactFormService for ContactFormServiceImpl<S> {
    fn submit(&self, data: ContactFormData) -> StoreResult<SubmitOutcome> {
        let result = self.validate(&data);
        if !result.is_valid() {
            tracing::debug!(errors = ?result.errors(), "Rejected contact submission");
            return Ok(SubmitOutcome::Rejected(result));
        }

        match self.log.append(data) {
            Ok(submission) => {
                self.metrics.record_submission();
                Ok(SubmitOutcome::Accepted(submission))
            }
            Err(e) => {
                self.metrics.record_store_error();
                tracing::error!(error = %e, "Failed to record contact submission");
                Err(e)
            }
        }
    }

    fn check_field(&self, field_id: &str, value: &str) -> Option<String> {
        let Ok(field) = field_id.parse::<FieldId>() else {
            tracing::trace!(field_id = %field_id, "Ignoring unknown field");
            return None;
        };

        let error = self.validator.check_field(field, value).err();
        self.metrics.record_field_check(error.is_some());
        error.map(|e| e.to_string())
    }

    fn submissions(&self) -> StoreResult<Vec<Submission>> {
        self.log.list().inspect_err(|_| self.metrics.record_store_error())
    }
}
