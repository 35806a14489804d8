//! Basic metrics instrumentation for the contact form service.
//!
//! Counts validation outcomes, on-blur field checks and recorded
//! submissions, and tracks how long form validation takes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for form validation and submission.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of whole-form validations
    forms_validated_total: Arc<AtomicU64>,

    /// Number of forms that failed at least one rule
    forms_rejected_total: Arc<AtomicU64>,

    /// Total duration of all form validations in microseconds
    validation_duration_total_us: Arc<AtomicU64>,

    /// Number of single-field checks
    field_checks_total: Arc<AtomicU64>,

    /// Number of single-field checks that produced an error
    field_errors_total: Arc<AtomicU64>,

    /// Number of submissions written to the log
    submissions_recorded_total: Arc<AtomicU64>,

    /// Number of failed store reads or writes
    store_errors_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            forms_validated_total: Arc::new(AtomicU64::new(0)),
            forms_rejected_total: Arc::new(AtomicU64::new(0)),
            validation_duration_total_us: Arc::new(AtomicU64::new(0)),
            field_checks_total: Arc::new(AtomicU64::new(0)),
            field_errors_total: Arc::new(AtomicU64::new(0)),
            submissions_recorded_total: Arc::new(AtomicU64::new(0)),
            store_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a form validation with its outcome and duration.
    pub fn record_form_validation(&self, is_valid: bool, duration: Duration) {
        self.forms_validated_total.fetch_add(1, Ordering::Relaxed);
        if !is_valid {
            self.forms_rejected_total.fetch_add(1, Ordering::Relaxed);
        }
        self.validation_duration_total_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record an on-blur field check.
    pub fn record_field_check(&self, failed: bool) {
        self.field_checks_total.fetch_add(1, Ordering::Relaxed);
        if failed {
            self.field_errors_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a submission written to the log.
    pub fn record_submission(&self) {
        self.submissions_recorded_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a store failure.
    pub fn record_store_error(&self) {
        self.store_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn forms_validated_total(&self) -> u64 {
        self.forms_validated_total.load(Ordering::Relaxed)
    }

    pub fn forms_rejected_total(&self) -> u64 {
        self.forms_rejected_total.load(Ordering::Relaxed)
    }

    pub fn validation_duration_total_us(&self) -> u64 {
        self.validation_duration_total_us.load(Ordering::Relaxed)
    }

    /// Get average form validation duration in microseconds.
    pub fn validation_duration_avg_us(&self) -> f64 {
        let total = self.validation_duration_total_us.load(Ordering::Relaxed);
        let count = self.forms_validated_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn field_checks_total(&self) -> u64 {
        self.field_checks_total.load(Ordering::Relaxed)
    }

    pub fn field_errors_total(&self) -> u64 {
        self.field_errors_total.load(Ordering::Relaxed)
    }

    pub fn submissions_recorded_total(&self) -> u64 {
        self.submissions_recorded_total.load(Ordering::Relaxed)
    }

    pub fn store_errors_total(&self) -> u64 {
        self.store_errors_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            forms_validated_total: self.forms_validated_total(),
            forms_rejected_total: self.forms_rejected_total(),
            validation_duration_avg_us: self.validation_duration_avg_us(),
            field_checks_total: self.field_checks_total(),
            field_errors_total: self.field_errors_total(),
            submissions_recorded_total: self.submissions_recorded_total(),
            store_errors_total: self.store_errors_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub forms_validated_total: u64,
    pub forms_rejected_total: u64,
    pub validation_duration_avg_us: f64,
    pub field_checks_total: u64,
    pub field_errors_total: u64,
    pub submissions_recorded_total: u64,
    pub store_errors_total: u64,
}

/// Helper for timing a form validation.
pub struct ValidationTimer {
    start: Instant,
    metrics: Metrics,
}

impl ValidationTimer {
    /// Start timing a validation.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the outcome.
    pub fn complete(self, is_valid: bool) {
        let duration = self.start.elapsed();
        self.metrics.record_form_validation(is_valid, duration);
    }
}
