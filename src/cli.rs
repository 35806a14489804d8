//! Command line front end.
//!
//! Reads one JSON document and writes the verdict as one JSON line. A full
//! form object is validated (and recorded when a store path is configured);
//! `{"field": ..., "value": ...}` runs a single on-blur check.

use crate::config::Config;
use crate::models::ContactFormData;
use crate::repositories::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::services::{ContactFormService, ContactFormServiceImpl};
use crate::validation::FormValidator;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::{debug, info};

/// Exit status for input that passed validation.
pub const EXIT_VALID: u8 = 0;

/// Exit status for input that failed at least one rule.
pub const EXIT_INVALID: u8 = 1;

/// Exit status for unreadable input, bad configuration or store failures.
pub const EXIT_ERROR: u8 = 2;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Request {
    Field(FieldCheckRequest),
    Form(ContactFormData),
}

#[derive(Debug, Deserialize)]
struct FieldCheckRequest {
    field: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct FieldCheckResponse<'a> {
    field: &'a str,
    error: Option<String>,
}

/// Handle one request read from `input`, writing the response to `output`.
///
/// Returns whether the input passed validation.
pub fn run<R: Read, W: Write>(config: &Config, mut input: R, mut output: W) -> Result<bool> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .context("Failed to read input")?;

    let request: Request = serde_json::from_str(&raw)
        .context("Input must be a contact form object or a {\"field\", \"value\"} object")?;

    let validator = FormValidator::from_config(config);

    match (request, &config.submission_store_path) {
        (Request::Field(check), _) => {
            let service = ContactFormServiceImpl::new(validator, MemoryStore::new());
            let error = service.check_field(&check.field, &check.value);
            let passed = error.is_none();
            write_json(
                &mut output,
                &FieldCheckResponse {
                    field: &check.field,
                    error,
                },
            )?;
            Ok(passed)
        }
        (Request::Form(data), Some(path)) => {
            info!("Recording accepted submissions in {}", path.display());
            submit(
                ContactFormServiceImpl::new(validator, JsonFileStore::new(path)),
                data,
                &mut output,
            )
        }
        (Request::Form(data), None) => submit(
            ContactFormServiceImpl::new(validator, MemoryStore::new()),
            data,
            &mut output,
        ),
    }
}

/// Map the outcome of [`run`] to a process exit status.
pub fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => EXIT_VALID,
        Ok(false) => EXIT_INVALID,
        Err(_) => EXIT_ERROR,
    }
}

fn submit<S: KeyValueStore, W: Write>(
    service: ContactFormServiceImpl<S>,
    data: ContactFormData,
    output: &mut W,
) -> Result<bool> {
    let outcome = service
        .submit(data)
        .context("Failed to record submission")?;
    debug!(metrics = ?service.metrics().summary(), "Submission handled");

    let result = outcome.validation();
    write_json(output, &result)?;
    Ok(result.is_valid())
}

fn write_json<T: Serialize, W: Write>(output: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *output, value).context("Failed to serialize output")?;
    writeln!(output).context("Failed to write output")?;
    Ok(())
}
