//! Contact form validation engine.
//!
//! - **rules**: per-field predicates and their typed failures
//! - **form_validator**: whole-form and on-blur validation with configurable minimums
//!
//! Everything here is pure: no I/O, no shared mutable state, and no panics
//! on any input.

pub mod form_validator;
pub mod rules;

pub use form_validator::{validate_field, validate_form, FormValidator};
pub use rules::{
    validate_email, validate_message, validate_name, validate_phone,
    DEFAULT_MESSAGE_MIN_LENGTH, DEFAULT_NAME_MIN_LENGTH,
};
