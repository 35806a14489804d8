//! Application service layer.
//!
//! Services sit between a caller (UI controller, CLI) and the pure
//! validator and storage pieces, wiring validation to the submission log.

mod contact_form_service;

pub use contact_form_service::{ContactFormService, ContactFormServiceImpl, SubmitOutcome};
