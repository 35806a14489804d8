//! Domain types and patterns.
//!
//! The email and phone patterns, the field identifiers used by on-blur
//! validation, and the typed rule violations whose text becomes the
//! user-facing error messages.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;

pub use email::is_valid_email;
pub use errors::FieldError;
pub use field::FieldId;
pub use phone::is_valid_phone;
