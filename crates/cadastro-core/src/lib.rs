//! Shared types, constants and the field-error taxonomy for the Cadastro
//! form toolkit.
//!
//! Everything that more than one crate needs lives here: the validated
//! value types (CPF, CEP, phone, UF, birth date), the per-field error
//! taxonomy with its user-visible messages, and the format limits the
//! masking and validation layers agree on.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{FieldError, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
