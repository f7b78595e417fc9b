use thiserror::Error;

use crate::field::{FieldId, Validity};

/// Structural failure inside the form controller.
///
/// These are programming or wiring errors, not validation outcomes: a
/// failed field rule is a [`FieldError`](cadastro_core::FieldError) stored
/// on the field, never a `FormError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Field not registered in this session: {0}")]
    UnknownField(FieldId),

    #[error("Invalid validity transition from {from} to {to}")]
    InvalidValidityTransition { from: Validity, to: Validity },
}

pub type Result<T> = std::result::Result<T, FormError>;
