//! Field validators for the Cadastro forms.
//!
//! Each validator is a pure predicate over the **masked** text of one
//! field, never the pre-mask raw input, returning `Ok(())` or the
//! [`FieldError`](cadastro_core::FieldError) that names what is wrong. The
//! form controller turns these outcomes into per-field feedback; nothing
//! here touches presentation.

pub mod rules;

pub use rules::{
    validate_birth_date, validate_birth_date_on, validate_email, validate_house_number,
    validate_name, validate_national_id, validate_phone, validate_postal_code,
    validate_state_code, validate_street,
};
