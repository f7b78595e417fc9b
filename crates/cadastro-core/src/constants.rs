//! Format limits and display messages shared across the Cadastro crates.
//!
//! These constants define the canonical shape of every masked field and the
//! user-visible feedback strings. The masking engine, the validators and the
//! form controller all read from here so the three layers can never disagree
//! about a length cap or a message text.
//!
//! # Field Formats
//!
//! | Field | Raw digits | Canonical display |
//! |-------|-----------|-------------------|
//! | CEP (postal code) | 8 | `01310-100` |
//! | Telefone (phone) | 10-11 | `(11) 3333-4444` / `(11) 98765-4321` |
//! | CPF (national ID) | 11 | `529.982.247-25` |
//! | Nascimento (birth date) | 8 | `07/09/1995` |
//! | UF (state code) | n/a | `SP` (2 uppercase letters) |
//!
//! Display messages are kept in Brazilian Portuguese: they are shown
//! verbatim to the person filling the form. Per-field failure messages are
//! not listed here; they are the `Display` text of
//! [`FieldError`](crate::error::FieldError).

// ============================================================================
// CPF (national ID)
// ============================================================================

/// Total digit count of a CPF, including both check digits.
pub const CPF_LENGTH: usize = 11;

/// Digit count of the CPF base, before the two check digits.
///
/// The first check digit is computed over these 9 digits; the second over
/// the 9 digits plus the first check digit.
pub const CPF_BASE_LENGTH: usize = 9;

// ============================================================================
// CEP (postal code)
// ============================================================================

/// Total digit count of a CEP.
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Digits before the hyphen in the canonical `00000-000` display form.
pub const POSTAL_CODE_PREFIX: usize = 5;

// ============================================================================
// Telefone (phone)
// ============================================================================

/// Minimum digit count for a complete phone number (landline with area
/// code).
pub const PHONE_MIN_DIGITS: usize = 10;

/// Maximum digit count for a phone number (mobile with the extra leading 9).
pub const PHONE_MAX_DIGITS: usize = 11;

/// Digits in the parenthesized area-code prefix.
pub const AREA_CODE_DIGITS: usize = 2;

// ============================================================================
// Nascimento (birth date)
// ============================================================================

/// Digit count of a complete `DD/MM/YYYY` date.
pub const BIRTH_DATE_DIGITS: usize = 8;

/// Minimum age, in whole years, accepted by the registration form.
pub const ADULT_AGE: i32 = 18;

// ============================================================================
// Free-text minimums
// ============================================================================

/// Letters in a state-code (UF) abbreviation.
pub const STATE_CODE_LENGTH: usize = 2;

/// Minimum trimmed length of the name field.
pub const MIN_NAME_LENGTH: usize = 3;

/// Minimum trimmed length of the street (logradouro) field.
pub const MIN_STREET_LENGTH: usize = 5;

// ============================================================================
// Success messages
// ============================================================================

/// Shown by the registration form when every field validates.
///
/// # Value: "Formulário válido!"
pub const MSG_REGISTRATION_ACCEPTED: &str = "Formulário válido!";

/// Shown by the address form when the sequential validation pass completes.
///
/// # Value: "Endereço cadastrado com sucesso"
pub const MSG_ADDRESS_ACCEPTED: &str = "Endereço cadastrado com sucesso";
