//! Field identity, validity state machine and per-field state.
//!
//! # Validity States
//!
//! Every field moves through a small state machine:
//! - `Unevaluated`: no rule has run yet; the field carries no visual state
//! - `Valid`: the last evaluation passed
//! - `Invalid`: the last evaluation failed; an error message is attached
//!
//! # Valid Transitions
//!
//! - Unevaluated → Valid | Invalid (first blur or submit pass)
//! - Valid ↔ Invalid, Valid → Valid, Invalid → Invalid (re-evaluation)
//!
//! There is no terminal state, and nothing transitions *back* to
//! `Unevaluated`. Only a form reset forces that, bypassing the transition
//! rules the way a reset must.

use std::fmt;

use serde::{Deserialize, Serialize};

use cadastro_core::error::FieldError;
use cadastro_mask::MaskRule;
use cadastro_validation as validation;

use crate::error::{FormError, Result};

/// Identifies one editable field across both forms.
///
/// [`as_str`](FieldId::as_str) returns the element id the original pages
/// use, which doubles as the stable wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    // Address form
    PostalCode,
    Street,
    HouseNumber,
    StateCode,
    // Registration form
    Name,
    Email,
    Phone,
    NationalId,
    BirthDate,
}

impl FieldId {
    /// Stable identifier (the original element id).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldId::PostalCode => "cep",
            FieldId::Street => "logradouro",
            FieldId::HouseNumber => "numero",
            FieldId::StateCode => "uf",
            FieldId::Name => "nome",
            FieldId::Email => "email",
            FieldId::Phone => "telefone",
            FieldId::NationalId => "cpf",
            FieldId::BirthDate => "nascimento",
        }
    }

    /// Human-readable label, as shown in prompts and dialogs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FieldId::PostalCode => "CEP",
            FieldId::Street => "Logradouro",
            FieldId::HouseNumber => "Número",
            FieldId::StateCode => "UF",
            FieldId::Name => "Nome",
            FieldId::Email => "Email",
            FieldId::Phone => "Telefone",
            FieldId::NationalId => "CPF",
            FieldId::BirthDate => "Nascimento",
        }
    }

    /// The masking rule applied while typing, if the field has one.
    ///
    /// Free-text fields (name, email, street) return `None` and display
    /// their input unchanged.
    #[must_use]
    pub const fn mask_rule(self) -> Option<MaskRule> {
        match self {
            FieldId::PostalCode => Some(MaskRule::PostalCode),
            FieldId::HouseNumber => Some(MaskRule::HouseNumber),
            FieldId::StateCode => Some(MaskRule::StateCode),
            FieldId::Phone => Some(MaskRule::Phone),
            FieldId::NationalId => Some(MaskRule::NationalId),
            FieldId::BirthDate => Some(MaskRule::BirthDate),
            FieldId::Street | FieldId::Name | FieldId::Email => None,
        }
    }

    /// Run this field's validation rule against its masked text.
    ///
    /// # Errors
    /// Returns the [`FieldError`] describing the failed rule.
    pub fn validate(self, text: &str) -> cadastro_core::Result<()> {
        match self {
            FieldId::PostalCode => validation::validate_postal_code(text),
            FieldId::Street => validation::validate_street(text),
            FieldId::HouseNumber => validation::validate_house_number(text),
            FieldId::StateCode => validation::validate_state_code(text),
            FieldId::Name => validation::validate_name(text),
            FieldId::Email => validation::validate_email(text),
            FieldId::Phone => validation::validate_phone(text),
            FieldId::NationalId => validation::validate_national_id(text),
            FieldId::BirthDate => validation::validate_birth_date(text),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of events a field handler can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The field's text changed (a keystroke, a paste, a programmatic set).
    Input,
    /// The field lost focus.
    Blur,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Input => f.write_str("input"),
            EventKind::Blur => f.write_str("blur"),
        }
    }
}

/// Per-field validity flag.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// No rule has run against this field yet.
    #[default]
    Unevaluated,
    /// The last evaluation passed.
    Valid,
    /// The last evaluation failed.
    Invalid,
}

impl Validity {
    /// Check whether a transition to `target` is allowed.
    ///
    /// Evaluation can always land on `Valid` or `Invalid`, from any state;
    /// nothing transitions back to `Unevaluated` except a forced reset.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadastro_form::Validity;
    ///
    /// assert!(Validity::Unevaluated.can_transition_to(Validity::Invalid));
    /// assert!(Validity::Invalid.can_transition_to(Validity::Valid));
    /// assert!(!Validity::Valid.can_transition_to(Validity::Unevaluated));
    /// ```
    #[must_use]
    pub fn can_transition_to(self, target: Validity) -> bool {
        matches!(
            (self, target),
            (_, Validity::Valid) | (_, Validity::Invalid)
        )
    }

    /// Returns `true` once the field has been evaluated at least once.
    #[must_use]
    pub fn is_evaluated(self) -> bool {
        !matches!(self, Validity::Unevaluated)
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validity::Unevaluated => f.write_str("unevaluated"),
            Validity::Valid => f.write_str("valid"),
            Validity::Invalid => f.write_str("invalid"),
        }
    }
}

/// Mutable state of one field: displayed text, caret, validity flag and the
/// error attached to the last failed evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub(crate) value: String,
    pub(crate) caret: usize,
    pub(crate) validity: Validity,
    pub(crate) error: Option<FieldError>,
}

impl FieldState {
    /// Currently displayed (masked) text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Caret position, in characters.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Current validity flag.
    #[must_use]
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Error from the last failed evaluation, if the field is invalid.
    #[must_use]
    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// Message text to show next to the field; empty when there is none.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// Returns `true` when the trimmed value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Move the validity flag, enforcing the transition rules.
    ///
    /// # Errors
    /// Returns `FormError::InvalidValidityTransition` if `target` is not
    /// reachable (any attempt to move back to `Unevaluated`).
    pub fn transition_to(&mut self, target: Validity) -> Result<Validity> {
        if !self.validity.can_transition_to(target) {
            return Err(FormError::InvalidValidityTransition {
                from: self.validity,
                to: target,
            });
        }
        self.validity = target;
        Ok(target)
    }

    /// Force the field back to its initial state.
    ///
    /// Clears text, caret and error, and returns the validity flag to
    /// `Unevaluated` outside the normal transition rules.
    pub fn reset(&mut self) {
        self.value.clear();
        self.caret = 0;
        self.validity = Validity::Unevaluated;
        self.error = None;
    }
}
