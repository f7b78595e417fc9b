//! The personal-registration form (`cadastroForm`).
//!
//! Five fields: nome, email, telefone, CPF and nascimento. Submission
//! re-evaluates every field regardless of earlier failures, so each field
//! shows its own inline error, and goes through only when all of them
//! pass and none is empty. There is no interruptive dialog here; feedback
//! is the per-field message plus a single success line.

use tracing::info;

use cadastro_core::constants::MSG_REGISTRATION_ACCEPTED;

use crate::error::Result;
use crate::field::{EventKind, FieldId, Validity};
use crate::outcome::SubmitOutcome;
use crate::session::FormSession;

/// The registration-form fields, in form order.
pub const REGISTRATION_FIELDS: [FieldId; 5] = [
    FieldId::Name,
    FieldId::Email,
    FieldId::Phone,
    FieldId::NationalId,
    FieldId::BirthDate,
];

/// A live registration form.
///
/// # Examples
///
/// ```
/// use cadastro_form::{FieldId, RegistrationForm};
///
/// let mut form = RegistrationForm::new();
/// form.session_mut().input(FieldId::Name, "Ana Souza").unwrap();
/// form.session_mut().input(FieldId::Email, "ana@example.com").unwrap();
/// form.session_mut().type_text(FieldId::Phone, "11987654321").unwrap();
/// form.session_mut().type_text(FieldId::NationalId, "52998224725").unwrap();
/// form.session_mut().type_text(FieldId::BirthDate, "07091995").unwrap();
///
/// let outcome = form.submit().unwrap();
/// assert!(outcome.is_accepted());
/// assert_eq!(form.session().state().success_message(), "Formulário válido!");
/// ```
pub struct RegistrationForm {
    session: FormSession,
}

impl RegistrationForm {
    /// Create the form with its five fields and standard wiring.
    #[must_use]
    pub fn new() -> Self {
        RegistrationForm {
            session: FormSession::with_fields(&REGISTRATION_FIELDS),
        }
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Mutable access to the underlying session.
    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    /// Attempt submission.
    ///
    /// Clears the success message, fires `Blur` on every field so each one
    /// re-evaluates and refreshes its inline feedback, then blocks if any
    /// field is invalid or empty. The success message is set only when the
    /// whole form passes.
    ///
    /// # Errors
    /// Returns a `FormError` only for structural problems; failed rules are
    /// reported per field and through [`SubmitOutcome::Blocked`].
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        self.session.state_mut().clear_success_message();

        for field in REGISTRATION_FIELDS {
            self.session.dispatch(field, EventKind::Blur)?;
        }

        let mut offending = Vec::new();
        for field in REGISTRATION_FIELDS {
            let state = self.session.state().field(field)?;
            if state.validity() == Validity::Invalid || state.is_empty() {
                offending.push(field);
            }
        }

        if !offending.is_empty() {
            info!(fields = offending.len(), "registration submit blocked");
            return Ok(SubmitOutcome::Blocked { fields: offending });
        }

        self.session
            .state_mut()
            .set_success_message(MSG_REGISTRATION_ACCEPTED);
        info!("registration submit accepted");
        Ok(SubmitOutcome::Accepted {
            message: MSG_REGISTRATION_ACCEPTED.to_string(),
        })
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
