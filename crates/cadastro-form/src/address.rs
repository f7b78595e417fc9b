//! The postal-address form (`form-endereco`).
//!
//! Four fields: CEP, logradouro, número and UF. Submission is sequential
//! with early exit: the first failing rule raises a blocking alert naming
//! the problem, moves focus back to the offending field, and no further
//! rules run that cycle. Fields past the failure keep whatever validity
//! they had.

use tracing::info;

use cadastro_core::constants::MSG_ADDRESS_ACCEPTED;

use crate::error::Result;
use crate::field::{FieldId, Validity};
use crate::outcome::{Alert, SubmitOutcome};
use crate::session::FormSession;

/// The address-form fields, in form (and validation) order.
pub const ADDRESS_FIELDS: [FieldId; 4] = [
    FieldId::PostalCode,
    FieldId::Street,
    FieldId::HouseNumber,
    FieldId::StateCode,
];

/// A live address form.
///
/// # Examples
///
/// ```
/// use cadastro_form::{AddressForm, FieldId};
///
/// let mut form = AddressForm::new();
/// form.session_mut().type_text(FieldId::PostalCode, "01310100").unwrap();
/// form.session_mut().input(FieldId::Street, "Avenida Paulista").unwrap();
/// form.session_mut().type_text(FieldId::HouseNumber, "1578").unwrap();
/// form.session_mut().type_text(FieldId::StateCode, "sp").unwrap();
///
/// let outcome = form.submit().unwrap();
/// assert!(outcome.is_accepted());
/// ```
pub struct AddressForm {
    session: FormSession,
}

impl AddressForm {
    /// Create the form with its four fields and standard wiring.
    #[must_use]
    pub fn new() -> Self {
        AddressForm {
            session: FormSession::with_fields(&ADDRESS_FIELDS),
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
    /// Normalizes the masked fields first (the entries may have been set
    /// programmatically since the last keystroke), then runs the rules in
    /// field order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns a `FormError` only for structural problems; a failed rule is
    /// reported through [`SubmitOutcome::Rejected`].
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        for field in ADDRESS_FIELDS {
            self.session.state_mut().remask(field)?;
        }

        for field in ADDRESS_FIELDS {
            let validity = self.session.state_mut().evaluate(field)?;
            if validity == Validity::Invalid {
                let state = self.session.state().field(field)?;
                let message = state.error_message();
                self.session.state_mut().set_focus(field);
                info!(field = %field, "address submit rejected");
                return Ok(SubmitOutcome::Rejected(Alert { field, message }));
            }
        }

        info!("address submit accepted");
        Ok(SubmitOutcome::Accepted {
            message: MSG_ADDRESS_ACCEPTED.to_string(),
        })
    }
}

impl Default for AddressForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> AddressForm {
        let mut form = AddressForm::new();
        let session = form.session_mut();
        session.type_text(FieldId::PostalCode, "01310100").unwrap();
        session.input(FieldId::Street, "Avenida Paulista").unwrap();
        session.type_text(FieldId::HouseNumber, "1578").unwrap();
        session.type_text(FieldId::StateCode, "sp").unwrap();
        form
    }

    #[test]
    fn test_submit_accepts_complete_address() {
        let mut form = filled_form();

        let outcome = form.submit().unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                message: "Endereço cadastrado com sucesso".to_string()
            }
        );
    }

    #[test]
    fn test_first_failure_raises_alert_and_refocuses() {
        let mut form = filled_form();
        form.session_mut().input(FieldId::PostalCode, "013").unwrap();

        let outcome = form.submit().unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Alert {
                field: FieldId::PostalCode,
                message: "CEP inválido. Use o formato 00000-000.".to_string(),
            })
        );
        assert_eq!(form.session().state().focused(), Some(FieldId::PostalCode));
    }

    #[test]
    fn test_early_exit_leaves_later_fields_unevaluated() {
        let mut form = AddressForm::new();
        // Everything empty: the CEP fails first, nothing else runs.
        let outcome = form.submit().unwrap();

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));

        let state = form.session().state();
        assert_eq!(
            state.field(FieldId::PostalCode).unwrap().validity(),
            Validity::Invalid
        );
        assert_eq!(
            state.field(FieldId::Street).unwrap().validity(),
            Validity::Unevaluated
        );
        assert_eq!(
            state.field(FieldId::StateCode).unwrap().validity(),
            Validity::Unevaluated
        );
    }

    #[test]
    fn test_validation_order_is_form_order() {
        let mut form = filled_form();
        let session = form.session_mut();
        session.input(FieldId::Street, "Rua").unwrap();
        session.input(FieldId::StateCode, "").unwrap();

        // Street fails before the state code is ever looked at.
        let outcome = form.submit().unwrap();
        match outcome {
            SubmitOutcome::Rejected(alert) => assert_eq!(alert.field, FieldId::Street),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_normalizes_programmatic_entries() {
        let mut form = filled_form();
        // Bypass the input pipeline entirely; submit must re-mask.
        form.session_mut()
            .state_mut()
            .field_mut(FieldId::PostalCode)
            .unwrap()
            .value = "01310100".to_string();

        let outcome = form.submit().unwrap();

        assert!(outcome.is_accepted());
        assert_eq!(
            form.session().value(FieldId::PostalCode).unwrap(),
            "01310-100"
        );
    }
}
