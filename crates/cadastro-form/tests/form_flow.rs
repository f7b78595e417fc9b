//! End-to-end flows through masking, validation and submission.
//!
//! These tests drive complete form sessions the way a user would, one
//! keystroke at a time with focus changes and submit attempts, and check
//! the feedback surface as a whole rather than individual rules.

use cadastro_core::FieldError;
use cadastro_form::{
    ADDRESS_FIELDS, AddressForm, FieldId, REGISTRATION_FIELDS, RegistrationForm, SubmitOutcome,
    Validity,
};

#[test]
fn registration_submit_with_everything_empty() {
    let mut form = RegistrationForm::new();

    let outcome = form.submit().unwrap();

    // Every field is flagged and no success message is shown.
    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            fields: REGISTRATION_FIELDS.to_vec()
        }
    );
    assert_eq!(form.session().state().success_message(), "");
    for field in REGISTRATION_FIELDS {
        let state = form.session().state().field(field).unwrap();
        assert_eq!(state.validity(), Validity::Invalid);
        assert!(state.is_empty());
    }
}

#[test]
fn registration_submit_with_everything_valid() {
    let mut form = RegistrationForm::new();
    let session = form.session_mut();
    session.input(FieldId::Name, "Maria Clara Dias").unwrap();
    session.input(FieldId::Email, "maria@empresa.com.br").unwrap();
    session.type_text(FieldId::Phone, "1133334444").unwrap();
    session.type_text(FieldId::NationalId, "111444777 35").unwrap();
    session.type_text(FieldId::BirthDate, "29021992").unwrap();

    let outcome = form.submit().unwrap();

    assert!(outcome.is_accepted());
    assert_eq!(
        form.session().state().success_message(),
        "Formulário válido!"
    );
    for field in REGISTRATION_FIELDS {
        let state = form.session().state().field(field).unwrap();
        assert_eq!(state.validity(), Validity::Valid);
        assert_eq!(state.error_message(), "");
    }
}

#[test]
fn registration_fixing_fields_one_by_one() {
    let mut form = RegistrationForm::new();
    let session = form.session_mut();
    session.input(FieldId::Name, "Jo").unwrap();
    session.input(FieldId::Email, "maria@empresa.com.br").unwrap();
    session.type_text(FieldId::Phone, "1133334444").unwrap();
    session.type_text(FieldId::NationalId, "52998224725").unwrap();
    session.type_text(FieldId::BirthDate, "07091995").unwrap();

    let outcome = form.submit().unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            fields: vec![FieldId::Name]
        }
    );

    // The fix re-evaluates on the next submit and the form goes through.
    form.session_mut().input(FieldId::Name, "José").unwrap();
    let outcome = form.submit().unwrap();
    assert!(outcome.is_accepted());
}

#[test]
fn registration_typed_input_is_masked_as_displayed() {
    let mut form = RegistrationForm::new();
    let session = form.session_mut();

    // Typing garbage along with the digits: the mask strips it keystroke
    // by keystroke.
    session.type_text(FieldId::Phone, "11 9876x5-4321").unwrap();
    session.type_text(FieldId::NationalId, "529,982:247/25").unwrap();

    assert_eq!(session.value(FieldId::Phone).unwrap(), "(11) 98765-4321");
    assert_eq!(
        session.value(FieldId::NationalId).unwrap(),
        "529.982.247-25"
    );
}

#[test]
fn registration_wrong_checksum_blocks_only_cpf() {
    let mut form = RegistrationForm::new();
    let session = form.session_mut();
    session.input(FieldId::Name, "Maria Clara").unwrap();
    session.input(FieldId::Email, "maria@empresa.com.br").unwrap();
    session.type_text(FieldId::Phone, "1133334444").unwrap();
    session.type_text(FieldId::NationalId, "52998224726").unwrap(); // bad dv2
    session.type_text(FieldId::BirthDate, "07091995").unwrap();

    let outcome = form.submit().unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            fields: vec![FieldId::NationalId]
        }
    );
    assert_eq!(
        form.session()
            .state()
            .field(FieldId::NationalId)
            .unwrap()
            .error(),
        Some(FieldError::InvalidNationalIdChecksum)
    );
}

#[test]
fn address_submit_walks_failures_in_order() {
    let mut form = AddressForm::new();

    // First pass: empty CEP fails, focus returns there.
    let outcome = form.submit().unwrap();
    let alert = match outcome {
        SubmitOutcome::Rejected(alert) => alert,
        other => panic!("expected rejection, got {:?}", other),
    };
    assert_eq!(alert.field, FieldId::PostalCode);
    assert_eq!(alert.message, "CEP inválido. Use o formato 00000-000.");
    assert_eq!(form.session().state().focused(), Some(FieldId::PostalCode));

    // Fix the CEP; the street is the next to fail.
    form.session_mut()
        .type_text(FieldId::PostalCode, "01310100")
        .unwrap();
    let outcome = form.submit().unwrap();
    let alert = match outcome {
        SubmitOutcome::Rejected(alert) => alert,
        other => panic!("expected rejection, got {:?}", other),
    };
    assert_eq!(alert.field, FieldId::Street);

    // Fill everything and the pass completes.
    let session = form.session_mut();
    session.input(FieldId::Street, "Avenida Paulista").unwrap();
    session.type_text(FieldId::HouseNumber, "1578").unwrap();
    session.type_text(FieldId::StateCode, "sp").unwrap();

    let outcome = form.submit().unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Accepted {
            message: "Endereço cadastrado com sucesso".to_string()
        }
    );
    for field in ADDRESS_FIELDS {
        assert_eq!(
            form.session().state().field(field).unwrap().validity(),
            Validity::Valid
        );
    }
}

#[test]
fn reset_returns_both_forms_to_pristine_state() {
    let mut form = RegistrationForm::new();
    form.session_mut().input(FieldId::Name, "Jo").unwrap();
    form.submit().unwrap();

    form.session_mut().reset();

    for field in REGISTRATION_FIELDS {
        let state = form.session().state().field(field).unwrap();
        assert_eq!(state.value(), "");
        assert_eq!(state.validity(), Validity::Unevaluated);
        assert!(state.error().is_none());
    }
    assert_eq!(form.session().state().success_message(), "");
}
