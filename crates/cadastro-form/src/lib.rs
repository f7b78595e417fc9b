//! Form controller for the Cadastro toolkit.
//!
//! This crate wires the masking engine and the validators to a form
//! session: an explicit field registry, a per-field validity state machine
//! and a dispatch table of `(field, event)` handlers that run synchronously
//! in registration order. On top of the session sit the two concrete
//! forms: [`AddressForm`] with its sequential, early-exit submit, and
//! [`RegistrationForm`] with its evaluate-everything submit and single
//! success message.
//!
//! # Examples
//!
//! ```
//! use cadastro_form::{FieldId, RegistrationForm, Validity};
//!
//! let mut form = RegistrationForm::new();
//! form.session_mut().type_text(FieldId::NationalId, "52998224725").unwrap();
//! form.session_mut().blur(FieldId::NationalId).unwrap();
//!
//! let cpf = form.session().state().field(FieldId::NationalId).unwrap();
//! assert_eq!(cpf.value(), "529.982.247-25");
//! assert_eq!(cpf.validity(), Validity::Valid);
//! ```

pub mod address;
pub mod error;
pub mod field;
pub mod outcome;
pub mod registration;
pub mod session;

pub use address::{ADDRESS_FIELDS, AddressForm};
pub use error::{FormError, Result};
pub use field::{EventKind, FieldId, FieldState, Validity};
pub use outcome::{Alert, SubmitOutcome};
pub use registration::{REGISTRATION_FIELDS, RegistrationForm};
pub use session::{FormSession, Handler, SessionId, SessionState};
