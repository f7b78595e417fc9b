//! Result of a submission attempt.

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Interruptive dialog raised by the address form: the message to show and
/// the field that should regain focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Field whose rule failed; focus returns here.
    pub field: FieldId,
    /// Blocking message naming what is wrong.
    pub message: String,
}

/// Outcome of one submit pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Every rule passed; submission goes through with a success message.
    Accepted {
        /// The success message shown to the user.
        message: String,
    },
    /// Address form: the first failing rule raised a blocking alert and
    /// stopped the pass.
    Rejected(Alert),
    /// Registration form: one or more fields are invalid or empty; the
    /// form stays editable and no success message is shown.
    Blocked {
        /// Fields that failed or were left empty, in form order.
        fields: Vec<FieldId>,
    },
}

impl SubmitOutcome {
    /// Returns `true` when the submission went through.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}
