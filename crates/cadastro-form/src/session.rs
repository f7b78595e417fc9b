//! Form session: the field registry and the event dispatch table.
//!
//! A [`FormSession`] owns an explicit map from [`FieldId`] to
//! [`FieldState`] (built once at construction, passed to every operation
//! by reference, never looked up through ambient globals) plus a dispatch
//! table of handlers keyed by `(field, event kind)`. Handlers run
//! synchronously, in registration order, to completion, inside the event
//! that triggered them; there is no queue and no reentrancy.
//!
//! Construction installs the standard wiring the forms rely on:
//! - `Input` on a masked field re-applies its mask and repositions the
//!   caret
//! - `Blur` on any field runs its validator and records the validity flag
//!
//! # Thread Safety
//!
//! This struct is not thread-safe by design: the whole pipeline is
//! single-threaded and event-driven, and every pass completes before
//! control returns to the caller.
//!
//! # Examples
//!
//! ```
//! use cadastro_form::{FieldId, FormSession, Validity};
//!
//! let mut session = FormSession::with_fields(&[FieldId::PostalCode]);
//!
//! session.type_text(FieldId::PostalCode, "01310100").unwrap();
//! assert_eq!(session.value(FieldId::PostalCode).unwrap(), "01310-100");
//!
//! session.blur(FieldId::PostalCode).unwrap();
//! let state = session.state().field(FieldId::PostalCode).unwrap();
//! assert_eq!(state.validity(), Validity::Valid);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use cadastro_mask::apply_with_caret;

use crate::error::{FormError, Result};
use crate::field::{EventKind, FieldId, FieldState, Validity};

/// Unique identifier of one form session, carried in tracing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered event handler.
///
/// Handlers receive the field the event fired on and mutable access to the
/// session state. They run synchronously in registration order; returning
/// an error aborts the rest of the dispatch for that event.
pub type Handler = Box<dyn Fn(FieldId, &mut SessionState) -> Result<()>>;

/// Everything handlers may read and mutate: the field registry, the focus
/// marker and the session-level success message.
#[derive(Debug, Default)]
pub struct SessionState {
    fields: BTreeMap<FieldId, FieldState>,
    focused: Option<FieldId>,
    success_message: String,
}

impl SessionState {
    fn new(fields: &[FieldId]) -> Self {
        SessionState {
            fields: fields.iter().map(|&f| (f, FieldState::default())).collect(),
            focused: None,
            success_message: String::new(),
        }
    }

    /// Get a field's state.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session.
    pub fn field(&self, field: FieldId) -> Result<&FieldState> {
        self.fields.get(&field).ok_or(FormError::UnknownField(field))
    }

    /// Get mutable access to a field's state.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session.
    pub fn field_mut(&mut self, field: FieldId) -> Result<&mut FieldState> {
        self.fields
            .get_mut(&field)
            .ok_or(FormError::UnknownField(field))
    }

    /// Iterate over all registered fields and their state.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &FieldState)> {
        self.fields.iter().map(|(&id, state)| (id, state))
    }

    /// Returns `true` if the field is registered in this session.
    #[must_use]
    pub fn contains(&self, field: FieldId) -> bool {
        self.fields.contains_key(&field)
    }

    /// Re-apply the field's mask to its current text, repositioning the
    /// caret. Fields without a mask rule are left untouched.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session.
    pub fn remask(&mut self, field: FieldId) -> Result<()> {
        let Some(rule) = field.mask_rule() else {
            return Ok(());
        };
        let state = self.field_mut(field)?;
        let outcome = apply_with_caret(rule, &state.value, state.caret);
        trace!(field = %field, from = %state.value, to = %outcome.text, "masked");
        state.value = outcome.text;
        state.caret = outcome.caret;
        Ok(())
    }

    /// Run the field's validator against its current (masked) text and
    /// record the resulting validity flag and error.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session.
    pub fn evaluate(&mut self, field: FieldId) -> Result<Validity> {
        let outcome = field.validate(&self.field(field)?.value);
        let target = if outcome.is_ok() {
            Validity::Valid
        } else {
            Validity::Invalid
        };

        let state = self.field_mut(field)?;
        state.transition_to(target)?;
        state.error = outcome.err();
        debug!(field = %field, validity = %target, "field evaluated");
        Ok(target)
    }

    /// Field currently holding focus, if any.
    #[must_use]
    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    /// Move focus to a field (used to return the user to a failing field).
    pub fn set_focus(&mut self, field: FieldId) {
        self.focused = Some(field);
    }

    /// Session-level success message; empty while nothing succeeded.
    #[must_use]
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Set the session-level success message.
    pub fn set_success_message(&mut self, message: &str) {
        self.success_message = message.to_string();
    }

    /// Clear the session-level success message.
    pub fn clear_success_message(&mut self) {
        self.success_message.clear();
    }
}

/// One live form: field registry, dispatch table, feedback state.
pub struct FormSession {
    id: SessionId,
    state: SessionState,
    handlers: BTreeMap<(FieldId, EventKind), Vec<Handler>>,
}

impl FormSession {
    /// Create a session over the given fields with the standard wiring
    /// installed: mask-on-input for masked fields, validate-on-blur for
    /// every field.
    #[must_use]
    pub fn with_fields(fields: &[FieldId]) -> Self {
        let mut session = FormSession {
            id: SessionId::new(),
            state: SessionState::new(fields),
            handlers: BTreeMap::new(),
        };

        for &field in fields {
            if field.mask_rule().is_some() {
                session.register_handler(
                    field,
                    EventKind::Input,
                    Box::new(|f, state| state.remask(f)),
                );
            }
            session.register_handler(
                field,
                EventKind::Blur,
                Box::new(|f, state| state.evaluate(f).map(|_| ())),
            );
        }

        debug!(session = %session.id, fields = fields.len(), "session created");
        session
    }

    /// This session's identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Read access to the session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access to the session state.
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Append a handler for `(field, event)`; handlers run in the order
    /// they were registered.
    pub fn register_handler(&mut self, field: FieldId, event: EventKind, handler: Handler) {
        self.handlers.entry((field, event)).or_default().push(handler);
    }

    /// Fire an event, running its handlers synchronously in registration
    /// order.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session, or the first error a handler returns.
    pub fn dispatch(&mut self, field: FieldId, event: EventKind) -> Result<()> {
        if !self.state.contains(field) {
            return Err(FormError::UnknownField(field));
        }
        debug!(session = %self.id, field = %field, event = %event, "dispatch");

        if let Some(list) = self.handlers.get(&(field, event)) {
            for handler in list {
                handler(field, &mut self.state)?;
            }
        }
        Ok(())
    }

    /// Replace a field's text, as an editor would after one edit, and fire
    /// `Input`. The caret lands at the end of the new text before masking
    /// adjusts it.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session.
    pub fn input(&mut self, field: FieldId, text: &str) -> Result<()> {
        {
            let state = self.state.field_mut(field)?;
            state.value = text.to_string();
            state.caret = text.chars().count();
        }
        self.dispatch(field, EventKind::Input)
    }

    /// Simulate typing: append the characters one at a time, firing
    /// `Input` after each, exactly like a user at the keyboard.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session.
    pub fn type_text(&mut self, field: FieldId, text: &str) -> Result<()> {
        for ch in text.chars() {
            let mut next = self.state.field(field)?.value().to_string();
            next.push(ch);
            self.input(field, &next)?;
        }
        Ok(())
    }

    /// Fire `Blur` on a field (focus loss).
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session.
    pub fn blur(&mut self, field: FieldId) -> Result<()> {
        self.dispatch(field, EventKind::Blur)
    }

    /// Current displayed text of a field.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if the field is not part of this
    /// session.
    pub fn value(&self, field: FieldId) -> Result<&str> {
        Ok(self.state.field(field)?.value())
    }

    /// Manual form reset: every field back to empty and `Unevaluated`,
    /// focus and success message cleared.
    pub fn reset(&mut self) {
        for state in self.state.fields.values_mut() {
            state.reset();
        }
        self.state.focused = None;
        self.state.success_message.clear();
        debug!(session = %self.id, "session reset");
    }
}
