//! Masking engine for the Cadastro forms.
//!
//! Every rule is a pure text→text transformation: strip the characters the
//! field does not accept, cap the raw length, then insert the canonical
//! separators. Rules are idempotent (feeding a masked value back through
//! its rule returns it unchanged), which lets the caller re-mask on every
//! keystroke without tracking what was already formatted.
//!
//! # Examples
//!
//! ```
//! use cadastro_mask::MaskRule;
//!
//! assert_eq!(MaskRule::PostalCode.apply("01310100"), "01310-100");
//! assert_eq!(MaskRule::Phone.apply("11987654321"), "(11) 98765-4321");
//! assert_eq!(MaskRule::NationalId.apply("529.982.247-25"), "529.982.247-25");
//! assert_eq!(MaskRule::StateCode.apply("sp1"), "SP");
//! ```

pub mod caret;
pub mod rules;

pub use caret::{MaskOutcome, adjusted_caret, apply_with_caret};
pub use rules::{
    MaskRule, birth_date, house_number, national_id, only_digits, phone, postal_code, state_code,
};
