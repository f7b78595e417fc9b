//! Best-effort caret repositioning for masked edits.
//!
//! When a mask inserts or removes separator characters, the text length
//! changes and the caret drifts relative to the digit the user was editing.
//! The adjustment here mirrors what the forms always did: shift the caret
//! right by however much the text grew, never left, and clamp to the new
//! length. When a single edit inserts more than one separator the caret can
//! land one position off; accepted degraded behavior, not a correctness
//! requirement.

use crate::rules::MaskRule;

/// Result of masking one edit: the canonical text plus where the caret
/// should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutcome {
    /// Canonical masked text.
    pub text: String,
    /// Caret position in characters, clamped to `text`.
    pub caret: usize,
}

/// Apply `rule` to `text` and reposition the caret that was at `caret`
/// (in characters) before the edit.
///
/// # Examples
///
/// ```
/// use cadastro_mask::{MaskRule, apply_with_caret};
///
/// // Typing the 6th CEP digit inserts the hyphen; the caret stays after
/// // the digit that was just typed.
/// let outcome = apply_with_caret(MaskRule::PostalCode, "013101", 6);
/// assert_eq!(outcome.text, "01310-1");
/// assert_eq!(outcome.caret, 7);
/// ```
#[must_use]
pub fn apply_with_caret(rule: MaskRule, text: &str, caret: usize) -> MaskOutcome {
    let masked = rule.apply(text);
    let old_len = text.chars().count();
    let new_len = masked.chars().count();
    MaskOutcome {
        caret: adjusted_caret(caret, old_len, new_len),
        text: masked,
    }
}

/// Shift a caret by the net growth of the text, clamped to the new length.
///
/// Shrinking text does not pull the caret left beyond the clamp; this keeps
/// the caret stable while separators are stripped and re-inserted around
/// it.
#[must_use]
pub fn adjusted_caret(caret: usize, old_len: usize, new_len: usize) -> usize {
    let growth = new_len.saturating_sub(old_len);
    (caret + growth).min(new_len)
}
