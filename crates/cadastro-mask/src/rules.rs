//! Per-field masking rules.
//!
//! Each rule follows the same recipe: drop every character outside the
//! field's accepted set, cap the raw length, then lay the remainder out in
//! the canonical display shape. Partial input gets partial formatting (a
//! CPF of 4 digits renders as `123.4`, a phone of 3 digits as `(12) 3`),
//! so the display is always consistent with what has been typed so far.

use cadastro_core::constants::{
    AREA_CODE_DIGITS, BIRTH_DATE_DIGITS, CPF_LENGTH, PHONE_MAX_DIGITS, POSTAL_CODE_DIGITS,
    POSTAL_CODE_PREFIX, STATE_CODE_LENGTH,
};
use serde::{Deserialize, Serialize};

/// Masking rule for one field kind.
///
/// Fields without a rule (name, email, street) take free text and are not
/// listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskRule {
    /// CEP: 8 digits, hyphen after the 5th (`01310-100`).
    PostalCode,
    /// UF: 2 uppercase letters.
    StateCode,
    /// House number: digits only, no cap.
    HouseNumber,
    /// Phone: `(AA) NNNN-NNNN` or `(AA) NNNNN-NNNN`.
    Phone,
    /// CPF: `NNN.NNN.NNN-NN`.
    NationalId,
    /// Birth date: `DD/MM/YYYY`.
    BirthDate,
}

impl MaskRule {
    /// Apply this rule to arbitrary input.
    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            MaskRule::PostalCode => postal_code(input),
            MaskRule::StateCode => state_code(input),
            MaskRule::HouseNumber => house_number(input),
            MaskRule::Phone => phone(input),
            MaskRule::NationalId => national_id(input),
            MaskRule::BirthDate => birth_date(input),
        }
    }
}

/// Strip everything that is not an ASCII digit.
///
/// # Examples
///
/// ```
/// use cadastro_mask::only_digits;
///
/// assert_eq!(only_digits("(11) 98765-4321"), "11987654321");
/// assert_eq!(only_digits("abc"), "");
/// ```
#[must_use]
pub fn only_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Mask a CEP: digits capped at 8, hyphen after the 5th.
///
/// Up to 5 digits the raw digits are shown as-is; the hyphen only appears
/// once a sixth digit exists.
///
/// # Examples
///
/// ```
/// use cadastro_mask::postal_code;
///
/// assert_eq!(postal_code("01310100"), "01310-100");
/// assert_eq!(postal_code("013"), "013");
/// assert_eq!(postal_code("01310-1009999"), "01310-100");
/// ```
#[must_use]
pub fn postal_code(input: &str) -> String {
    let mut digits = only_digits(input);
    digits.truncate(POSTAL_CODE_DIGITS);
    if digits.len() <= POSTAL_CODE_PREFIX {
        return digits;
    }
    format!(
        "{}-{}",
        &digits[..POSTAL_CODE_PREFIX],
        &digits[POSTAL_CODE_PREFIX..]
    )
}

/// Mask a UF: letters only, uppercased, capped at 2.
///
/// Digits and punctuation never consume a slot: `sp1` keeps both letters.
///
/// # Examples
///
/// ```
/// use cadastro_mask::state_code;
///
/// assert_eq!(state_code("sp1"), "SP");
/// assert_eq!(state_code("r"), "R");
/// assert_eq!(state_code("12"), "");
/// ```
#[must_use]
pub fn state_code(input: &str) -> String {
    let mut letters: String = input
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(STATE_CODE_LENGTH)
        .collect();
    letters.make_ascii_uppercase();
    letters
}

/// Mask a house number: digits only, no length cap.
#[must_use]
pub fn house_number(input: &str) -> String {
    only_digits(input)
}

/// Mask a phone number: digits capped at 11, area code parenthesized,
/// hyphen before the final 4 digits.
///
/// With 10 or fewer digits the local part splits 4-4; an 11th digit shifts
/// the split to 5-4 for mobile numbers. One or two digits stay raw; the
/// parentheses only appear once a third digit exists.
///
/// # Examples
///
/// ```
/// use cadastro_mask::phone;
///
/// assert_eq!(phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(phone("1133334444"), "(11) 3333-4444");
/// assert_eq!(phone("119"), "(11) 9");
/// assert_eq!(phone("11"), "11");
/// ```
#[must_use]
pub fn phone(input: &str) -> String {
    let mut digits = only_digits(input);
    digits.truncate(PHONE_MAX_DIGITS);
    if digits.len() <= AREA_CODE_DIGITS {
        return digits;
    }

    let (area, rest) = digits.split_at(AREA_CODE_DIGITS);
    let split = if digits.len() == PHONE_MAX_DIGITS { 5 } else { 4 };
    if rest.len() <= split {
        format!("({area}) {rest}")
    } else {
        format!("({area}) {}-{}", &rest[..split], &rest[split..])
    }
}

/// Mask a CPF: digits capped at 11, dots after the 3rd and 6th, hyphen
/// after the 9th.
///
/// Separators appear as soon as there is a digit to follow them: 4 digits
/// render `123.4`, 10 digits `123.456.789-0`.
///
/// # Examples
///
/// ```
/// use cadastro_mask::national_id;
///
/// assert_eq!(national_id("52998224725"), "529.982.247-25");
/// assert_eq!(national_id("1234"), "123.4");
/// assert_eq!(national_id("123456789"), "123.456.789");
/// ```
#[must_use]
pub fn national_id(input: &str) -> String {
    let mut digits = only_digits(input);
    digits.truncate(CPF_LENGTH);
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

/// Mask a birth date: digits capped at 8, slashes after the 2nd and 4th.
///
/// # Examples
///
/// ```
/// use cadastro_mask::birth_date;
///
/// assert_eq!(birth_date("29022000"), "29/02/2000");
/// assert_eq!(birth_date("290"), "29/0");
/// assert_eq!(birth_date("29"), "29");
/// ```
#[must_use]
pub fn birth_date(input: &str) -> String {
    let mut digits = only_digits(input);
    digits.truncate(BIRTH_DATE_DIGITS);
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}
