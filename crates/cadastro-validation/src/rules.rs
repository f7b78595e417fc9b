//! Per-field validation rules.
//!
//! Validators take the masked field text and answer pass/fail. They are
//! deliberately shaped like the forms they serve: the email check is loose
//! (an `@` with something on both sides and a dotted domain, not RFC
//! validation), the state code only checks its shape, and the phone rule
//! counts digits rather than consulting a numbering plan.

use cadastro_core::{
    BirthDate, Cpf, Result,
    constants::{MIN_NAME_LENGTH, MIN_STREET_LENGTH, PHONE_MIN_DIGITS, STATE_CODE_LENGTH},
    error::FieldError,
};
use cadastro_mask::only_digits;
use chrono::{Local, NaiveDate};

/// Validate a masked CEP: exactly `00000-000`.
///
/// # Errors
/// Returns `FieldError::MalformedPostalCode` for any other shape, including
/// bare digits without the hyphen.
///
/// # Examples
///
/// ```
/// use cadastro_validation::validate_postal_code;
///
/// assert!(validate_postal_code("01310-100").is_ok());
/// assert!(validate_postal_code("01310100").is_err());
/// ```
pub fn validate_postal_code(text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 9
        && bytes[5] == b'-'
        && bytes[..5].iter().all(u8::is_ascii_digit)
        && bytes[6..].iter().all(u8::is_ascii_digit);
    if well_formed {
        Ok(())
    } else {
        Err(FieldError::MalformedPostalCode)
    }
}

/// Validate a street line: trimmed length of at least 5 characters.
///
/// # Errors
/// Returns `FieldError::StreetTooShort` otherwise.
pub fn validate_street(text: &str) -> Result<()> {
    if text.trim().chars().count() >= MIN_STREET_LENGTH {
        Ok(())
    } else {
        Err(FieldError::StreetTooShort)
    }
}

/// Validate a house number: non-empty, digits only.
///
/// # Errors
/// Returns `FieldError::NonNumericHouseNumber` otherwise.
pub fn validate_house_number(text: &str) -> Result<()> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::NonNumericHouseNumber)
    }
}

/// Validate a UF: exactly 2 uppercase ASCII letters.
///
/// # Errors
/// Returns `FieldError::InvalidStateCode` otherwise.
pub fn validate_state_code(text: &str) -> Result<()> {
    if text.len() == STATE_CODE_LENGTH && text.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(FieldError::InvalidStateCode)
    }
}

/// Validate a name: trimmed length of at least 3 characters.
///
/// # Errors
/// Returns `FieldError::NameTooShort` otherwise.
pub fn validate_name(text: &str) -> Result<()> {
    if text.trim().chars().count() >= MIN_NAME_LENGTH {
        Ok(())
    } else {
        Err(FieldError::NameTooShort)
    }
}

/// Validate an email, loosely.
///
/// The trimmed text must contain an `@` with at least one character on each
/// side, and the part after the last `@` must contain a dot. This matches
/// the form's documented contract; it is intentionally not an RFC 5322
/// check.
///
/// # Errors
/// Returns `FieldError::MalformedEmail` otherwise.
///
/// # Examples
///
/// ```
/// use cadastro_validation::validate_email;
///
/// assert!(validate_email("ana@example.com").is_ok());
/// assert!(validate_email("ana@example").is_err());
/// assert!(validate_email("@example.com").is_err());
/// ```
pub fn validate_email(text: &str) -> Result<()> {
    let trimmed = text.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            if domain.contains('.') {
                Ok(())
            } else {
                Err(FieldError::MalformedEmail)
            }
        }
        _ => Err(FieldError::MalformedEmail),
    }
}

/// Validate a phone: at least 10 digits once the mask is stripped.
///
/// The mask already caps input at 11 digits, so only the lower bound is
/// checked here.
///
/// # Errors
/// Returns `FieldError::PhoneTooShort` otherwise.
pub fn validate_phone(text: &str) -> Result<()> {
    if only_digits(text).len() >= PHONE_MIN_DIGITS {
        Ok(())
    } else {
        Err(FieldError::PhoneTooShort)
    }
}

/// Validate a CPF: 11 digits, not all identical, both check digits correct.
///
/// # Errors
/// Returns `FieldError::InvalidNationalIdChecksum` otherwise.
pub fn validate_national_id(text: &str) -> Result<()> {
    Cpf::new(text).map(|_| ())
}

/// Validate a birth date against the current local date.
///
/// # Errors
/// Returns `FieldError::InvalidCalendarDate` if the text is not a real
/// `DD/MM/YYYY` date, or `FieldError::UnderAge` if the age is below 18.
pub fn validate_birth_date(text: &str) -> Result<()> {
    validate_birth_date_on(text, Local::now().date_naive())
}

/// Validate a birth date against an explicit evaluation date.
///
/// Split out from [`validate_birth_date`] so the age gate can be tested
/// against a fixed date.
///
/// # Errors
/// Same as [`validate_birth_date`].
pub fn validate_birth_date_on(text: &str, today: NaiveDate) -> Result<()> {
    let date = BirthDate::parse(text)?;
    if date.is_adult_on(today) {
        Ok(())
    } else {
        Err(FieldError::UnderAge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("01310-100", true)]
    #[case("00000-000", true)]
    #[case("01310100", false)] // missing hyphen
    #[case("0131-0100", false)] // hyphen misplaced
    #[case("01310-10", false)]
    #[case("o1310-100", false)]
    #[case("", false)]
    fn test_postal_code(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_postal_code(input).is_ok(), ok);
    }

    #[rstest]
    #[case("Avenida Paulista", true)]
    #[case("Rua A", true)] // exactly 5 after trim
    #[case("  Rua A  ", true)]
    #[case("Rua", false)]
    #[case("    ", false)]
    #[case("", false)]
    fn test_street(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_street(input).is_ok(), ok);
    }

    #[rstest]
    #[case("1", true)]
    #[case("1024", true)]
    #[case("", false)]
    #[case("12B", false)]
    #[case("12 ", false)]
    fn test_house_number(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_house_number(input).is_ok(), ok);
    }

    #[rstest]
    #[case("SP", true)]
    #[case("RJ", true)]
    #[case("sp", false)] // lowercase never passes; masking uppercases
    #[case("S", false)]
    #[case("SPX", false)]
    #[case("S1", false)]
    #[case("", false)]
    fn test_state_code(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_state_code(input).is_ok(), ok);
    }

    #[rstest]
    #[case("Ana", true)]
    #[case("  Jo  ", false)]
    #[case("Jo", false)]
    #[case("", false)]
    fn test_name(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_name(input).is_ok(), ok);
    }

    #[rstest]
    #[case("ana@example.com", true)]
    #[case("  ana@example.com  ", true)]
    #[case("a@b.c", true)]
    #[case("first.last@sub.example.com.br", true)]
    #[case("ana@example", false)] // no dot in domain
    #[case("ana.example.com", false)] // no @
    #[case("@example.com", false)] // empty local part
    #[case("ana@", false)] // empty domain
    #[case("", false)]
    fn test_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_email(input).is_ok(), ok);
    }

    #[test]
    fn test_email_uses_last_at_sign() {
        // The domain is whatever follows the last @.
        assert!(validate_email("a@b@example.com").is_ok());
        assert!(validate_email("a@example.com@b").is_err());
    }

    #[rstest]
    #[case("(11) 3333-4444", true)]
    #[case("(11) 98765-4321", true)]
    #[case("1133334444", true)] // unmasked but complete
    #[case("(11) 3333-444", false)] // 9 digits
    #[case("", false)]
    fn test_phone(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_phone(input).is_ok(), ok);
    }

    #[rstest]
    #[case("529.982.247-25", true)]
    #[case("52998224725", true)]
    #[case("111.444.777-35", true)]
    #[case("529.982.247-24", false)] // flipped final digit
    #[case("111.111.111-11", false)] // repeated digits
    #[case("529.982.247-2", false)]
    #[case("", false)]
    fn test_national_id(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_national_id(input).is_ok(), ok);
    }

    #[test]
    fn test_birth_date_calendar_and_age() {
        let today = chrono::NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();

        // Real dates, adult.
        assert!(validate_birth_date_on("29/02/2000", today).is_ok());
        assert!(validate_birth_date_on("15/06/2002", today).is_ok()); // 18 today

        // Invalid calendar dates.
        assert_eq!(
            validate_birth_date_on("29/02/2001", today),
            Err(FieldError::InvalidCalendarDate)
        );
        assert_eq!(
            validate_birth_date_on("31/04/2020", today),
            Err(FieldError::InvalidCalendarDate)
        );

        // Real date, one day short of 18.
        assert_eq!(
            validate_birth_date_on("16/06/2002", today),
            Err(FieldError::UnderAge)
        );
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = validate_postal_code("013").unwrap_err();
        assert_eq!(err.to_string(), "CEP inválido. Use o formato 00000-000.");

        let err = validate_birth_date_on("31/04/2020", chrono::Local::now().date_naive())
            .unwrap_err();
        assert_eq!(err.to_string(), "Data inválida.");
    }
}
