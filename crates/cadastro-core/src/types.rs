use crate::{
    Result,
    constants::{
        ADULT_AGE, CPF_BASE_LENGTH, CPF_LENGTH, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS,
        POSTAL_CODE_DIGITS, POSTAL_CODE_PREFIX, STATE_CODE_LENGTH,
    },
    error::FieldError,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strip everything that is not an ASCII digit.
fn digits_of(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// CPF, the Brazilian 11-digit national identifier.
///
/// The last two digits are check digits computed from the 9-digit base with
/// a weighted sum modulo 11. Construction normalizes the input (separators
/// and any other non-digit characters are stripped) and verifies both check
/// digits, so a `Cpf` value is always checksum-consistent.
///
/// # Examples
///
/// ```
/// use cadastro_core::Cpf;
///
/// let cpf = Cpf::new("529.982.247-25").unwrap();
/// assert_eq!(cpf.as_digits(), "52998224725");
/// assert_eq!(cpf.to_string(), "529.982.247-25");
///
/// // Flipping the final digit breaks the checksum
/// assert!(Cpf::new("529.982.247-24").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpf(String);

impl Cpf {
    /// Create a CPF with checksum validation.
    ///
    /// The input is normalized first: every non-digit character (mask
    /// separators included) is dropped.
    ///
    /// # Errors
    /// Returns `FieldError::InvalidNationalIdChecksum` if the normalized
    /// input is not exactly 11 digits, if all 11 digits are identical (a
    /// known-invalid degenerate pattern that would otherwise satisfy the
    /// arithmetic), or if either check digit does not match.
    pub fn new(input: &str) -> Result<Self> {
        let digits = digits_of(input);
        if digits.len() != CPF_LENGTH {
            return Err(FieldError::InvalidNationalIdChecksum);
        }

        let values: Vec<u32> = digits
            .bytes()
            .map(|b| u32::from(b - b'0'))
            .collect();

        // Sequences like 111.111.111-11 pass the weighted sum but are
        // reserved as invalid.
        if values.iter().all(|&d| d == values[0]) {
            return Err(FieldError::InvalidNationalIdChecksum);
        }

        let dv1 = check_digit(&values[..CPF_BASE_LENGTH]);
        let mut with_dv1 = values[..CPF_BASE_LENGTH].to_vec();
        with_dv1.push(dv1);
        let dv2 = check_digit(&with_dv1);

        if values[CPF_BASE_LENGTH] != dv1 || values[CPF_BASE_LENGTH + 1] != dv2 {
            return Err(FieldError::InvalidNationalIdChecksum);
        }

        Ok(Cpf(digits))
    }

    /// Get the 11 digits without separators.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}-{}",
            &self.0[0..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..11]
        )
    }
}

impl std::str::FromStr for Cpf {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        Cpf::new(s)
    }
}

/// Compute one CPF check digit over `digits`.
///
/// Each digit is multiplied by a descending weight starting at
/// `digits.len() + 1` and ending at 2; the products are summed and reduced
/// modulo 11. A remainder below 2 yields 0, anything else `11 - remainder`.
fn check_digit(digits: &[u32]) -> u32 {
    let len = digits.len() as u32;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(idx, d)| d * (len + 1 - idx as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

/// CEP, the Brazilian 8-digit postal code.
///
/// # Examples
///
/// ```
/// use cadastro_core::PostalCode;
///
/// let cep = PostalCode::new("01310100").unwrap();
/// assert_eq!(cep.to_string(), "01310-100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostalCode(String);

impl PostalCode {
    /// Create a postal code, normalizing away separators.
    ///
    /// # Errors
    /// Returns `FieldError::MalformedPostalCode` if the normalized input is
    /// not exactly 8 digits.
    pub fn new(input: &str) -> Result<Self> {
        let digits = digits_of(input);
        if digits.len() != POSTAL_CODE_DIGITS {
            return Err(FieldError::MalformedPostalCode);
        }
        Ok(PostalCode(digits))
    }

    /// Get the 8 digits without the hyphen.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            &self.0[..POSTAL_CODE_PREFIX],
            &self.0[POSTAL_CODE_PREFIX..]
        )
    }
}

impl std::str::FromStr for PostalCode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        PostalCode::new(s)
    }
}

/// Phone number with area code (10 digits landline, 11 digits mobile).
///
/// # Examples
///
/// ```
/// use cadastro_core::PhoneNumber;
///
/// let mobile = PhoneNumber::new("(11) 98765-4321").unwrap();
/// assert!(mobile.is_mobile());
/// assert_eq!(mobile.area_code(), "11");
/// assert_eq!(mobile.to_string(), "(11) 98765-4321");
///
/// let landline = PhoneNumber::new("1133334444").unwrap();
/// assert_eq!(landline.to_string(), "(11) 3333-4444");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a phone number, normalizing away mask characters.
    ///
    /// # Errors
    /// Returns `FieldError::PhoneTooShort` if the normalized input has
    /// fewer than 10 or more than 11 digits.
    pub fn new(input: &str) -> Result<Self> {
        let digits = digits_of(input);
        if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len()) {
            return Err(FieldError::PhoneTooShort);
        }
        Ok(PhoneNumber(digits))
    }

    /// Get the digits without separators.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// Get the 2-digit area code.
    #[must_use]
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }

    /// Returns `true` for 11-digit numbers (mobile with the leading 9).
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.0.len() == PHONE_MAX_DIGITS
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let split = if self.is_mobile() { 7 } else { 6 };
        write!(
            f,
            "({}) {}-{}",
            &self.0[..2],
            &self.0[2..split],
            &self.0[split..]
        )
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        PhoneNumber::new(s)
    }
}

/// UF: two-letter state abbreviation, stored uppercase.
///
/// Only the shape is checked (two ASCII letters); membership in the list of
/// federative units is out of scope, matching the form's documented rule.
///
/// # Examples
///
/// ```
/// use cadastro_core::StateCode;
///
/// let uf = StateCode::new("sp").unwrap();
/// assert_eq!(uf.as_str(), "SP");
/// assert!(StateCode::new("s1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateCode(String);

impl StateCode {
    /// Create a state code, trimming and uppercasing the input.
    ///
    /// # Errors
    /// Returns `FieldError::InvalidStateCode` if the trimmed input is not
    /// exactly 2 ASCII letters.
    pub fn new(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.len() != STATE_CODE_LENGTH
            || !trimmed.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(FieldError::InvalidStateCode);
        }
        Ok(StateCode(trimmed.to_uppercase()))
    }

    /// Get the uppercase abbreviation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StateCode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        StateCode::new(s)
    }
}

/// Birth date in the form's `DD/MM/YYYY` format.
///
/// Parsing is strict about the masked shape (two digits, slash, two digits,
/// slash, four digits) and about the calendar: the components must name a
/// real date, leap years included, so `31/04/2020` and `29/02/2001` are both
/// rejected.
///
/// # Examples
///
/// ```
/// use cadastro_core::BirthDate;
/// use chrono::NaiveDate;
///
/// let date = BirthDate::parse("29/02/2000").unwrap();
/// assert_eq!(date.to_string(), "29/02/2000");
///
/// let today = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
/// assert_eq!(date.age_on(today), 20);
///
/// assert!(BirthDate::parse("29/02/2001").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse from the masked `DD/MM/YYYY` form.
    ///
    /// # Errors
    /// Returns `FieldError::InvalidCalendarDate` if the text does not match
    /// the masked shape, if any component is zero, or if the components do
    /// not name a real calendar date.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
            return Err(FieldError::InvalidCalendarDate);
        }

        let day = parse_component(&text[0..2])?;
        let month = parse_component(&text[3..5])?;
        let year = parse_component(&text[6..10])?;
        if day == 0 || month == 0 || year == 0 {
            return Err(FieldError::InvalidCalendarDate);
        }

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(BirthDate)
            .ok_or(FieldError::InvalidCalendarDate)
    }

    /// Create from an already-validated calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        BirthDate(date)
    }

    /// Get the inner calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whole years elapsed from this date up to `today`.
    ///
    /// The year difference is decremented by one when `today`'s month/day
    /// falls before the birth month/day, so a birthday counts only once it
    /// has actually happened that year.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.0.year();
        if (today.month(), today.day()) < (self.0.month(), self.0.day()) {
            age -= 1;
        }
        age
    }

    /// Whole years elapsed as of the current local date.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }

    /// Returns `true` when the age on `today` meets the adult threshold.
    #[must_use]
    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        self.age_on(today) >= ADULT_AGE
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

impl std::str::FromStr for BirthDate {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        BirthDate::parse(s)
    }
}

/// Parse a fixed-width date component, digits only.
fn parse_component(s: &str) -> Result<u32> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::InvalidCalendarDate);
    }
    s.parse().map_err(|_| FieldError::InvalidCalendarDate)
}
