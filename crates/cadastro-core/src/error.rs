use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field-level validation failure.
///
/// Each variant maps one field rule to the message shown next to that field.
/// These are outcomes, not control-flow exceptions: a validator returns one
/// and the form controller decides how to present it. The `Display` text is
/// the exact user-facing message, in Brazilian Portuguese.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    // Address form
    #[error("CEP inválido. Use o formato 00000-000.")]
    MalformedPostalCode,

    #[error("Logradouro obrigatório (mínimo 5 caracteres).")]
    StreetTooShort,

    #[error("Número obrigatório e deve conter apenas dígitos.")]
    NonNumericHouseNumber,

    #[error("UF inválido. Informe exatamente 2 letras maiúsculas (ex.: SP, RJ).")]
    InvalidStateCode,

    // Registration form
    #[error("Informe pelo menos 3 caracteres.")]
    NameTooShort,

    #[error("Email deve conter @ e domínio.")]
    MalformedEmail,

    #[error("Telefone incompleto.")]
    PhoneTooShort,

    #[error("CPF inválido.")]
    InvalidNationalIdChecksum,

    #[error("Data inválida.")]
    InvalidCalendarDate,

    #[error("É necessário ser maior de 18 anos.")]
    UnderAge,
}

pub type Result<T> = std::result::Result<T, FieldError>;
