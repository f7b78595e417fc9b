//! Interactive terminal demo for the Cadastro forms.
//!
//! Runs the registration form by default; pass `endereco` to run the
//! address form instead. Each line you type is fed through the masking
//! pipeline and echoed back in its canonical shape, validation feedback
//! appears inline, and submission follows each form's own flow.
//!
//! ```sh
//! cargo run -p cadastro-cli
//! cargo run -p cadastro-cli -- endereco
//! RUST_LOG=cadastro_form=debug cargo run -p cadastro-cli
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cadastro_form::{
    ADDRESS_FIELDS, AddressForm, FieldId, REGISTRATION_FIELDS, RegistrationForm, SubmitOutcome,
    Validity,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    if std::env::args().any(|arg| arg == "endereco") {
        run_address(&mut lines)
    } else {
        run_registration(&mut lines)
    }
}

/// Prompt for one field; `None` means the input stream ended.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    field: FieldId,
) -> Result<Option<String>> {
    print!("{}: ", field.label());
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Feed one entry into a field and echo the masked result when it differs.
fn enter(form_session: &mut cadastro_form::FormSession, field: FieldId, entry: &str) -> Result<()> {
    form_session.input(field, entry)?;
    let masked = form_session.value(field)?;
    if masked != entry {
        println!("  {masked}");
    }
    Ok(())
}

fn run_registration(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    let mut form = RegistrationForm::new();
    info!(session = %form.session().id(), "registration demo started");
    println!("== Cadastro ==");

    loop {
        for field in REGISTRATION_FIELDS {
            if form.session().state().field(field)?.validity() == Validity::Valid {
                continue;
            }
            let Some(entry) = prompt(lines, field)? else {
                return Ok(());
            };
            enter(form.session_mut(), field, &entry)?;
            form.session_mut().blur(field)?;
            if let Some(error) = form.session().state().field(field)?.error() {
                println!("  !! {error}");
            }
        }

        match form.submit()? {
            SubmitOutcome::Accepted { message } => {
                println!("{message}");
                return Ok(());
            }
            SubmitOutcome::Blocked { fields } => {
                let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                println!("Campos pendentes: {}", labels.join(", "));
            }
            SubmitOutcome::Rejected(alert) => {
                println!("!! {}", alert.message);
            }
        }
    }
}

fn run_address(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    let mut form = AddressForm::new();
    info!(session = %form.session().id(), "address demo started");
    println!("== Endereço ==");

    for field in ADDRESS_FIELDS {
        let Some(entry) = prompt(lines, field)? else {
            return Ok(());
        };
        enter(form.session_mut(), field, &entry)?;
    }

    loop {
        match form.submit()? {
            SubmitOutcome::Accepted { message } => {
                println!("{message}");
                return Ok(());
            }
            SubmitOutcome::Rejected(alert) => {
                // The interruptive dialog: show the message, return to the
                // offending field.
                println!("!! {}", alert.message);
                let Some(entry) = prompt(lines, alert.field)? else {
                    return Ok(());
                };
                enter(form.session_mut(), alert.field, &entry)?;
            }
            SubmitOutcome::Blocked { fields } => {
                let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                println!("Campos pendentes: {}", labels.join(", "));
            }
        }
    }
}
