//! Contact Validator - Main entry point
//!
//! Non-interactive CLI over the validation library: single-value checks for
//! emails, phone numbers, and names, plus bulk validation of contact lists
//! with summary statistics and optional CSV export.

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_validator::export::{write_results_csv, write_status_report_csv};
use contact_validator::ingest::{
    read_contacts_csv, read_contacts_csv_columns, read_contacts_lines,
};
use contact_validator::{
    BulkValidator, Config, ContactPair, ContactValidationResult, DnsMailReachability,
    EmailValidator, MailReachability, NameValidator, PhoneValidator, ValidationOutcome,
    ValidationSummary,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "contact-validator",
    about = "Heuristic validation for contact records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a single email address
    Email {
        /// The address to validate
        address: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a single South African phone number
    Phone {
        /// The number to validate (e.g. "072 338 9999" or "+27 72 338 9999")
        number: String,

        /// Require input already in surface form (skip normalization)
        #[arg(long)]
        strict: bool,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a full name
    Name {
        /// The full name to validate (quote names containing spaces)
        full_name: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a contact list and summarize the results
    Bulk {
        /// CSV file to read; omit to read "email,phone" lines from stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Skip the first row of the input file
        #[arg(long)]
        has_header: bool,

        /// Zero-based email column (enables column selection)
        #[arg(long, requires = "phone_column")]
        email_column: Option<usize>,

        /// Zero-based phone column (enables column selection)
        #[arg(long, requires = "email_column")]
        phone_column: Option<usize>,

        /// Write results to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export "Valid"/"Invalid" status labels instead of booleans
        #[arg(long)]
        status_labels: bool,

        /// Print per-contact check breakdowns
        #[arg(long)]
        details: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Initialize logging (stderr only, keeping stdout for results)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let reachability: Arc<dyn MailReachability> =
        Arc::new(DnsMailReachability::new(config.lookup_timeout_secs));

    let exit_code = match cli.command {
        Command::Email { address, json } => {
            let outcome = EmailValidator::new(reachability).validate(&address).await;
            render_single(&outcome, json)?
        }
        Command::Phone {
            number,
            strict,
            json,
        } => {
            let validator = if strict {
                PhoneValidator::strict()
            } else {
                PhoneValidator::new()
            };
            let outcome = validator.validate(&number);
            render_single(&outcome, json)?
        }
        Command::Name { full_name, json } => {
            let outcome = NameValidator::new().validate(&full_name);
            render_single(&outcome, json)?
        }
        Command::Bulk {
            input,
            has_header,
            email_column,
            phone_column,
            export,
            status_labels,
            details,
        } => {
            let contacts = load_contacts(input, has_header, email_column, phone_column)?;
            run_bulk(reachability, contacts, export, status_labels, details).await?
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

/// Load the contact list from a CSV file or stdin lines.
fn load_contacts(
    input: Option<PathBuf>,
    has_header: bool,
    email_column: Option<usize>,
    phone_column: Option<usize>,
) -> Result<Vec<ContactPair>> {
    let contacts = match input {
        Some(path) => match (email_column, phone_column) {
            (Some(email), Some(phone)) => {
                read_contacts_csv_columns(&path, has_header, email, phone)?
            }
            _ => read_contacts_csv(&path, has_header)?,
        },
        None => read_contacts_lines(std::io::stdin().lock())?,
    };

    Ok(contacts)
}

/// Validate a batch, print the summary, and handle details/export flags.
async fn run_bulk(
    reachability: Arc<dyn MailReachability>,
    contacts: Vec<ContactPair>,
    export: Option<PathBuf>,
    status_labels: bool,
    details: bool,
) -> Result<i32> {
    if contacts.is_empty() {
        println!("No contacts to validate.");
        return Ok(0);
    }

    info!(contacts = contacts.len(), "starting bulk validation");
    println!("Validating {} contact(s)...", contacts.len());

    let validator = BulkValidator::new(reachability);
    let results = validator.validate_contacts(&contacts).await;
    let summary = BulkValidator::summarize(&contacts, &results)?;

    render_summary(&summary);

    if details {
        render_details(&results);
    }

    if let Some(path) = export {
        let written = if status_labels {
            write_status_report_csv(&path, &results)
        } else {
            write_results_csv(&path, &results)
        };

        // Validation work is done; an export failure only affects the file.
        if let Err(error) = written {
            eprintln!("Error exporting results: {}", error);
            return Ok(1);
        }

        println!("Results exported to {}", path.display());
    }

    Ok(0)
}

/// Print one validation outcome; returns the process exit code.
fn render_single(outcome: &ValidationOutcome, json: bool) -> Result<i32> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        if outcome.is_valid {
            println!("Input appears to be valid.");
        } else {
            println!("Input appears to be invalid.");
        }

        println!("Validation details:");
        for check in &outcome.checks {
            println!("- {}: {}", check.name, pass_label(check.passed));
        }
    }

    Ok(if outcome.is_valid { 0 } else { 1 })
}

fn render_summary(summary: &ValidationSummary) {
    println!("\nValidation Summary:");
    println!("Total contacts: {}", summary.total_contacts);
    println!(
        "Valid emails: {} ({} provided)",
        summary.valid_emails, summary.emails_provided
    );
    println!(
        "Valid phones: {} ({} provided)",
        summary.valid_phones, summary.phones_provided
    );
    println!("Valid both: {}", summary.valid_both);
}

fn render_details(results: &[ContactValidationResult]) {
    println!("\nDetailed Results:");
    for result in results {
        println!("\n--------------------------------------------------");

        println!("Email: {}", result.contact.email);
        if !result.contact.has_email() {
            println!("(No email provided)");
        } else {
            println!("{}", verdict_label(result.email_valid));
            for check in &result.email_checks {
                println!("- {}: {}", check.name, pass_label(check.passed));
            }
        }

        println!("\nPhone: {}", result.contact.phone);
        if !result.contact.has_phone() {
            println!("(No phone provided)");
        } else {
            println!("{}", verdict_label(result.phone_valid));
            for check in &result.phone_checks {
                println!("- {}: {}", check.name, pass_label(check.passed));
            }
        }
    }
}

fn pass_label(passed: bool) -> &'static str {
    if passed {
        "Passed"
    } else {
        "Failed"
    }
}

fn verdict_label(valid: bool) -> &'static str {
    if valid {
        "VALID"
    } else {
        "INVALID"
    }
}
