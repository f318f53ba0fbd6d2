//! CLI tool for credit card classification.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for a number and print its classification
//! credit check
//!
//! # Classify a number given on the command line
//! credit check 4003600000000014
//!
//! # Classify one number per line from a file (or stdin)
//! credit batch numbers.txt --parallel
//!
//! # Generate test numbers
//! credit generate --issuer amex --count 5
//! ```
//!
//! Set `RUST_LOG=debug` to see diagnostics on stderr.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cc_classifier::batch::{self, Tally};
use cc_classifier::generate::{self, CardGenerator};
use cc_classifier::stream::ValidateExt;
use cc_classifier::{
    luhn, parse_account_number, validate_account, AccountNumber, Classification, Prompter,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "credit")]
#[command(author, version, about = "Credit card number validation and issuer classification")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a card number as VISA, MASTERCARD, AMEX or INVALID
    Check {
        /// Card number (prompted for on stdin when omitted)
        #[arg(allow_hyphen_values = true)]
        card_number: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check if a card number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Classify one card number per line
    Batch {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Classify with a rayon thread pool
        #[arg(short, long)]
        parallel: bool,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Issuer to generate for
        #[arg(short, long, default_value = "visa")]
        issuer: IssuerArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Total digits (defaults to the issuer's usual length)
        #[arg(short, long)]
        length: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum IssuerArg {
    Visa,
    Mastercard,
    Amex,
}

impl From<IssuerArg> for Classification {
    fn from(arg: IssuerArg) -> Self {
        match arg {
            IssuerArg::Visa => Classification::Visa,
            IssuerArg::Mastercard => Classification::Mastercard,
            IssuerArg::Amex => Classification::Amex,
        }
    }
}

#[derive(Serialize)]
struct CheckReport {
    classification: Classification,
    digits: u32,
    luhn: bool,
    masked: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            card_number,
            output,
        } => cmd_check(card_number.as_deref(), output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Batch { file, parallel } => cmd_batch(file.as_deref(), parallel),
        Commands::Generate {
            issuer,
            count,
            length,
        } => cmd_generate(issuer.into(), count, length),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_account(card_number: Option<&str>) -> Result<Option<AccountNumber>, Box<dyn std::error::Error>> {
    match card_number {
        Some(input) => Ok(Some(parse_account_number(input)?)),
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            let account = prompter.read_account_number()?;
            tracing::debug!(rejected = prompter.rejected(), "prompt finished");
            Ok(account)
        }
    }
}

fn cmd_check(
    card_number: Option<&str>,
    output: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Some(account) = read_account(card_number)? else {
        tracing::warn!("input ended before a number was entered");
        return Ok(ExitCode::FAILURE);
    };

    let classification = validate_account(&account);
    tracing::debug!(%account, %classification, "classified");

    match output {
        OutputFormat::Text => println!("{}", classification),
        OutputFormat::Json => {
            let report = CheckReport {
                classification,
                digits: account.digit_count(),
                luhn: luhn::validate(account.value()),
                masked: account.masked(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_luhn(card_number: &str) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let account = parse_account_number(card_number)?;
    if luhn::validate(account.value()) {
        println!("Luhn check: PASS");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Luhn check: FAIL");
        Ok(ExitCode::FAILURE)
    }
}

fn cmd_batch(file: Option<&Path>, parallel: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;

    let tally = if parallel {
        batch_parallel(&lines)
    } else {
        batch_sequential(&lines)
    };

    eprintln!(
        "VISA: {}  MASTERCARD: {}  AMEX: {}  INVALID: {}  (total {})",
        tally.visa,
        tally.mastercard,
        tally.amex,
        tally.invalid,
        tally.total()
    );
    Ok(ExitCode::SUCCESS)
}

fn batch_sequential(lines: &[String]) -> Tally {
    let mut tally = Tally::default();
    for (index, result) in lines.iter().validate_lines() {
        match result {
            Ok(classification) => {
                println!("{}", classification);
                tally.record(classification);
            }
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping line");
            }
        }
    }
    tally
}

fn batch_parallel(lines: &[String]) -> Tally {
    let mut numbers = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_account_number(line) {
            Ok(account) => numbers.push(account.value()),
            Err(e) => tracing::warn!(line = index + 1, error = %e, "skipping line"),
        }
    }

    tracing::debug!(count = numbers.len(), "classifying in parallel");
    let results = batch::validate_batch_parallel(&numbers);
    for classification in &results {
        println!("{}", classification);
    }
    results.into_iter().collect()
}

fn generator_for(issuer: Classification, length: Option<u32>) -> Result<CardGenerator, String> {
    let generator = CardGenerator::new(issuer);
    match length {
        Some(length) if !issuer.is_valid_length(length) => Err(format!(
            "{} numbers cannot have {} digits (accepted: {:?})",
            issuer.name(),
            length,
            issuer.valid_lengths()
        )),
        Some(length) => Ok(generator.length(length)),
        None => Ok(generator),
    }
}

fn cmd_generate(
    issuer: Classification,
    count: usize,
    length: Option<u32>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let generator = generator_for(issuer, length)?;

    for _ in 0..count {
        match generator.generate() {
            Some(number) => println!("{}", number),
            None => {
                return Err(format!(
                    "cannot generate {} numbers of that length (maximum {} digits)",
                    issuer.name(),
                    generate::MAX_GENERATED_DIGITS
                )
                .into());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
