//! Cardcheck CLI - validate, classify, format and generate Luhn numbers.

use clap::{Parser, Subcommand};

mod commands;
mod input;
mod logging;
mod output;

use cardcheck_core::{DEFAULT_LENGTH, DEFAULT_MIN_SUBMIT_LENGTH};
use commands::{check, classify, format, generate, sanitize};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(about = "Luhn (Mod10) validation, formatting and test-number generation")]
struct Cli {
    /// Log engine decisions to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical digits of the input
    Sanitize {
        /// Raw input; separators are dropped
        input: String,
    },
    /// Validate a number and explain the Luhn computation
    Check {
        /// Raw input (or stdin if neither this nor --file is given)
        #[arg(conflicts_with = "file")]
        input: Option<String>,
        /// Read raw input from a file
        #[arg(long)]
        file: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print a per-digit table
        #[arg(long)]
        steps: bool,
        /// Exit with error code unless the number is accepted
        #[arg(long)]
        strict: bool,
        /// Shorter numbers are neither accepted nor rejected
        #[arg(long, env = "CARDCHECK_MIN_LENGTH", default_value_t = DEFAULT_MIN_SUBMIT_LENGTH)]
        min_length: usize,
    },
    /// Print the issuer inferred from the prefix
    Classify {
        /// Raw input
        input: String,
    },
    /// Print the grouped display form
    Format {
        /// Raw input
        input: String,
        /// Hide all but the last four digits
        #[arg(long)]
        mask: bool,
        /// Glyph used for hidden digits
        #[arg(long, requires = "mask")]
        mask_glyph: Option<char>,
    },
    /// Generate Luhn-valid numbers
    Generate {
        /// Total length including the check digit (clamped to 1-19)
        #[arg(long, short, default_value_t = DEFAULT_LENGTH)]
        length: usize,
        /// Leading digits to keep (truncated to length - 1)
        #[arg(long, short, default_value = "")]
        prefix: String,
        /// How many numbers to generate
        #[arg(long, short, default_value_t = 1)]
        count: u32,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Reject out-of-range length or prefix instead of adjusting them
        #[arg(long)]
        strict: bool,
        /// Print grouped rather than bare digits
        #[arg(long)]
        grouped: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Sanitize { input } => sanitize::run(input),
        Commands::Check {
            input,
            file,
            json,
            steps,
            strict,
            min_length,
        } => check::run(input, file, json, steps, strict, min_length),
        Commands::Classify { input } => classify::run(input),
        Commands::Format {
            input,
            mask,
            mask_glyph,
        } => format::run(input, mask, mask_glyph),
        Commands::Generate {
            length,
            prefix,
            count,
            seed,
            strict,
            grouped,
            json,
        } => generate::run(length, prefix, count, seed, strict, grouped, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
