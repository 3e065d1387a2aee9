//! Output formatting utilities.

use cardcheck_core::LuhnStep;
use serde::Serialize;

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a labelled line of the check report.
pub fn format_field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<11} {}", format!("{}:", label), value)
}

/// Prints the per-digit table header.
#[allow(clippy::print_literal)]
pub fn print_steps_header() {
    println!(
        "{:>5} {:>5} {:>7} {:>7} {}",
        "POS", "DIGIT", "DOUBLED", "2×DIGIT", "VALUE"
    );
    println!("{}", "-".repeat(34));
}

/// Formats one Luhn step as a table row.
pub fn format_step_row(step: &LuhnStep) -> String {
    let doubled = step
        .doubled_value
        .map_or_else(|| "-".to_string(), |v| v.to_string());
    format!(
        "{:>5} {:>5} {:>7} {:>7} {}",
        step.position_from_right,
        step.original_digit,
        if step.was_doubled { "yes" } else { "no" },
        doubled,
        step.transformed_value
    )
}
