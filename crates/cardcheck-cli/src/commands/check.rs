//! Check command implementation.

use cardcheck_core::{
    group, CanonicalDigits, CardSession, CardType, LuhnExplanation, SubmissionPolicy, Verdict,
    NO_INPUT_MESSAGE,
};
use serde::Serialize;

use crate::input::read_raw;
use crate::output::{format_field, format_json, format_step_row, print_steps_header};

#[derive(Serialize)]
struct CheckReport {
    digits: CanonicalDigits,
    grouped: String,
    masked: String,
    card_type: CardType,
    verdict: Verdict,
    message: String,
    explanation: Option<LuhnExplanation>,
}

pub fn run(
    input: Option<String>,
    file: Option<String>,
    json: bool,
    steps: bool,
    strict: bool,
    min_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_raw(input, file)?;
    let session = CardSession::new()
        .with_policy(SubmissionPolicy::new(min_length))
        .on_input_changed(&raw);
    let view = session.view();
    tracing::debug!(
        len = session.digits().len(),
        verdict = ?view.verdict,
        "checked input"
    );

    let report = CheckReport {
        digits: session.digits().clone(),
        grouped: group(session.digits()),
        masked: view.display,
        card_type: view.card_type,
        verdict: view.verdict,
        message: view.message,
        explanation: view.explanation,
    };

    if json {
        println!("{}", format_json(&report));
    } else {
        print_report(&report, steps);
    }

    if strict && !report.verdict.is_accepted() {
        return Err(format!("number not accepted: {}", report.verdict.helper()).into());
    }
    Ok(())
}

fn print_report(report: &CheckReport, steps: bool) {
    let Some(explanation) = &report.explanation else {
        println!("{}", NO_INPUT_MESSAGE);
        return;
    };

    println!("{}", format_field("Digits", &report.digits));
    println!("{}", format_field("Grouped", &report.grouped));
    println!("{}", format_field("Masked", &report.masked));
    println!("{}", format_field("Card type", report.card_type));
    println!("{}", explanation);
    let verdict = match report.verdict {
        Verdict::Neutral => "neutral (too short to judge)".to_string(),
        Verdict::Accepted => format!("accepted - {}", report.message),
        Verdict::Rejected => format!("rejected - {}", report.message),
    };
    println!("{}", format_field("Verdict", verdict));

    if steps {
        println!();
        print_steps_header();
        for step in explanation.steps_left_to_right() {
            println!("{}", format_step_row(step));
        }
    }
}
