//! Generate command implementation.

use cardcheck_core::{classify, generate_with, group, CanonicalDigits, CardType, GenerationRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::output::format_json;

#[derive(Serialize)]
struct Generated {
    digits: CanonicalDigits,
    grouped: String,
    card_type: CardType,
}

pub fn run(
    length: usize,
    prefix: String,
    count: u32,
    seed: Option<u64>,
    strict: bool,
    grouped: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = if strict {
        GenerationRequest::strict(length, &prefix)?
    } else {
        GenerationRequest::new(length, &prefix)
    };
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let numbers: Vec<Generated> = (0..count)
        .map(|_| {
            let digits = generate_with(&mut rng, &request);
            Generated {
                grouped: group(&digits),
                card_type: classify(&digits),
                digits,
            }
        })
        .collect();
    tracing::info!(
        count,
        length = request.effective_length(),
        prefix = %request.effective_prefix(),
        "generated Luhn-valid numbers"
    );

    if json {
        println!("{}", format_json(&numbers));
        return Ok(());
    }
    for number in &numbers {
        if grouped {
            println!("{}", number.grouped);
        } else {
            println!("{}", number.digits);
        }
    }
    Ok(())
}
