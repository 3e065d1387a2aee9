//! Classify command implementation.

use cardcheck_core::{classify, sanitize};

pub fn run(input: String) -> Result<(), Box<dyn std::error::Error>> {
    let digits = sanitize(&input);
    println!("{}", classify(&digits));
    Ok(())
}
