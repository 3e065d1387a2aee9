//! Sanitize command implementation.

pub fn run(input: String) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", cardcheck_core::sanitize(&input));
    Ok(())
}
