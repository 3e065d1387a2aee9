//! Format command implementation.

use cardcheck_core::{sanitize, Formatter};

pub fn run(
    input: String,
    mask: bool,
    mask_glyph: Option<char>,
) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = match mask_glyph {
        Some(glyph) => Formatter::with_mask_glyph(glyph)?,
        None => Formatter::default(),
    };
    let digits = sanitize(&input);
    let display = if mask {
        formatter.mask(&digits)
    } else {
        formatter.group(&digits)
    };
    println!("{}", display);
    Ok(())
}
