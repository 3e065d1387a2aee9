//! Raw input sources.

use std::io::{self, Read};

/// Reads raw input from the argument, a file, or stdin, in that order.
pub fn read_raw(
    input: Option<String>,
    file: Option<String>,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(raw) = input {
        return Ok(raw);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e).into());
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
