//! Blocking stdin helpers for the interactive shell.

use std::io::{self, Write};
use std::str::FromStr;

/// Prints `prompt` and reads one trimmed line. Fails when stdin closes.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}\n> ", prompt);
    io::stdout().flush()?;

    let mut buffer = String::new();
    let bytes = io::stdin().read_line(&mut buffer)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
    }
    Ok(buffer.trim().to_string())
}

/// Reads lines until one parses as `T`, reprompting on bad input.
pub fn read_parsed<T: FromStr>(prompt: &str) -> io::Result<T> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Could not read '{}', please try again.", line),
        }
    }
}

/// Collects entries one per line until the sentinel 'N' is entered.
pub fn read_symbol_list(prompt: &str) -> io::Result<Vec<String>> {
    let full_prompt = format!("{}\nEnter 'N' to stop input...", prompt);
    let mut entries = Vec::new();
    loop {
        let line = read_line(&full_prompt)?;
        if line.eq_ignore_ascii_case("n") {
            return Ok(entries);
        }
        if !line.is_empty() {
            entries.push(line);
        }
    }
}
