//! Interactive stdin prompts.
//!
//! These helpers re-prompt until syntactically valid input is supplied, so
//! the puzzle engine only ever sees well-formed `(integer, integer, symbol)`
//! triples. Only genuine I/O failures (including end of input) surface as
//! errors.

use std::io::{self, BufRead as _, Write as _};

use symlace_core::Symbol;

/// Prints `message` without a newline and reads one trimmed line.
///
/// Returns [`io::ErrorKind::UnexpectedEof`] when stdin is exhausted.
pub fn read_line(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim().to_owned())
}

/// Prompts until an integer is entered.
pub fn read_i32(message: &str) -> io::Result<i32> {
    loop {
        if let Ok(value) = read_line(message)?.parse() {
            return Ok(value);
        }
    }
}

/// Prompts until a symbol from `vocabulary` is entered.
pub fn read_symbol(message: &str, vocabulary: &[Symbol]) -> io::Result<Symbol> {
    loop {
        if let Ok(symbol) = read_line(message)?.parse::<Symbol>()
            && vocabulary.contains(&symbol)
        {
            return Ok(symbol);
        }
    }
}

/// Prompts a yes/no question; `y` (case-insensitive) means yes.
pub fn read_yes_no(message: &str) -> io::Result<bool> {
    Ok(read_line(message)?.eq_ignore_ascii_case("y"))
}
