//! Blocking stdin prompt helpers for the interactive session.

use std::io::{self, Write};

/// Print a prompt line, then read one trimmed line from stdin.
pub fn ask(label: &str) -> io::Result<String> {
    println!("{label}");
    answer()
}

/// Read one trimmed line from stdin.
pub fn answer() -> io::Result<String> {
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// The in-band cancel token, accepted case-insensitively.
pub fn is_cancel(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("c")
}

/// Y/N confirmation; anything other than "y" declines.
pub fn confirm(label: &str) -> io::Result<bool> {
    Ok(ask(label)?.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_token_is_case_insensitive() {
        assert!(is_cancel("c"));
        assert!(is_cancel("C"));
        assert!(!is_cancel("cc"));
        assert!(!is_cancel(""));
    }
}
