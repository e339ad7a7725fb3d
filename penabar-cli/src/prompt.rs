//! Confirmation prompts for destructive commands.

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Asks `question [y/N]` on stdout and reads one line from stdin.
///
/// Anything other than `y`/`yes` (case-insensitive) is a no. With
/// `assume_yes` (the `-y` flag) the prompt is skipped entirely.
pub fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
