//! Small stdin helpers shared by commands that need the user's consent.

use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question; anything but y/yes (or EOF) means no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm_from(&mut stdin.lock(), prompt)
}

pub fn confirm_from<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<bool> {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush()?;

    let mut s = String::new();
    input.read_line(&mut s)?;
    Ok(matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
}
