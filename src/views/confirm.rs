//! Confirmation step for destructive actions.

use std::io::{BufRead, Write};

/// Prompt shown before deleting a vignette.
pub const DELETE_VIGNETTE_PROMPT: &str = "Are you sure you want to delete this vignette?";

/// Prompt shown before deleting a file.
pub const DELETE_FILE_PROMPT: &str =
    "Are you sure you want to delete this file? This action cannot be undone.";

/// Something that can answer a yes/no question before a destructive request.
pub trait Confirm {
    /// Return `true` to proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Ask on the terminal: prints to stderr, reads one line from stdin.
///
/// Only `y` or `yes` (any case) confirms; EOF and read errors decline.
pub fn prompt_stdin(prompt: &str) -> bool {
    let stdin = std::io::stdin();
    ask(prompt, &mut stdin.lock(), &mut std::io::stderr())
}

fn ask(prompt: &str, input: &mut dyn BufRead, output: &mut dyn Write) -> bool {
    let _ = write!(output, "{prompt} [y/N] ");
    let _ = output.flush();

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_accepts_yes() {
        let mut out = Vec::new();
        assert!(ask("Delete?", &mut Cursor::new("y\n"), &mut out));
        assert!(ask("Delete?", &mut Cursor::new("YES\n"), &mut out));
        assert!(String::from_utf8(out).unwrap().starts_with("Delete? [y/N]"));
    }

    #[test]
    fn test_ask_declines_by_default() {
        let mut out = Vec::new();
        assert!(!ask("Delete?", &mut Cursor::new("\n"), &mut out));
        assert!(!ask("Delete?", &mut Cursor::new("nope\n"), &mut out));
        assert!(!ask("Delete?", &mut Cursor::new(""), &mut out));
    }

    #[test]
    fn test_closures_confirm() {
        let mut asked = Vec::new();
        let mut recorder = |p: &str| {
            asked.push(p.to_string());
            false
        };
        assert!(!recorder.confirm(DELETE_FILE_PROMPT));
        assert_eq!(asked, vec![DELETE_FILE_PROMPT.to_string()]);
    }
}
