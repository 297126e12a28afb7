//! Modal dialogs shown to the user.
//!
//! The controller and the download gatekeeper only talk to the [`Dialogs`]
//! trait; the GUI build backs it with native message boxes and the console
//! demo with stdin/stdout.

use std::io::{self, BufRead, Write};

/// Blocking, modal user prompts.
pub trait Dialogs {
    /// Yes/No question. Only an explicit "yes" returns `true`.
    fn confirm(&self, title: &str, message: &str) -> bool;
    fn inform(&self, title: &str, message: &str);
    fn warn(&self, title: &str, message: &str);
}

/// Prompts on the terminal. Anything other than `y`/`yes` counts as "No".
#[derive(Debug, Default)]
pub struct ConsoleDialogs;

impl ConsoleDialogs {
    /// Writes the question to `output` and reads one line from `input`.
    /// A prompt that cannot be shown or answered counts as "No".
    fn ask(mut input: impl BufRead, mut output: impl Write, title: &str, message: &str) -> bool {
        if write!(output, "  [{}] {} [y/N] ", title, message)
            .and_then(|_| output.flush())
            .is_err()
        {
            return false;
        }
        let mut line = String::new();
        if input.read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

impl Dialogs for ConsoleDialogs {
    fn confirm(&self, title: &str, message: &str) -> bool {
        Self::ask(io::stdin().lock(), io::stdout().lock(), title, message)
    }

    fn inform(&self, title: &str, message: &str) {
        println!("  [{}] {}", title, message);
    }

    fn warn(&self, title: &str, message: &str) {
        println!("  [{}] ⚠ {}", title, message);
    }
}
