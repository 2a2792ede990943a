//! Terminal notifier
//!
//! Notifications are printed to stderr so stdout stays clean for list and
//! JSON output. Confirmations read a `y`/`n` answer from stdin unless
//! `--yes` was given.

use std::io::{self, BufRead, Write};

use referentiel_core::notify::{Notifier, Severity};
use tracing::debug;

pub struct ConsoleNotifier<R> {
    input: R,
    assume_yes: bool,
    quiet: bool,
}

impl ConsoleNotifier<io::StdinLock<'static>> {
    /// Notifier reading confirmations from stdin
    pub fn stdin(assume_yes: bool, quiet: bool) -> Self {
        Self::new(io::stdin().lock(), assume_yes, quiet)
    }
}

impl<R: BufRead> ConsoleNotifier<R> {
    pub fn new(input: R, assume_yes: bool, quiet: bool) -> Self {
        Self {
            input,
            assume_yes,
            quiet,
        }
    }
}

impl<R: BufRead> Notifier for ConsoleNotifier<R> {
    fn notify(&mut self, severity: Severity, title: &str, detail: &str) {
        debug!(%severity, title, detail, "Notification");
        // Errors are shown even in quiet mode.
        if self.quiet && severity != Severity::Error {
            return;
        }
        eprintln!("{}", format_notification(severity, title, detail));
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            debug!(message, "Confirmation auto-accepted");
            return true;
        }

        eprint!("{} [o/N] ", message);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn format_notification(severity: Severity, title: &str, detail: &str) -> String {
    let marker = match severity {
        Severity::Success => "[OK]",
        Severity::Info => "[--]",
        Severity::Warn => "[!!]",
        Severity::Error => "[ERR]",
    };
    format!("{} {}: {}", marker, title, detail)
}

/// Accepts "o"/"oui" as well as "y"/"yes", in any case
fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "o" | "oui" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("o\n"));
        assert!(is_yes(" Oui "));
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("non"));
    }

    #[test]
    fn test_confirm_reads_answer() {
        let mut notifier = ConsoleNotifier::new(Cursor::new("oui\n"), false, true);
        assert!(notifier.confirm("Supprimer ?"));

        let mut notifier = ConsoleNotifier::new(Cursor::new("n\n"), false, true);
        assert!(!notifier.confirm("Supprimer ?"));
    }

    #[test]
    fn test_confirm_at_end_of_input_declines() {
        let mut notifier = ConsoleNotifier::new(Cursor::new(""), false, true);
        assert!(!notifier.confirm("Supprimer ?"));
    }

    #[test]
    fn test_assume_yes_skips_input() {
        let mut notifier = ConsoleNotifier::new(Cursor::new("n\n"), true, true);
        assert!(notifier.confirm("Supprimer ?"));
    }

    #[test]
    fn test_format_notification() {
        assert_eq!(
            format_notification(Severity::Error, "Erreur", "Cette compétence existe déjà"),
            "[ERR] Erreur: Cette compétence existe déjà"
        );
        assert_eq!(
            format_notification(Severity::Success, "Succès", "ok"),
            "[OK] Succès: ok"
        );
    }
}
