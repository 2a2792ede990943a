//! User notifications and confirmations
//!
//! The list controllers never talk to a UI directly. They report outcomes
//! through a [`Notifier`], which front ends implement (console, GUI, tests).

use serde::{Deserialize, Serialize};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification titles
pub mod titles {
    pub const SUCCESS: &str = "Succès";
    pub const ERROR: &str = "Erreur";
    pub const CANCELLED: &str = "Annulé";
    pub const EXPORT_DONE: &str = "Export réussi";
}

/// Sink for user-visible notifications and yes/no prompts
pub trait Notifier {
    /// Show a notification
    fn notify(&mut self, severity: Severity, title: &str, detail: &str);

    /// Ask the user to confirm; returns whether they accepted
    fn confirm(&mut self, message: &str) -> bool;
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, severity: Severity, title: &str, detail: &str) {
        (**self).notify(severity, title, detail)
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, severity: Severity, title: &str, detail: &str) {
        (**self).notify(severity, title, detail)
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
