// ABOUTME: User-facing interaction seam for confirmations and blocking alerts
// ABOUTME: Implemented by the terminal front end and by recording doubles in tests

/// How an alert should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The requested change went through
    Success,
    /// Input needs fixing before anything is sent
    Warning,
    /// The backend rejected or failed the request
    Error,
}

/// Interactive surface a controller reports to
pub trait Prompter: Send + Sync {
    /// Ask the user to confirm a destructive action
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking message
    fn alert(&self, severity: Severity, message: &str);
}

/// Prompter that confirms everything and logs alerts
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }

    fn alert(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => tracing::info!("{}", message),
            Severity::Warning | Severity::Error => tracing::warn!("{}", message),
        }
    }
}
