// ABOUTME: Terminal implementation of the confirmation and alert seam
// ABOUTME: Confirmations use inquire and can be skipped with --yes; alerts are coloured by severity

use colored::*;
use coursemgr_core::{Prompter, Severity};
use inquire::Confirm;
use tracing::warn;

pub struct InquirePrompter {
    assume_yes: bool,
}

impl InquirePrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for InquirePrompter {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Confirmation aborted: {}", e);
                false
            }
        }
    }

    fn alert(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => println!("{}", styled_alert(severity, message)),
            Severity::Warning | Severity::Error => {
                eprintln!("{}", styled_alert(severity, message))
            }
        }
    }
}

fn styled_alert(severity: Severity, message: &str) -> String {
    match severity {
        Severity::Success => format!("{} {}", "✓".green().bold(), message.green()),
        Severity::Warning => format!("{} {}", "!".yellow().bold(), message.yellow()),
        Severity::Error => format!("{} {}", "✗".red().bold(), message.red()),
    }
}
