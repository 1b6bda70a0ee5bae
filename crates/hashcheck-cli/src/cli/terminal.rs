//! Terminal rendering of verification outcomes.

use anyhow::{bail, Result};
use hashcheck_core::session::{Location, Surface};
use hashcheck_core::{Outcome, VerificationState};

/// Format the display fields and status, one per line.
pub fn format_report(outcome: &Outcome) -> String {
    format!(
        "{:<10} {}\n{:<10} {}\n{:<10} {}\n{:<10} {} [{}]",
        "Algorithm:",
        outcome.hash_type,
        "Expected:",
        outcome.expected_display,
        "Computed:",
        outcome.computed_display,
        "Status:",
        outcome.status_text(),
        outcome.status_style(),
    )
}

/// Print the outcome as text or pretty JSON.
pub fn print_outcome(outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        println!("{}", format_report(outcome));
    }
    Ok(())
}

/// Turn a failed or mismatching outcome into an error for the exit status.
pub fn ensure_not_failed(outcome: &Outcome) -> Result<()> {
    if let Some(msg) = &outcome.error {
        bail!("computation failed: {}", msg);
    }
    if outcome.state == VerificationState::Invalid {
        bail!("digest mismatch");
    }
    Ok(())
}

/// Surface that prints each rendered outcome to stdout.
pub struct TerminalSurface;

impl Surface for TerminalSurface {
    fn render(&mut self, outcome: &Outcome) {
        println!("{}\n", format_report(outcome));
    }
}

/// Location that remembers the fragment and echoes it.
#[derive(Default)]
pub struct PrintedLocation {
    pub fragment: Option<String>,
}

impl Location for PrintedLocation {
    fn set_fragment(&mut self, fragment: &str) {
        if self.fragment.as_deref() != Some(fragment) {
            println!("#{}\n", fragment);
            self.fragment = Some(fragment.to_string());
        }
    }
}
