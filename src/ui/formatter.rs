//! Pure formatting functions for UI output.
//!
//! Standard output is reserved for command results (a version, `-1`/`0`/`1`),
//! so every message here goes to standard error.

use console::style;

use crate::release::{ReleaseOutcome, ReleasePlan};
use crate::warning::BumpWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a bump warning with a yellow warning icon.
pub fn display_warning(warning: &BumpWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Multi-line description of what a release will do.
pub fn format_release_plan(plan: &ReleasePlan) -> String {
    let mut lines = vec![format!("{}", style("Release plan:").bold())];
    match &plan.previous_tag {
        Some(previous) => lines.push(format!(
            "  From: {}  To: {}",
            style(previous).red(),
            style(&plan.tag).green()
        )),
        None => lines.push(format!("  New tag: {}", style(&plan.tag).green())),
    }
    if let Some(changelog) = &plan.changelog {
        lines.push(format!("  Update changelog: {}", changelog.display()));
    }
    lines.push(format!("  Commit: {}", plan.commit_message));
    match &plan.remote {
        Some(remote) => lines.push(format!("  Push branch and tag to: {}", remote)),
        None => lines.push("  Push: disabled".to_string()),
    }
    lines.join("\n")
}

/// Display the release plan before confirmation.
pub fn display_release_plan(plan: &ReleasePlan) {
    eprintln!("\n{}", format_release_plan(plan));
}

/// Display the outcome of a finished release.
pub fn display_release_outcome(outcome: &ReleaseOutcome, remote: Option<&str>) {
    display_success(&format!("Created tag: {}", outcome.tag));
    match remote {
        Some(remote) if outcome.pushed => {
            display_success(&format!("Pushed {} to {}", outcome.tag, remote))
        }
        _ => display_manual_push_instruction(&outcome.tag, remote.unwrap_or("origin")),
    }
}

/// Display manual push instruction for a tag.
///
/// Shows the git command needed to push the tag to a remote.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    eprintln!(
        "{} To push this release later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} HEAD {}", remote, tag)).cyan()
    );
}
