//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use anyhow::Result;
use console::Term;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_manual_push_instruction, display_release_outcome,
    display_release_plan, display_status, display_success, display_warning,
};

/// Interprets a yes/no answer; anything but "y"/"yes" is a no.
pub fn is_affirmative(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Default is "no" if user presses Enter. Without an attended terminal the
/// answer is always "no"; pass `--yes` to release from scripts.
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise
/// * `Err` - If input error occurs
pub fn confirm_action(prompt: &str) -> Result<bool> {
    let term = Term::stderr();
    if !term.is_term() {
        tracing::debug!(prompt, "no terminal attached, declining");
        return Ok(false);
    }

    term.write_str(&format!("\n{} (y/N): ", prompt))?;
    term.flush()?;
    let response = term.read_line()?;
    Ok(is_affirmative(&response))
}
