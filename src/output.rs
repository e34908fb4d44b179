//! Output formatting and styling module.
//!
//! Centralizes all CLI output so the restoration logic never formats
//! messages itself. Progress is line-oriented: one `Moved <src> -> <dest>`
//! line per performed move, plus an opening banner and a completion message.

use colored::*;

/// Manages all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints the report line for a performed move.
    pub fn moved(source: &str, destination: &str) {
        println!("{} {} -> {}", "Moved".green(), source, destination);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an error message in red with an X mark to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
