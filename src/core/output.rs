//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Stateless formatting functions for every message class git-stager emits.
//! Each class carries a distinct marker glyph and color so users can tell
//! success, error, info, and warning apart at a glance.
//!
//! # Design Principles
//! - **Consistent marker glyphs**: ✓ success, ✗ error, ℹ info, ⚠ warning
//! - **Banner headers**: fixed-width rule with centered text
//! - **Total functions**: no input string can make these panic

use colored::*;

/// Width of the header banner rule
const HEADER_WIDTH: usize = 60;

/// Formats and prints a banner header
///
/// # Format
/// ```text
///
/// ============================================================
///                         <text>
/// ============================================================
///
/// ```
pub fn print_header(text: &str) {
    let rule = "=".repeat(HEADER_WIDTH);
    println!("\n{}", rule.magenta().bold());
    println!(
        "{}",
        format!("{:^width$}", text, width = HEADER_WIDTH).magenta().bold()
    );
    println!("{}\n", rule.magenta().bold());
}

/// Formats and prints a success message: `✓ <message>` in green
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message.green());
}

/// Formats and prints an error message: `✗ <message>` in red
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red(), message.red());
}

/// Formats and prints an informational message: `ℹ <message>` in cyan
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".cyan(), message.cyan());
}

/// Formats and prints a warning message: `⚠ <message>` in yellow
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message.yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_header_does_not_panic() {
        print_header("Repository Status");
    }

    #[test]
    fn test_print_header_long_text_does_not_panic() {
        print_header(&"x".repeat(500));
    }

    #[test]
    fn test_print_header_empty_text_does_not_panic() {
        print_header("");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Operation completed");
    }

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_info_does_not_panic() {
        print_info("Information message");
    }

    #[test]
    fn test_print_warning_does_not_panic() {
        print_warning("Invalid number: 99");
    }

    #[test]
    fn test_color_functions_available() {
        let _ = "test".red();
        let _ = "test".green();
        let _ = "test".cyan();
        let _ = "test".yellow();
    }
}
