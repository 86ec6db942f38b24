//! Human-readable rendering of contract failures.

use std::io::IsTerminal;

use crate::error::Error;

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Formatter for failure output, for humans rather than for matching.
///
/// Use the builder pattern to configure rendering:
///
/// ```rust,ignore
/// use affirm::Reporter;
///
/// let reporter = Reporter::new().colors(false).truncate_at(80);
/// println!("{}", reporter.format_failures(&errors));
/// ```
#[derive(Debug, Clone)]
pub struct Reporter {
    /// Whether to use ANSI colors in output.
    pub colors_enabled: bool,
    /// Maximum characters before truncating context values.
    pub truncate_at: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            colors_enabled: std::io::stdout().is_terminal(),
            truncate_at: 60,
        }
    }
}

impl Reporter {
    /// Create a reporter with defaults: 60 character truncation, colors
    /// auto-detected from TTY.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Set the maximum characters before truncating context values.
    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }

    /// Format a single failure: code, message, and indented context pairs.
    pub fn format_error(&self, error: &Error) -> String {
        let code = error.code().path();
        let mut output = if self.colors_enabled {
            format!("  [{}{}{}] {}\n", CYAN, code, RESET, error.message())
        } else {
            format!("  [{}] {}\n", code, error.message())
        };

        for (key, value) in error.context() {
            output.push_str(&format!("      {} = {}\n", key, self.truncate(value)));
        }
        output
    }

    /// Format a collected failure set, numbered in call order.
    pub fn format_failures(&self, errors: &[Error]) -> String {
        if errors.is_empty() {
            return "contract failures: (none)\n".to_string();
        }

        let mut output = if self.colors_enabled {
            format!("{}contract failures ({}):{}\n", RED, errors.len(), RESET)
        } else {
            format!("contract failures ({}):\n", errors.len())
        };

        for (i, error) in errors.iter().enumerate() {
            output.push_str(&format!("{}.", i + 1));
            // format_error indents by two; drop one to make room for the number
            output.push_str(&self.format_error(error)[1..]);
        }
        output
    }

    /// Print a collected failure set to stdout, if there is anything to say.
    pub fn print_failures(&self, errors: &[Error]) {
        if errors.is_empty() {
            return;
        }
        print!("{}", self.format_failures(errors));
    }

    /// Truncate a string to the configured maximum length.
    /// Handles multi-byte UTF-8 characters safely.
    fn truncate(&self, s: &str) -> String {
        let max = self.truncate_at;
        let char_count = s.chars().count();

        if char_count <= max {
            s.to_string()
        } else {
            // Reserve 3 chars for "..."
            let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
            format!("{}...", truncated)
        }
    }
}
