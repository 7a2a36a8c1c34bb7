use colored::Colorize;
use std::path::Path;

use flowts_common::Diagnostic;

use crate::driver::RunResult;

/// Formats warnings and per-file errors for the terminal or as JSON.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `Warning: <message> (at <file>: line L, column C). See <url>`
    pub fn format_warning(&self, file: &Path, diagnostic: &Diagnostic) -> String {
        let label = if self.color {
            "Warning".yellow().bold().to_string()
        } else {
            "Warning".to_string()
        };
        let url = if self.color {
            diagnostic.reference_url.as_str().underline().to_string()
        } else {
            diagnostic.reference_url.clone()
        };
        format!(
            "{label}: {} (at {}: line {}, column {}). See {url}",
            diagnostic.message_text,
            file.display(),
            diagnostic.line,
            diagnostic.column,
        )
    }

    pub fn format_error(&self, file: &Path, message: &str) -> String {
        let label = if self.color {
            "Error".red().bold().to_string()
        } else {
            "Error".to_string()
        };
        format!("{label}: {message} (in {})", file.display())
    }

    fn format_summary(&self, result: &RunResult) -> String {
        let summary = format!(
            "Translated {} of {} file(s) with {} warning(s)",
            result.files.len() - result.failed_count(),
            result.files.len(),
            result.warning_count(),
        );
        if self.color && result.failed_count() > 0 {
            summary.red().to_string()
        } else {
            summary
        }
    }

    /// Text report: every warning and error, then a summary line.
    pub fn render(&self, result: &RunResult) -> String {
        let mut out = String::new();
        for file in &result.files {
            for diagnostic in &file.warnings {
                out.push_str(&self.format_warning(&file.path, diagnostic));
                out.push('\n');
            }
            if let Some(error) = &file.error {
                out.push_str(&self.format_error(&file.path, error));
                out.push('\n');
            }
        }
        out.push_str(&self.format_summary(result));
        out.push('\n');
        out
    }

    /// JSON report: the per-file outcomes.
    pub fn render_json(&self, result: &RunResult) -> serde_json::Result<String> {
        serde_json::to_string_pretty(result)
    }
}

#[cfg(test)]
#[path = "../tests/reporter.rs"]
mod tests;
