use std::fmt::Write;

use crate::checker::{Finding, Report};
use crate::error::Result;

use super::{OutputFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

const RULE_WIDTH: usize = 50;

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    /// Opening line printed before the sources are read.
    #[must_use]
    pub const fn header() -> &'static str {
        "🔍 Validating environment variable consistency...\n\n"
    }

    /// Notice printed when the app config was read from its `.template` fallback.
    #[must_use]
    pub fn template_notice(&self) -> String {
        let notice = self.colorize(
            "⚠️  Using template files - run setup-project.sh first for accurate validation",
            ansi::YELLOW,
        );
        format!("{notice}\n")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_section(&self, output: &mut String, title: &str, color: &str, findings: &[Finding]) {
        if findings.is_empty() {
            return;
        }
        let heading = self.colorize(&format!("{title} ({}):", findings.len()), color);
        writeln!(output, "\n{heading}").ok();
        for finding in findings {
            writeln!(output, "   - {}", finding.message).ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "\n📊 Validation Results:").ok();
        writeln!(output, "{}", "=".repeat(RULE_WIDTH)).ok();

        let findings = &report.findings;
        if findings.is_empty() {
            let passed = self.colorize(
                "✅ All checks passed! Environment variables are consistent.",
                ansi::GREEN,
            );
            writeln!(output, "{passed}").ok();
            return Ok(output);
        }

        self.format_section(&mut output, "⚠️  Warnings", ansi::YELLOW, findings.warnings());
        self.format_section(&mut output, "❌ Errors", ansi::RED, findings.errors());

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
