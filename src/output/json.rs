use serde::Serialize;

use crate::checker::{Finding, Report};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    used_templates: bool,
    errors: Vec<&'a str>,
    warnings: Vec<&'a str>,
}

#[derive(Serialize)]
struct Summary {
    passed: bool,
    errors: usize,
    warnings: usize,
}

fn messages(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.message.as_str()).collect()
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let findings = &report.findings;
        let output = JsonOutput {
            summary: Summary {
                passed: !findings.has_errors(),
                errors: findings.errors().len(),
                warnings: findings.warnings().len(),
            },
            used_templates: report.used_templates,
            errors: messages(findings.errors()),
            warnings: messages(findings.warnings()),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
