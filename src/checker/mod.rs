mod finding;
mod rules;
mod sources;

pub use finding::{Finding, Findings, Severity};
pub use rules::{
    CicdPolicy, SourceNames, check_cicd_documentation, check_runtime_vs_deploy,
    check_secret_leaks, check_template_coverage, select_cicd_vars,
};
pub use sources::{SourcePaths, Sources};

use std::io::Write;

use crate::config::PolicyConfig;
use crate::{EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

/// Outcome of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub findings: Findings,
    /// The application config was read from its `.template` fallback.
    pub used_templates: bool,
}

impl Report {
    /// `EXIT_SUCCESS` unless at least one error was recorded.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.findings.has_errors() {
            EXIT_VALIDATION_FAILED
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Runs the four consistency rules over extracted sources.
#[derive(Debug, Clone, Default)]
pub struct ConsistencyChecker {
    policy: PolicyConfig,
}

impl ConsistencyChecker {
    #[must_use]
    pub const fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// Run rules 1 to 4 in order, announcing each on `progress` as it starts.
    ///
    /// Findings raised during extraction come first, followed by each rule's
    /// findings in rule order. Write failures on `progress` are ignored.
    pub fn validate<W: Write>(&self, sources: &Sources, progress: &mut W) -> Report {
        let names = sources.paths.names();
        let runtime = &sources.labels.labels.runtime;
        let mut findings: Findings = sources.labels.findings.iter().cloned().collect();

        writeln!(
            progress,
            "1️⃣ Checking runtime variables (Docker labels vs deploy script)..."
        )
        .ok();
        if sources.deploy_script.is_dynamic() {
            writeln!(
                progress,
                "   ✅ {} uses dynamic discovery from Docker labels",
                names.deploy_script
            )
            .ok();
        }
        findings.extend(check_runtime_vs_deploy(
            runtime,
            &sources.deploy_script,
            &self.policy.exempt_credentials,
            &names,
        ));

        writeln!(progress, "2️⃣ Checking {} variables...", names.app_config).ok();
        findings.extend(check_template_coverage(
            &sources.template_refs,
            runtime,
            &sources.deploy_script,
            &names,
        ));

        writeln!(progress, "3️⃣ Checking CI/CD variables...").ok();
        findings.extend(check_cicd_documentation(
            &sources.workflow_env,
            &sources.labels.labels.cicd,
            &self.policy,
        ));

        writeln!(progress, "4️⃣ Checking {} variables...", names.config_env).ok();
        findings.extend(check_secret_leaks(
            &sources.config_env,
            &self.policy.secret_markers,
            &names,
        ));

        tracing::info!(
            errors = findings.errors().len(),
            warnings = findings.warnings().len(),
            "validation finished"
        );

        Report {
            findings,
            used_templates: sources.paths.uses_templates(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
