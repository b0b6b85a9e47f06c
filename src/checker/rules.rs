use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::extract::{ConfigEnvVars, DeployScriptVars, LabelSet, TemplateRefs, WorkflowEnv};

use super::Finding;

/// Which workflow variables are expected to be documented as CI/CD labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CicdPolicy {
    /// Every workflow variable matching a cloud-provider prefix or a
    /// credential suffix.
    #[default]
    Pattern,
    /// Only names from a fixed credential list that the workflow sets.
    FixedList,
}

impl std::str::FromStr for CicdPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pattern" => Ok(Self::Pattern),
            "fixed-list" | "fixed" => Ok(Self::FixedList),
            _ => Err(format!("Unknown CI/CD policy: {s}")),
        }
    }
}

/// Display names of the inspected files, used in finding messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNames {
    pub deploy_script: String,
    pub app_config: String,
    pub config_env: String,
}

/// Rule 1: runtime labels and the deploy script's static list must agree.
///
/// Always satisfied when the script discovers variables dynamically.
#[must_use]
pub fn check_runtime_vs_deploy(
    runtime: &LabelSet,
    deploy: &DeployScriptVars,
    exempt: &[String],
    names: &SourceNames,
) -> Vec<Finding> {
    let Some(passed) = deploy.names() else {
        return Vec::new();
    };
    let script = &names.deploy_script;

    let missing = runtime
        .keys()
        .filter(|var| !passed.contains(*var))
        .map(|var| {
            Finding::error(format!(
                "Runtime var {var} in Docker labels but not passed by {script}"
            ))
        });

    let undocumented = passed
        .iter()
        .filter(|var| !runtime.contains_key(var.as_str()) && !exempt.contains(*var))
        .map(|var| {
            Finding::warning(format!(
                "Variable {var} passed by {script} but not documented in Docker labels"
            ))
        });

    missing.chain(undocumented).collect()
}

/// Rule 2: every template reference must be a documented runtime variable,
/// and must be forwarded by the deploy script when it has a static list.
#[must_use]
pub fn check_template_coverage(
    refs: &TemplateRefs,
    runtime: &LabelSet,
    deploy: &DeployScriptVars,
    names: &SourceNames,
) -> Vec<Finding> {
    let config = &names.app_config;
    let mut findings = Vec::new();

    for var in refs {
        if !runtime.contains_key(var) {
            findings.push(Finding::error(format!(
                "Variable ${{{var}}} used in {config} but not documented as runtime requirement"
            )));
        }
        if !deploy.passes(var) {
            findings.push(Finding::error(format!(
                "Variable ${{{var}}} used in {config} but not passed by {}",
                names.deploy_script
            )));
        }
    }

    findings
}

/// Rule 3: credential-like workflow variables should be documented as CI/CD
/// labels.
#[must_use]
pub fn check_cicd_documentation(
    workflow_env: &WorkflowEnv,
    cicd: &LabelSet,
    policy: &PolicyConfig,
) -> Vec<Finding> {
    select_cicd_vars(workflow_env, policy)
        .into_iter()
        .filter(|var| !cicd.contains_key(*var))
        .map(|var| {
            Finding::warning(format!(
                "CI/CD variable {var} used in workflow but not documented in Docker labels"
            ))
        })
        .collect()
}

/// Workflow variables subject to rule 3 under the configured policy.
#[must_use]
pub fn select_cicd_vars<'a>(workflow_env: &'a WorkflowEnv, policy: &'a PolicyConfig) -> Vec<&'a str> {
    match policy.cicd_vars {
        CicdPolicy::Pattern => workflow_env
            .keys()
            .map(String::as_str)
            .filter(|var| {
                policy.cicd_prefixes.iter().any(|p| var.starts_with(p.as_str()))
                    || policy.cicd_suffixes.iter().any(|s| var.ends_with(s.as_str()))
            })
            .collect(),
        CicdPolicy::FixedList => policy
            .cicd_credentials
            .iter()
            .map(String::as_str)
            .filter(|var| workflow_env.contains_key(*var))
            .collect(),
    }
}

/// Rule 4: a plain env template must not carry secret-looking names.
#[must_use]
pub fn check_secret_leaks(
    config_env: &ConfigEnvVars,
    markers: &[String],
    names: &SourceNames,
) -> Vec<Finding> {
    config_env
        .keys()
        .filter(|var| markers.iter().any(|m| var.contains(m.as_str())))
        .map(|var| {
            Finding::error(format!(
                "Potential secret {var} found in {} (should be stored in a secret manager)",
                names.config_env
            ))
        })
        .collect()
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
