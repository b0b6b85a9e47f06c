use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checker::CicdPolicy;
use crate::extract::TemplatePolicy;

/// Locations of the inspected artifacts, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default = "default_dockerfile")]
    pub dockerfile: PathBuf,

    #[serde(default = "default_deploy_script")]
    pub deploy_script: PathBuf,

    #[serde(default = "default_workflow")]
    pub workflow: PathBuf,

    /// Processed application config; falls back to `<path>.template`.
    #[serde(default = "default_app_config")]
    pub app_config: PathBuf,

    /// Processed `KEY=value` file; falls back to `<path>.template`.
    #[serde(default = "default_config_env")]
    pub config_env: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dockerfile: default_dockerfile(),
            deploy_script: default_deploy_script(),
            workflow: default_workflow(),
            app_config: default_app_config(),
            config_env: default_config_env(),
        }
    }
}

/// Policy knobs for the comparison rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Filtering applied to `${NAME}` references.
    #[serde(default)]
    pub template_refs: TemplatePolicy,

    /// Selection of workflow variables checked against CI/CD labels.
    #[serde(default)]
    pub cicd_vars: CicdPolicy,

    /// Credentials the deploy script may pass without a runtime label.
    #[serde(default = "default_exempt_credentials")]
    pub exempt_credentials: Vec<String>,

    #[serde(default = "default_cicd_prefixes")]
    pub cicd_prefixes: Vec<String>,

    #[serde(default = "default_cicd_suffixes")]
    pub cicd_suffixes: Vec<String>,

    /// Names checked under the `fixed-list` CI/CD policy.
    #[serde(default = "default_cicd_credentials")]
    pub cicd_credentials: Vec<String>,

    /// Case-sensitive substrings marking a name as secret-looking.
    #[serde(default = "default_secret_markers")]
    pub secret_markers: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            template_refs: TemplatePolicy::default(),
            cicd_vars: CicdPolicy::default(),
            exempt_credentials: default_exempt_credentials(),
            cicd_prefixes: default_cicd_prefixes(),
            cicd_suffixes: default_cicd_suffixes(),
            cicd_credentials: default_cicd_credentials(),
            secret_markers: default_secret_markers(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub policy: PolicyConfig,
}

fn default_dockerfile() -> PathBuf {
    PathBuf::from("deployment/Dockerfile")
}

fn default_deploy_script() -> PathBuf {
    PathBuf::from(".github/scripts/deploy-app-runner.sh")
}

fn default_workflow() -> PathBuf {
    PathBuf::from(".github/workflows/deploy.yml")
}

fn default_app_config() -> PathBuf {
    PathBuf::from("deployment/mxcp-user-config.yml")
}

fn default_config_env() -> PathBuf {
    PathBuf::from("deployment/config.env")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_exempt_credentials() -> Vec<String> {
    strings(&["MXCP_DATA_ACCESS_KEY_ID", "MXCP_DATA_SECRET_ACCESS_KEY"])
}

fn default_cicd_prefixes() -> Vec<String> {
    strings(&["AWS_"])
}

fn default_cicd_suffixes() -> Vec<String> {
    strings(&["_ACCESS_KEY_ID", "_SECRET_ACCESS_KEY"])
}

fn default_cicd_credentials() -> Vec<String> {
    strings(&[
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "MXCP_DATA_ACCESS_KEY_ID",
        "MXCP_DATA_SECRET_ACCESS_KEY",
    ])
}

fn default_secret_markers() -> Vec<String> {
    strings(&["KEY", "SECRET", "TOKEN"])
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
