//! Extraction of variable sets from the five deployment artifacts.
//!
//! Every extractor works on already-read text and has no side effects beyond
//! logging; reading files is the caller's concern.

mod config_env;
mod deploy_script;
mod labels;
mod template;
mod workflow;

pub use config_env::{ConfigEnvVars, parse_config_env};
pub use deploy_script::{DeployScriptExtractor, DeployScriptVars};
pub use labels::{DockerLabels, LabelExtraction, LabelExtractor, LabelSet};
pub use template::{TemplatePolicy, TemplateRefExtractor, TemplateRefs};
pub use workflow::{WorkflowEnv, extract_workflow_env};
