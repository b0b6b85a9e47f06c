use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{EnvGuardError, Result};

/// The workflow's top-level `env:` block, in declaration order.
pub type WorkflowEnv = IndexMap<String, serde_yaml::Value>;

#[derive(Debug, Deserialize)]
struct WorkflowDocument {
    #[serde(default)]
    env: Option<WorkflowEnv>,
}

/// Parse a CI workflow definition and return its `env` mapping.
///
/// A missing or null `env` key yields an empty mapping.
///
/// # Errors
/// Returns [`EnvGuardError::WorkflowParse`] if the document is not valid YAML
/// or is not a mapping at the top level.
pub fn extract_workflow_env(content: &str, path: &Path) -> Result<WorkflowEnv> {
    let document: WorkflowDocument =
        serde_yaml::from_str(content).map_err(|source| EnvGuardError::WorkflowParse {
            path: path.to_path_buf(),
            source,
        })?;

    let env = document.env.unwrap_or_default();
    tracing::debug!(count = env.len(), "extracted workflow env block");
    Ok(env)
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
