use indexmap::IndexMap;
use regex::Regex;

use crate::checker::Finding;

/// Variables declared for one label namespace, in declaration order.
pub type LabelSet = IndexMap<String, serde_json::Value>;

/// `env.*` labels split by phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerLabels {
    /// `env.runtime.*`: variables the running container expects.
    pub runtime: LabelSet,
    /// `env.cicd.*`: variables needed by build/deploy automation.
    pub cicd: LabelSet,
}

/// Labels together with the findings raised while parsing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelExtraction {
    pub labels: DockerLabels,
    pub findings: Vec<Finding>,
}

/// Extracts `LABEL env.<runtime|cicd>.<NAME>='<json>'` declarations.
pub struct LabelExtractor {
    pattern: Regex,
}

impl Default for LabelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?m)LABEL\s+env\.(runtime|cicd)\.(\w+)='(\{.*?\})'")
                .expect("Invalid regex"),
        }
    }

    /// Parse every matching label in `content`.
    ///
    /// A label whose payload is not valid JSON is dropped and reported as an
    /// error finding; extraction continues with the remaining labels.
    #[must_use]
    pub fn extract(&self, content: &str) -> LabelExtraction {
        let mut result = LabelExtraction::default();

        for caps in self.pattern.captures_iter(content) {
            let phase = &caps[1];
            let name = &caps[2];
            let payload = &caps[3];

            match serde_json::from_str::<serde_json::Value>(payload) {
                Ok(value) => {
                    let target = if phase == "runtime" {
                        &mut result.labels.runtime
                    } else {
                        &mut result.labels.cicd
                    };
                    target.insert(name.to_string(), value);
                }
                Err(e) => {
                    tracing::warn!(label = name, error = %e, "malformed JSON in Docker label");
                    result
                        .findings
                        .push(Finding::error(format!("Invalid JSON in Docker label for {name}")));
                }
            }
        }

        tracing::debug!(
            runtime = result.labels.runtime.len(),
            cicd = result.labels.cicd.len(),
            "extracted Docker labels"
        );
        result
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
