use indexmap::IndexSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Distinct `${NAME}` references, in first-occurrence order.
pub type TemplateRefs = IndexSet<String>;

/// How `${NAME}` matches are filtered before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplatePolicy {
    /// Keep only fully upper-case names; drop nested `{{...}}` placeholders.
    #[default]
    Filtered,
    /// Keep every match.
    Unfiltered,
}

impl std::str::FromStr for TemplatePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filtered" => Ok(Self::Filtered),
            "unfiltered" => Ok(Self::Unfiltered),
            _ => Err(format!("Unknown template policy: {s}")),
        }
    }
}

/// Scans an application config template for `${NAME}` placeholders.
pub struct TemplateRefExtractor {
    pattern: Regex,
    policy: TemplatePolicy,
}

impl Default for TemplateRefExtractor {
    fn default() -> Self {
        Self::new(TemplatePolicy::default())
    }
}

impl TemplateRefExtractor {
    #[must_use]
    pub fn new(policy: TemplatePolicy) -> Self {
        Self {
            pattern: Regex::new(r"\$\{(\w+)\}").expect("Invalid regex"),
            policy,
        }
    }

    #[must_use]
    pub fn extract(&self, content: &str) -> TemplateRefs {
        let refs: TemplateRefs = self
            .pattern
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .filter(|name| self.accepts(name))
            .collect();

        tracing::debug!(count = refs.len(), policy = ?self.policy, "extracted template references");
        refs
    }

    fn accepts(&self, name: &str) -> bool {
        match self.policy {
            TemplatePolicy::Unfiltered => true,
            TemplatePolicy::Filtered => {
                !name.starts_with("{{") && !name.ends_with("}}") && is_upper(name)
            }
        }
    }
}

/// At least one cased character and no lower-case ones.
fn is_upper(name: &str) -> bool {
    name.chars().any(char::is_uppercase) && !name.chars().any(char::is_lowercase)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
