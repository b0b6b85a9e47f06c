use regex::Regex;

/// Variables a deploy script forwards to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployScriptVars {
    /// Names enumerated by a `for var in ...; do` loop, in script order.
    Static(Vec<String>),
    /// The script discovers variables from the image labels at deploy time;
    /// no static list exists.
    Dynamic,
}

impl DeployScriptVars {
    /// The static name list, or `None` in dynamic-discovery mode.
    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Self::Static(names) => Some(names),
            Self::Dynamic => None,
        }
    }

    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }

    /// Whether `name` is forwarded by the script. Always true in dynamic mode.
    #[must_use]
    pub fn passes(&self, name: &str) -> bool {
        match self {
            Self::Static(names) => names.iter().any(|n| n == name),
            Self::Dynamic => true,
        }
    }
}

/// Detects which of the two deploy-script styles a script uses.
pub struct DeployScriptExtractor {
    loop_pattern: Regex,
}

impl Default for DeployScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeployScriptExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loop_pattern: Regex::new(
                r"(?m)^[ \t]*for[ \t]+var[ \t]+in[ \t]+([A-Za-z_]\w*(?:[ \t]+[A-Za-z_]\w*)*)[ \t]*;[ \t]*do\b",
            )
            .expect("Invalid regex"),
        }
    }

    /// Static-list mode if a line opens a `for var in NAMES; do` loop over
    /// literal variable names, dynamic-discovery mode otherwise. Loops over
    /// expansions such as `$VARS` or `$(...)` and commented-out headers do
    /// not count.
    #[must_use]
    pub fn extract(&self, content: &str) -> DeployScriptVars {
        let Some(caps) = self.loop_pattern.captures(content) else {
            tracing::debug!("deploy script uses dynamic discovery");
            return DeployScriptVars::Dynamic;
        };

        let names: Vec<String> = caps[1].split_whitespace().map(str::to_string).collect();
        tracing::debug!(count = names.len(), "deploy script enumerates a static list");
        DeployScriptVars::Static(names)
    }
}

#[cfg(test)]
#[path = "deploy_script_tests.rs"]
mod tests;
