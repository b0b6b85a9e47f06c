use indexmap::IndexMap;

/// `KEY=value` pairs from a plain env template.
pub type ConfigEnvVars = IndexMap<String, String>;

/// Parse a `KEY=value` file.
///
/// Blank lines and `#` comments are skipped, as are lines without `=`.
/// One layer of surrounding double quotes is stripped from each value.
/// A repeated key overwrites the earlier value.
#[must_use]
pub fn parse_config_env(content: &str) -> ConfigEnvVars {
    let mut vars = ConfigEnvVars::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        vars.insert(key.trim_end().to_string(), strip_quotes(value).to_string());
    }

    tracing::debug!(count = vars.len(), "parsed config env file");
    vars
}

fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

#[cfg(test)]
#[path = "config_env_tests.rs"]
mod tests;
