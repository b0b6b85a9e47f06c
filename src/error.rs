use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse workflow document: {path}")]
    WorkflowParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl EnvGuardError {
    /// Short category label used as the headline of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::WorkflowParse { .. } => "WorkflowParse",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } | Self::WorkflowParse { path, .. } => {
                path.display().to_string()
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, if the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::WorkflowParse { source, .. } => Some(source.to_string()),
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("run from the repository root, or pass --root / set [sources] in .env-guard.toml")
            }
            Self::WorkflowParse { .. } => Some("check the workflow file is valid YAML"),
            Self::TomlParse(_) => Some("check the syntax of .env-guard.toml"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
