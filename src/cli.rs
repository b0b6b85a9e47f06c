use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::checker::CicdPolicy;
use crate::extract::TemplatePolicy;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "env-guard")]
#[command(
    author,
    version,
    about = "Cross-check environment variable declarations across deployment artifacts"
)]
#[command(long_about = "Compares the env.* labels of the container build file with the deploy \
    script, the CI workflow env block, the application config template and the plain \
    KEY=value template.\n\n\
    Exit codes:\n  \
    0 - No errors (warnings allowed)\n  \
    1 - One or more consistency errors\n  \
    2 - Missing file, malformed workflow or configuration error")]
pub struct Cli {
    /// Project root that source paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file (default: <root>/.env-guard.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Template reference filtering [possible values: filtered, unfiltered]
    #[arg(long)]
    pub template_policy: Option<TemplatePolicy>,

    /// CI/CD variable selection [possible values: pattern, fixed-list]
    #[arg(long)]
    pub cicd_policy: Option<CicdPolicy>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print the results section
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
