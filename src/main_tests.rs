use std::path::Path;

use clap::Parser;
use env_guard::checker::CicdPolicy;
use env_guard::cli::Cli;
use env_guard::config::Config;
use env_guard::extract::TemplatePolicy;
use env_guard::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};
use tempfile::TempDir;

use crate::{apply_cli_overrides, load_config};

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_VALIDATION_FAILED, 1);
    assert_eq!(EXIT_RUNTIME_ERROR, 2);
}

#[test]
fn load_config_no_config_returns_default() {
    let config = load_config(Path::new("."), Some(Path::new("missing.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Path::new("."), Some(Path::new("nonexistent.toml")), false);
    assert!(result.is_err());
}

#[test]
fn load_config_without_file_in_root_returns_default() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path(), None, false).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn cli_overrides_replace_config_policies() {
    let mut config = Config::default();
    let cli = Cli::parse_from([
        "env-guard",
        "--template-policy",
        "unfiltered",
        "--cicd-policy",
        "fixed-list",
    ]);
    apply_cli_overrides(&mut config, &cli);
    assert_eq!(config.policy.template_refs, TemplatePolicy::Unfiltered);
    assert_eq!(config.policy.cicd_vars, CicdPolicy::FixedList);
}

#[test]
fn absent_overrides_keep_config() {
    let mut config = Config::default();
    config.policy.cicd_vars = CicdPolicy::FixedList;
    apply_cli_overrides(&mut config, &Cli::parse_from(["env-guard"]));
    assert_eq!(config.policy.cicd_vars, CicdPolicy::FixedList);
}
