use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use env_guard::EXIT_RUNTIME_ERROR;
use env_guard::checker::{ConsistencyChecker, Report, Sources};
use env_guard::cli::Cli;
use env_guard::config::{Config, ConfigLoader, FileConfigLoader, RealFileSystem};
use env_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, print_error_full,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error_full(cli.color.into(), &e);
            EXIT_RUNTIME_ERROR
        }
    };

    std::process::exit(exit_code);
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> env_guard::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(&cli.root, cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);

    let checker = ConsistencyChecker::new(config.policy.clone());
    let color_mode: ColorMode = cli.color.into();

    // 2. Extract, check and report
    let report = match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(color_mode);
            let mut stdout = io::stdout().lock();
            let report = run_text(cli, &config, &checker, &formatter, &mut stdout)?;
            write!(stdout, "{}", formatter.format(&report)?)?;
            report
        }
        OutputFormat::Json => {
            let sources = Sources::load(&RealFileSystem, &cli.root, &config.sources, &config.policy)?;
            let report = checker.validate(&sources, &mut io::sink());
            println!("{}", JsonFormatter.format(&report)?);
            report
        }
    };

    // 3. Determine exit code
    Ok(report.exit_code())
}

fn run_text<W: Write>(
    cli: &Cli,
    config: &Config,
    checker: &ConsistencyChecker,
    formatter: &TextFormatter,
    out: &mut W,
) -> env_guard::Result<Report> {
    if !cli.quiet {
        write!(out, "{}", TextFormatter::header())?;
    }

    let sources = Sources::load(&RealFileSystem, &cli.root, &config.sources, &config.policy)?;

    if cli.quiet {
        return Ok(checker.validate(&sources, &mut io::sink()));
    }
    if sources.paths.uses_templates() {
        write!(out, "{}", formatter.template_notice())?;
    }
    Ok(checker.validate(&sources, out))
}

fn load_config(root: &Path, config_path: Option<&Path>, no_config: bool) -> env_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new(root);
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(policy) = cli.template_policy {
        config.policy.template_refs = policy;
    }
    if let Some(policy) = cli.cicd_policy {
        config.policy.cicd_vars = policy;
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
