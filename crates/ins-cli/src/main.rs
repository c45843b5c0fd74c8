//! Insurance enumeration catalog CLI.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use ins_catalog::CatalogConfig;
use ins_cli::commands::{run_decode, run_encode, run_lookup, run_members, run_tables};
use ins_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<String> {
    if let Some(dir) = &cli.catalog_dir {
        ins_catalog::install(&CatalogConfig::directory(dir))
            .with_context(|| format!("load catalog from {}", dir.display()))?;
    }
    match &cli.command {
        Command::Tables => run_tables(),
        Command::Members(args) => run_members(&args.enumeration, args.sorted, args.json),
        Command::Lookup(args) => run_lookup(&args.enumeration, &args.value, args.alternative),
        Command::Encode(args) => run_encode(
            &args.enumeration,
            &args.value,
            args.format.into(),
            args.tag.as_deref(),
        ),
        Command::Decode(args) => run_decode(
            &args.enumeration,
            &args.input,
            args.format.into(),
            args.validated,
        ),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
