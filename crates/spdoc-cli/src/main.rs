//! Stored procedure documentation CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use spdoc_catalog::{Catalog, load_builtin_catalog, load_catalog};
use spdoc_cli::logging::{LogConfig, LogFormat, init_logging};
use spdoc_cli::settings::{Settings, load_settings};
use spdoc_model::FilterComposition;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, ComposeArg, LogFormatArg, LogLevelArg};
use crate::commands::{run_browse, run_config, run_html, run_list, run_reports, run_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(compose) = cli.compose {
        settings.view.composition = match compose {
            ComposeArg::Override => FilterComposition::Override,
            ComposeArg::Intersect => FilterComposition::Intersect,
        };
    }
    if let Command::Config = cli.command {
        return run_config(&settings);
    }

    let catalog = resolve_catalog(cli, &settings)?;
    let options = settings.page_options();
    match &cli.command {
        Command::List(args) => run_list(&catalog, options, args),
        Command::Show(args) => run_show(&catalog, args),
        Command::Reports(args) => run_reports(&catalog, options, args),
        Command::Html(args) => run_html(&catalog, options, args),
        Command::Browse => run_browse(&catalog, options),
        Command::Config => run_config(&settings),
    }
}

/// `--catalog` wins over the settings file, which wins over the built-in data.
fn resolve_catalog(cli: &Cli, settings: &Settings) -> Result<Catalog> {
    match cli.catalog.as_deref().or(settings.catalog.path.as_deref()) {
        Some(path) => {
            load_catalog(path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => load_builtin_catalog().context("load built-in catalog"),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config = config.with_level(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        });
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
