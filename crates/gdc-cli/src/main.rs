//! GDC and TCGA clinical data tools.

use clap::{ColorChoice, Parser};
use gdc_api::ApiError;
use gdc_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    api_config, run_case2clinical, run_choices, run_clinical2xml, run_file2case, run_manifest,
    run_parse_clinical_command,
};
use crate::summary::{
    print_clinical_summary, print_download_summary, print_lookup_summary, print_manifest_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            let report = error_report(&error);
            eprintln!("{report}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let api = || api_config(cli.api_url.as_deref(), cli.timeout);
    match &cli.command {
        Command::ParseClinical(args) => {
            let result = run_parse_clinical_command(args)?;
            print_clinical_summary(&result);
            Ok(if result.has_errors { 1 } else { 0 })
        }
        Command::File2case(args) => {
            print_lookup_summary(&run_file2case(args, api()?)?);
            Ok(0)
        }
        Command::Case2clinical(args) => {
            print_lookup_summary(&run_case2clinical(args, api()?)?);
            Ok(0)
        }
        Command::Manifest(args) => {
            print_manifest_summary(&run_manifest(args, api()?)?);
            Ok(0)
        }
        Command::Clinical2xml(args) => {
            print_download_summary(&run_clinical2xml(args, api()?)?);
            Ok(0)
        }
        Command::Choices => {
            run_choices()?;
            Ok(0)
        }
    }
}

/// Terminal text for a failed command: a short hint for API failures, then the cause chain.
fn error_report(error: &anyhow::Error) -> String {
    let api_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ApiError>());
    match api_error {
        Some(api_error) => format!("error: {}\n  {error:#}", api_error.user_message()),
        None => format!("error: {error:#}"),
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
