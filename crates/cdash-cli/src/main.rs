//! COVID-19 case dashboard CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use cdash_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_countries, run_kpis, run_metrics, run_show, run_top};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));
    let result = match &cli.command {
        Command::Show(args) => run_show(args),
        Command::Kpis(args) => run_kpis(args),
        Command::Top(args) => run_top(args),
        Command::Countries(args) => run_countries(args),
        Command::Metrics => run_metrics(),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
