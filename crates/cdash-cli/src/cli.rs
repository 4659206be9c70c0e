//! CLI argument definitions for the dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cdash",
    version,
    about = "COVID-19 case dashboard - KPI totals, country rankings, and a data grid",
    long_about = "Load a COVID-19 case-count table and present it as KPI cards,\n\
                  top-10 country charts, and a sorted data grid, with an optional\n\
                  single-country filter for the KPI totals."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the full dashboard: KPI cards, top-10 charts, and the data grid.
    Show(ShowArgs),

    /// Print the four KPI totals, optionally filtered to one country.
    Kpis(KpisArgs),

    /// Print the top countries for one metric.
    Top(TopArgs),

    /// List the countries available to the filter.
    Countries(DataArgs),

    /// List the supported metrics.
    Metrics,
}

#[derive(Parser)]
pub struct DataArgs {
    /// Path to the case table (default: data/dataset.csv).
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Restrict the KPI totals to one country. Chart rankings always cover
    /// the full dataset.
    #[arg(long = "country", value_name = "NAME")]
    pub country: Option<String>,

    /// Color palette for the rendered dashboard.
    #[arg(long = "theme", value_enum, default_value = "light")]
    pub theme: ThemeArg,
}

#[derive(Parser)]
pub struct KpisArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Restrict the totals to one country.
    #[arg(long = "country", value_name = "NAME")]
    pub country: Option<String>,

    /// Emit JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TopArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Metric to rank by (Confirmed, Deaths, Recovered, Active).
    #[arg(long = "metric", value_name = "METRIC")]
    pub metric: String,

    /// Number of countries to keep.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Emit JSON instead of a chart.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI theme choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
