use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use cdash_cli::render::{self, Theme};
use cdash_core::{DEFAULT_TOP_N, aggregate, project, rank};
use cdash_ingest::{DEFAULT_DATA_PATH, load_dataset};
use cdash_model::{Dataset, Metric};

use crate::cli::{DataArgs, KpisArgs, ShowArgs, ThemeArg, TopArgs};

fn load(args: &DataArgs) -> Result<Dataset> {
    let path: PathBuf = args
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    Ok(load_dataset(&path)?)
}

fn theme_for(arg: ThemeArg) -> Theme {
    match arg {
        ThemeArg::Light => Theme::light(),
        ThemeArg::Dark => Theme::dark(),
    }
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let dataset = load(&args.data)?;
    let filter = args.country.as_deref();
    let snapshot = aggregate(&dataset, filter);
    let confirmed = rank(&dataset, Metric::Confirmed, DEFAULT_TOP_N);
    let deaths = rank(&dataset, Metric::Deaths, DEFAULT_TOP_N);
    let projection = project(&dataset);

    let theme = theme_for(args.theme);
    render::kpi_cards(&snapshot, filter, &theme);
    render::ranking_chart(&confirmed, &theme);
    render::ranking_chart(&deaths, &theme);
    render::data_grid(&projection, &theme);
    Ok(())
}

pub fn run_kpis(args: &KpisArgs) -> Result<()> {
    let dataset = load(&args.data)?;
    let snapshot = aggregate(&dataset, args.country.as_deref());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        render::kpi_cards(&snapshot, args.country.as_deref(), &Theme::light());
    }
    Ok(())
}

pub fn run_top(args: &TopArgs) -> Result<()> {
    let metric: Metric = args.metric.parse()?;
    let dataset = load(&args.data)?;
    let ranking = rank(&dataset, metric, args.limit);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    } else {
        render::ranking_chart(&ranking, &Theme::light());
    }
    Ok(())
}

pub fn run_countries(args: &DataArgs) -> Result<()> {
    let dataset = load(args)?;
    for country in dataset.countries() {
        println!("{country}");
    }
    Ok(())
}

pub fn run_metrics() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Description"]);
    render::apply_listing_style(&mut table);
    for metric in Metric::ALL {
        table.add_row(vec![metric.as_str(), metric.description()]);
    }
    println!("{table}");
    Ok(())
}
