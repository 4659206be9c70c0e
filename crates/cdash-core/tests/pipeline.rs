//! End-to-end scenario over the load-free core: aggregate, rank, project.

use cdash_core::{DEFAULT_TOP_N, aggregate, project, rank};
use cdash_model::{CaseRecord, Dataset, KpiSnapshot, Metric};

fn record(country: &str, confirmed: u64, deaths: u64, recovered: u64, active: u64) -> CaseRecord {
    CaseRecord {
        country: country.to_string(),
        confirmed,
        deaths,
        recovered,
        active,
    }
}

fn scenario() -> Dataset {
    Dataset::new(vec![
        record("USA", 100, 10, 80, 10),
        record("USA", 50, 5, 40, 5),
        record("Italy", 30, 3, 20, 7),
    ])
}

#[test]
fn unfiltered_kpis() {
    let snapshot = aggregate(&scenario(), None);
    assert_eq!(
        snapshot,
        KpiSnapshot {
            confirmed: 180,
            deaths: 18,
            recovered: 140,
            active: 22,
        }
    );
}

#[test]
fn filtered_kpis_sum_every_matching_row() {
    let snapshot = aggregate(&scenario(), Some("USA"));
    assert_eq!(
        snapshot,
        KpiSnapshot {
            confirmed: 150,
            deaths: 15,
            recovered: 120,
            active: 15,
        }
    );
}

#[test]
fn unmatched_filter_is_all_zeros() {
    assert_eq!(aggregate(&scenario(), Some("France")), KpiSnapshot::default());
}

#[test]
fn confirmed_ranking_keeps_per_row_entries() {
    let ranking = rank(&scenario(), Metric::Confirmed, DEFAULT_TOP_N);
    let pairs: Vec<(&str, u64)> = ranking
        .entries
        .iter()
        .map(|entry| (entry.country.as_str(), entry.value))
        .collect();
    assert_eq!(pairs, vec![("USA", 100), ("USA", 50), ("Italy", 30)]);
}

#[test]
fn projection_orders_the_grid_by_confirmed() {
    let dataset = scenario();
    let projection = project(&dataset);
    assert_eq!(projection.row_count(), 3);
    assert_eq!(projection.cell(0, 0), Some("USA"));
    assert_eq!(projection.cell(0, 1), Some("100"));
    assert_eq!(projection.cell(2, 0), Some("Italy"));
    // Derived views leave the base table untouched.
    assert_eq!(dataset.records()[0].country, "USA");
    assert_eq!(projection, project(&dataset));
}
