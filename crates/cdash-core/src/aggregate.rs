use tracing::debug;

use cdash_model::{Dataset, KpiSnapshot, Metric, Ranking, RankingEntry};

/// Chart depth used by the dashboard.
pub const DEFAULT_TOP_N: usize = 10;

/// Sum the four metrics over rows matching `filter`, or over all rows.
///
/// The filter is a case-sensitive exact match on the country identifier;
/// `None` or an empty string means unfiltered. An empty result set is not
/// an error: the totals are simply all zero.
pub fn aggregate(dataset: &Dataset, filter: Option<&str>) -> KpiSnapshot {
    let country = filter.filter(|value| !value.is_empty());
    let mut snapshot = KpiSnapshot::default();
    let mut matched = 0usize;
    for record in dataset.records() {
        if let Some(country) = country
            && record.country != country
        {
            continue;
        }
        matched += 1;
        snapshot.confirmed += record.confirmed;
        snapshot.deaths += record.deaths;
        snapshot.recovered += record.recovered;
        snapshot.active += record.active;
    }
    debug!(filter = country.unwrap_or(""), matched, "kpis aggregated");
    snapshot
}

/// Top `n` rows by one metric, descending, stable on ties by input order.
///
/// Rankings always derive from the full dataset; the country filter that
/// narrows KPI totals does not apply here.
pub fn rank(dataset: &Dataset, metric: Metric, n: usize) -> Ranking {
    let mut entries: Vec<RankingEntry> = dataset
        .records()
        .iter()
        .map(|record| RankingEntry {
            country: record.country.clone(),
            value: record.value(metric),
        })
        .collect();
    // Vec::sort_by is stable, so equal values keep their original order.
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries.truncate(n);
    Ranking { metric, entries }
}
