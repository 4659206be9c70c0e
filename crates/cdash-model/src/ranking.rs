use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// One bar of a comparative chart: a country and its metric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub country: String,
    pub value: u64,
}

/// Top-N countries for one metric, descending by value.
///
/// Always derived from the full dataset; the country filter narrows KPI
/// totals but not chart rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub metric: Metric,
    pub entries: Vec<RankingEntry>,
}

impl Ranking {
    pub fn max_value(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| entry.value)
            .max()
            .unwrap_or(0)
    }
}
