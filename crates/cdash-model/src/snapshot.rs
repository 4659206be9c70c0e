use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// Totals for the four summary metrics under one country filter.
///
/// Recomputed whole on every filter change; there is no history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
}

impl KpiSnapshot {
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Confirmed => self.confirmed,
            Metric::Deaths => self.deaths,
            Metric::Recovered => self.recovered,
            Metric::Active => self.active,
        }
    }

    /// The four totals in display order.
    pub fn entries(&self) -> [(Metric, u64); 4] {
        [
            (Metric::Confirmed, self.confirmed),
            (Metric::Deaths, self.deaths),
            (Metric::Recovered, self.recovered),
            (Metric::Active, self.active),
        ]
    }
}
