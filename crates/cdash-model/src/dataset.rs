use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// One input row: a country (or one regional breakdown row of a country)
/// with its four case counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub country: String,
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
}

impl CaseRecord {
    pub fn value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Confirmed => self.confirmed,
            Metric::Deaths => self.deaths,
            Metric::Recovered => self.recovered,
            Metric::Active => self.active,
        }
    }
}

/// The loaded case table. Read-only after construction; every derived view
/// (KPI totals, rankings, the grid projection) recomputes from this.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<CaseRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CaseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, deduplicated country identifiers. This is the domain of the
    /// country filter (what a selector widget offers).
    pub fn countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = self
            .records
            .iter()
            .map(|record| record.country.clone())
            .collect();
        countries.sort();
        countries.dedup();
        countries
    }
}
