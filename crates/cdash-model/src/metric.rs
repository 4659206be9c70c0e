use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashError;

/// One of the four summary metrics tracked per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    Confirmed,
    Deaths,
    Recovered,
    Active,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Metric; 4] = [
        Metric::Confirmed,
        Metric::Deaths,
        Metric::Recovered,
        Metric::Active,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Confirmed => "Confirmed",
            Metric::Deaths => "Deaths",
            Metric::Recovered => "Recovered",
            Metric::Active => "Active",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Metric::Confirmed => "Cumulative confirmed cases",
            Metric::Deaths => "Cumulative deaths",
            Metric::Recovered => "Cumulative recoveries",
            Metric::Active => "Currently active cases",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = DashError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim();
        Metric::ALL
            .into_iter()
            .find(|metric| metric.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DashError::InvalidMetric(name.to_string()))
    }
}
