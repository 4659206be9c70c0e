pub mod dataset;
pub mod error;
pub mod metric;
pub mod ranking;
pub mod snapshot;

pub use dataset::{CaseRecord, Dataset};
pub use error::{DashError, Result};
pub use metric::Metric;
pub use ranking::{Ranking, RankingEntry};
pub use snapshot::KpiSnapshot;
