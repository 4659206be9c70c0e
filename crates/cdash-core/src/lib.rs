pub mod aggregate;
pub mod format;
pub mod project;

pub use aggregate::{DEFAULT_TOP_N, aggregate, rank};
pub use format::{human_format, human_format_str};
pub use project::{Alignment, TABLE_HEADERS, TableProjection, project};
