pub mod csv_loader;

pub use csv_loader::{DEFAULT_DATA_PATH, load_dataset};
