pub mod config;
pub mod dataset;
pub mod error;
pub mod table;

pub use config::DatasetConfig;
pub use dataset::{load_data, load_data_from, DatasetLocation, BASE_FILE_NAME};
pub use error::LoadError;
pub use table::{ColumnType, Row, Table, Value};
