//! Local parsing of contact CSV files before upload

pub mod parser;
pub mod types;

pub use parser::{parse_csv, read_csv_file};
pub use types::{propose_mapping, CsvData, MappingReport};
