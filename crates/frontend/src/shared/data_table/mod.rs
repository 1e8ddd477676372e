//! Generic data table: a pure [`TableModel`] engine and the [`DataTable`]
//! component that renders it.

pub mod column;
pub mod export;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod view;

pub use column::{CellRenderer, ColumnDef};
pub use export::CsvDialect;
pub use model::{SearchAction, TableMode, TableModel};
pub use record::{field_text, to_record, to_records, Record};
pub use sort::SortDirection;
pub use view::DataTable;
