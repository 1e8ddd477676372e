use super::record::Record;
use leptos::prelude::AnyView;
use std::fmt;
use std::sync::Arc;

/// Custom cell renderer; receives the whole row
pub type CellRenderer = Arc<dyn Fn(&Record) -> AnyView + Send + Sync>;

/// Column definition of a [`DataTable`](super::DataTable)
///
/// A column without `accessor_key` is a computed/action column: it is never
/// searched, filtered, sorted or exported.
#[derive(Clone)]
pub struct ColumnDef {
    pub header: String,
    pub accessor_key: Option<String>,
    pub enable_sorting: bool,
    pub enable_column_filter: bool,
    /// Column filter compares whole values instead of substrings
    pub cycle_filter: bool,
    pub align_right: bool,
    pub cell: Option<CellRenderer>,
}

impl ColumnDef {
    /// Column bound to `accessor_key`
    pub fn new(header: impl Into<String>, accessor_key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor_key: Some(accessor_key.into()),
            enable_sorting: true,
            enable_column_filter: true,
            cycle_filter: false,
            align_right: false,
            cell: None,
        }
    }

    /// Computed column with no bound field
    pub fn display(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor_key: None,
            enable_sorting: false,
            enable_column_filter: false,
            cycle_filter: false,
            align_right: false,
            cell: None,
        }
    }

    pub fn without_sorting(mut self) -> Self {
        self.enable_sorting = false;
        self
    }

    pub fn without_filter(mut self) -> Self {
        self.enable_column_filter = false;
        self
    }

    pub fn cycle_filter(mut self) -> Self {
        self.cycle_filter = true;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align_right = true;
        self
    }

    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&Record) -> AnyView + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.accessor_key.as_deref()
    }

    pub fn is_sortable(&self) -> bool {
        self.enable_sorting && self.accessor_key.is_some()
    }

    pub fn is_filterable(&self) -> bool {
        self.enable_column_filter && self.accessor_key.is_some()
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("header", &self.header)
            .field("accessor_key", &self.accessor_key)
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_column_filter", &self.enable_column_filter)
            .field("cycle_filter", &self.cycle_filter)
            .field("cell", &self.cell.is_some())
            .finish()
    }
}
