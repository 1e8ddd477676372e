//! Pure state of a data table: rows, search, filters, sort and pagination.
//!
//! The `DataTable` component keeps one `TableModel` in a signal and renders
//! whatever it derives; nothing here touches the DOM.

use super::column::ColumnDef;
use super::export::{CsvDialect, ExportTable};
use super::filter::{row_matches, FilterState, FilterValue};
use super::pagination::{clamp_page, page_count, page_items, PageItem, PaginationState};
use super::record::{field_text, Record};
use super::sort::{sort_indices, SortDirection, SortState};
use std::collections::BTreeSet;

/// Rows rendered while loading
pub const SKELETON_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableMode {
    /// All rows are in memory; search, filter, sort and paging are local
    #[default]
    Client,
    /// The caller supplies one page of `total_count` rows
    Server { total_count: usize },
}

/// What the component must do after a search term change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Already applied to the local rows
    Local,
    /// Forward to the caller's search handler (after the debounce)
    Forward(String),
}

#[derive(Debug, Clone, Default)]
pub struct TableModel {
    columns: Vec<ColumnDef>,
    rows: Vec<Record>,
    mode: TableMode,
    remote_search: bool,
    is_loading: bool,
    search_term: String,
    filters: FilterState,
    sort: SortState,
    pagination: PaginationState,
    /// Row indices passing search and filters, in display order
    visible: Vec<usize>,
}

impl TableModel {
    pub fn new(columns: Vec<ColumnDef>, page_size: usize) -> Self {
        Self {
            columns,
            pagination: PaginationState::new(page_size),
            ..Default::default()
        }
    }

    /// Switches to server mode with the caller's total row count
    pub fn server(mut self, total_count: usize) -> Self {
        self.mode = TableMode::Server { total_count };
        self.refresh_visible();
        self
    }

    /// Search terms are forwarded to the caller instead of filtering locally
    pub fn with_remote_search(mut self) -> Self {
        self.remote_search = true;
        self
    }

    // ---- accessors ----

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn mode(&self) -> TableMode {
        self.mode
    }

    pub fn is_server(&self) -> bool {
        matches!(self.mode, TableMode::Server { .. })
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn page_index(&self) -> usize {
        self.pagination.page_index
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    /// Sorting and column filters are local-only features
    pub fn local_controls_enabled(&self) -> bool {
        !self.is_server()
    }

    // ---- inputs ----

    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        self.refresh_visible();
        self.clamp_current_page();
    }

    /// Nothing is filtered or sorted while loading; the result is rebuilt
    /// when loading ends
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
        self.refresh_visible();
        self.clamp_current_page();
    }

    pub fn set_total_count(&mut self, total_count: usize) {
        if let TableMode::Server { total_count: current } = &mut self.mode {
            *current = total_count;
        }
        self.clamp_current_page();
    }

    /// Stores the term and goes back to the first page; a remote search
    /// leaves the filtering to the caller
    pub fn set_search_term(&mut self, term: &str) -> SearchAction {
        self.search_term = term.to_string();
        self.pagination.page_index = 0;
        if self.remote_search {
            return SearchAction::Forward(term.trim().to_string());
        }
        self.refresh_visible();
        SearchAction::Local
    }

    pub fn set_column_filter(&mut self, key: &str, values: Vec<String>) {
        self.apply_filter(key, FilterValue::Values(values));
    }

    pub fn set_text_filter(&mut self, key: &str, text: &str) {
        self.apply_filter(key, FilterValue::Text(text.to_string()));
    }

    fn apply_filter(&mut self, key: &str, value: FilterValue) {
        if !self.local_controls_enabled() || !self.is_filterable(key) {
            return;
        }
        self.filters.set(key, value);
        self.pagination.page_index = 0;
        self.refresh_visible();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.pagination.page_index = 0;
        self.refresh_visible();
    }

    pub fn selected_values(&self, key: &str) -> Vec<String> {
        self.filters.get(key).map(FilterValue::selected).unwrap_or_default()
    }

    /// Header activation; ignored for non-sortable columns
    pub fn toggle_sort(&mut self, key: &str) {
        if self.local_controls_enabled() && self.is_sortable(key) {
            self.sort.toggle(key);
            self.refresh_visible();
        }
    }

    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        if self.local_controls_enabled() && self.is_sortable(key) {
            self.sort.set(key, direction);
            self.refresh_visible();
        }
    }

    /// Clamps and stores the page; returns the index to forward in server mode
    pub fn set_page(&mut self, page_index: usize) -> usize {
        let page = clamp_page(page_index, self.page_count());
        self.pagination.page_index = page;
        page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.pagination.page_index + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.pagination.page_index.saturating_sub(1))
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.page_index = 0;
    }

    /// Client rows are unknown while loading, so the page is kept until they arrive
    fn clamp_current_page(&mut self) {
        if self.is_loading && !self.is_server() {
            return;
        }
        self.pagination.page_index = clamp_page(self.pagination.page_index, self.page_count());
    }

    fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key() == Some(key))
    }

    fn is_sortable(&self, key: &str) -> bool {
        self.column(key).is_some_and(ColumnDef::is_sortable)
    }

    fn is_filterable(&self, key: &str) -> bool {
        self.column(key).is_some_and(ColumnDef::is_filterable)
    }

    // ---- derived ----

    /// Recomputes the visible row set once per input change.
    /// Server mode shows the supplied rows untouched.
    fn refresh_visible(&mut self) {
        if self.is_loading {
            self.visible.clear();
            return;
        }
        if self.is_server() {
            self.visible = (0..self.rows.len()).collect();
            return;
        }
        let term = if self.remote_search { "" } else { self.search_term.as_str() };
        let mut indices: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| row_matches(r, &self.columns, term, &self.filters))
            .map(|(i, _)| i)
            .collect();
        if let Some(key) = self.sort.column_key() {
            sort_indices(&mut indices, &self.rows, key, self.sort.direction());
        }
        self.visible = indices;
    }

    /// Indices of rows passing search and filters, in display order
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_rows(&self) -> Vec<&Record> {
        self.visible.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Rows matching the current filters (all pages); the server total in server mode
    pub fn visible_count(&self) -> usize {
        match self.mode {
            TableMode::Server { total_count } => total_count,
            TableMode::Client => self.visible.len(),
        }
    }

    /// Rows of the current page
    pub fn page_rows(&self) -> Vec<&Record> {
        if self.is_loading {
            return Vec::new();
        }
        if self.is_server() {
            return self.rows.iter().collect();
        }
        self.visible[self.pagination.range(self.visible.len())]
            .iter()
            .map(|&i| &self.rows[i])
            .collect()
    }

    pub fn page_count(&self) -> usize {
        if self.is_loading && !self.is_server() {
            return 0;
        }
        page_count(self.visible_count(), self.pagination.page_size)
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        page_items(self.pagination.page_index, self.page_count())
    }

    pub fn can_prev(&self) -> bool {
        !self.is_loading && self.pagination.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        !self.is_loading && self.pagination.page_index + 1 < self.page_count()
    }

    pub fn skeleton_rows(&self) -> usize {
        if self.is_loading {
            SKELETON_ROWS
        } else {
            0
        }
    }

    pub fn is_empty_state(&self) -> bool {
        !self.is_loading && self.page_rows().is_empty()
    }

    /// "1–10 of 25" style summary of the current page
    pub fn range_label(&self) -> String {
        let total = self.visible_count();
        if total == 0 || self.page_count() == 0 {
            return "0 of 0".to_string();
        }
        let range = self.pagination.range(total);
        format!("{}–{} of {}", range.start + 1, range.end, total)
    }

    /// Distinct non-null values of `key` over all rows, sorted
    pub fn filter_options(&self, key: &str) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|r| field_text(r, key))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // ---- export ----

    pub fn export_table(&self) -> ExportTable {
        ExportTable::build(&self.columns, self.visible_rows())
    }

    pub fn export_clipboard(&self) -> String {
        self.export_table().to_clipboard_text()
    }

    pub fn export_csv(&self, dialect: CsvDialect) -> Result<String, String> {
        self.export_table().to_csv(dialect)
    }

    pub fn export_spreadsheet(&self) -> String {
        self.export_table().to_spreadsheet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Name", "name"),
            ColumnDef::new("Status", "status").cycle_filter(),
            ColumnDef::new("Sent", "sent"),
            ColumnDef::display("Actions"),
        ]
    }

    fn rows(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                let status = if i % 3 == 0 { "draft" } else { "running" };
                json!({"name": format!("Campaign {}", i), "status": status, "sent": i})
                    .as_object()
                    .cloned()
                    .unwrap()
            })
            .collect()
    }

    fn client(n: usize) -> TableModel {
        let mut model = TableModel::new(columns(), 10);
        model.set_rows(rows(n));
        model
    }

    #[test]
    fn test_page_count_and_clamping() {
        let mut model = client(25);
        assert_eq!(model.page_count(), 3);
        assert_eq!(model.set_page(7), 2);
        assert_eq!(model.page_rows().len(), 5);
        assert!(!model.can_next());
        assert_eq!(model.range_label(), "21–25 of 25");
    }

    #[test]
    fn test_search_resets_page_and_filters() {
        let mut model = client(25);
        model.set_page(2);
        assert_eq!(model.set_search_term("campaign 1"), SearchAction::Local);
        assert_eq!(model.page_index(), 0);
        // 1, 10..=19
        assert_eq!(model.visible_count(), 11);
    }

    #[test]
    fn test_filter_and_search_compose() {
        let mut model = client(25);
        model.set_search_term("campaign 1");
        model.set_column_filter("status", vec!["draft".into()]);
        let names: Vec<String> = model
            .visible_rows()
            .iter()
            .filter_map(|r| field_text(r, "name"))
            .collect();
        assert_eq!(names, vec!["Campaign 12", "Campaign 15", "Campaign 18"]);
    }

    #[test]
    fn test_filter_on_unknown_or_display_column_ignored() {
        let mut model = client(5);
        model.set_column_filter("Actions", vec!["x".into()]);
        model.set_column_filter("missing", vec!["x".into()]);
        assert!(model.filters().is_empty());
        assert_eq!(model.visible_count(), 5);
    }

    #[test]
    fn test_sort_descending_then_none() {
        let mut model = client(5);
        model.toggle_sort("sent");
        model.toggle_sort("sent");
        let first = model.page_rows()[0].get("sent").cloned();
        assert_eq!(first, Some(json!(4)));
        model.toggle_sort("sent");
        assert_eq!(model.page_rows()[0].get("sent").cloned(), Some(json!(0)));
    }

    #[test]
    fn test_export_matches_filtered_count() {
        let mut model = client(25);
        model.set_column_filter("status", vec!["draft".into()]);
        let visible = model.visible_count();
        assert_eq!(visible, 9);
        assert_eq!(model.export_clipboard().lines().count(), visible + 1);
        assert_eq!(
            model.export_csv(CsvDialect::Legacy).unwrap().lines().count(),
            visible + 1
        );
        let spreadsheet = model.export_spreadsheet();
        assert_eq!(
            spreadsheet.trim_start_matches('\u{feff}').lines().count(),
            visible + 1
        );
        assert_eq!(model.export_table().rows.len(), visible);
    }

    #[test]
    fn test_empty_state() {
        let model = client(0);
        assert!(model.is_empty_state());
        assert!(model.page_rows().is_empty());
        assert_eq!(model.page_count(), 0);
        assert!(!model.can_prev());
        assert!(!model.can_next());
        assert!(model.page_items().is_empty());
    }

    #[test]
    fn test_loading_shows_skeleton_not_empty_state() {
        let mut model = client(3);
        model.set_loading(true);
        assert_eq!(model.skeleton_rows(), SKELETON_ROWS);
        assert!(model.page_rows().is_empty());
        assert!(!model.is_empty_state());
        assert_eq!(model.visible_count(), 0);
        assert_eq!(model.page_count(), 0);
        assert_eq!(model.range_label(), "0 of 0");
        assert!(model.page_items().is_empty());
    }

    #[test]
    fn test_loading_keeps_page_until_rows_arrive() {
        let mut model = client(25);
        model.set_page(2);
        model.set_loading(true);
        model.set_rows(rows(25));
        assert_eq!(model.page_index(), 2);
        model.set_loading(false);
        assert_eq!(model.page_index(), 2);
        assert_eq!(model.page_rows().len(), 5);
    }

    #[test]
    fn test_remote_search_returns_to_first_page() {
        let mut model = TableModel::new(columns(), 10).server(100).with_remote_search();
        model.set_rows(rows(10));
        assert_eq!(model.set_page(4), 4);

        assert_eq!(model.set_search_term("x"), SearchAction::Forward("x".into()));
        assert_eq!(model.page_index(), 0);

        model.set_total_count(5);
        model.set_rows(rows(5));
        assert_eq!(model.page_count(), 1);
        assert_eq!(model.page_index(), 0);
        assert_eq!(model.range_label(), "1–5 of 5");
        assert!(!model.can_prev());
        assert!(!model.can_next());
    }

    #[test]
    fn test_shrinking_server_total_clamps_page() {
        let mut model = TableModel::new(columns(), 10).server(100);
        model.set_rows(rows(10));
        model.set_page(9);
        model.set_total_count(25);
        assert_eq!(model.page_index(), 2);
        model.set_total_count(0);
        assert_eq!(model.page_index(), 0);
        assert_eq!(model.range_label(), "0 of 0");
    }

    #[test]
    fn test_server_mode_forwards_next_page() {
        let mut model = TableModel::new(columns(), 10).server(25);
        model.set_rows(rows(10));
        assert_eq!(model.page_count(), 3);
        assert_eq!(model.next_page(), 1);
        // caller has not delivered the new page yet: rows stay as supplied
        assert_eq!(model.page_rows().len(), 10);
        assert_eq!(field_text(model.page_rows()[0], "name").as_deref(), Some("Campaign 0"));
    }

    #[test]
    fn test_server_mode_ignores_local_controls() {
        let mut model = TableModel::new(columns(), 10).server(25);
        model.set_rows(rows(10));
        model.toggle_sort("sent");
        model.set_column_filter("status", vec!["draft".into()]);
        assert!(!model.sort().is_active());
        assert!(model.filters().is_empty());
    }

    #[test]
    fn test_remote_search_forwards_trimmed_term() {
        let mut model = TableModel::new(columns(), 10).server(25).with_remote_search();
        model.set_rows(rows(10));
        assert_eq!(
            model.set_search_term("  spring "),
            SearchAction::Forward("spring".into())
        );
        assert_eq!(model.visible_count(), 25);
    }

    #[test]
    fn test_filter_options_cover_all_rows() {
        let mut model = client(6);
        model.set_column_filter("status", vec!["draft".into()]);
        assert_eq!(model.filter_options("status"), vec!["draft", "running"]);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut model = client(25);
        model.set_page(2);
        model.set_page_size(25);
        assert_eq!(model.page_index(), 0);
        assert_eq!(model.page_count(), 1);
    }
}
