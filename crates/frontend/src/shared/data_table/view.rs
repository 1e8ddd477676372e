use super::column::ColumnDef;
use super::export::CsvDialect;
use super::model::{SearchAction, TableModel};
use super::record::{field_text, Record};
use crate::layout::notifications::use_notifications;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::column_filter::ColumnFilterSelector;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::export::{download_text, timestamped_filename, CSV_MIME};
use crate::shared::icons::{icon, Icon};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

/// Table with search, column filters, sorting, pagination and export.
///
/// Client mode (default) works on all of `data`. Supplying both
/// `on_page_change` and `total_count` switches to server mode: `data` is the
/// current page and page changes are forwarded. With `on_search` the search
/// term is forwarded after the debounce instead of filtering locally.
#[component]
pub fn DataTable(
    columns: Vec<ColumnDef>,
    #[prop(into)] data: Signal<Vec<Record>>,
    #[prop(into, optional)] is_loading: Signal<bool>,
    #[prop(into, optional)] total_count: Option<Signal<usize>>,
    #[prop(optional)] on_page_change: Option<Callback<usize>>,
    #[prop(optional)] on_page_size_change: Option<Callback<usize>>,
    #[prop(optional)] on_search: Option<Callback<String>>,
    /// Initial page size; the configured default otherwise
    #[prop(optional)]
    page_size: Option<usize>,
    /// Base name of exported files
    #[prop(into, optional)]
    export_name: Option<String>,
    #[prop(optional)] csv_dialect: CsvDialect,
    #[prop(optional)] on_row_click: Option<Callback<Record>>,
    #[prop(into, optional)] search_placeholder: Option<String>,
) -> impl IntoView {
    let table_config = use_context::<RwSignal<AppConfig>>()
        .map(|c| c.get_untracked().table)
        .unwrap_or_default();
    let notify = use_notifications();

    let is_server = on_page_change.is_some() && total_count.is_some();
    let mut initial = TableModel::new(
        columns.clone(),
        page_size.unwrap_or(table_config.default_page_size),
    );
    if let (true, Some(total)) = (is_server, total_count) {
        initial = initial.server(total.get_untracked());
    }
    if on_search.is_some() {
        initial = initial.with_remote_search();
    }
    initial.set_rows(data.get_untracked());
    initial.set_loading(is_loading.get_untracked());
    let model = RwSignal::new(initial);

    Effect::new(move |_| {
        let rows = data.get();
        model.update(|m| m.set_rows(rows));
    });
    Effect::new(move |_| {
        let loading = is_loading.get();
        model.update(|m| m.set_loading(loading));
    });
    if let Some(total) = total_count {
        Effect::new(move |_| {
            let t = total.get();
            model.update(|m| m.set_total_count(t));
        });
    }

    // ---- search with debounce ----
    let search_input = RwSignal::new(String::new());
    let debounce = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        // dropping the pending timeout cancels it
        let _ = debounce.try_update_value(|t| t.take());
    });
    let debounce_ms = table_config.search_debounce_ms;
    let handle_search = move |value: String| {
        search_input.set(value.clone());
        let action = model.try_update(|m| m.set_search_term(&value));
        if let (Some(SearchAction::Forward(term)), Some(cb)) = (action, on_search) {
            let timeout = Timeout::new(debounce_ms, move || cb.run(term));
            debounce.set_value(Some(timeout));
        }
    };

    // ---- pagination ----
    let go_to_page = Callback::new(move |index: usize| {
        let page = model.try_update(|m| m.set_page(index)).unwrap_or(0);
        if is_server {
            if let Some(cb) = on_page_change {
                cb.run(page);
            }
        }
    });
    let change_page_size = Callback::new(move |size: usize| {
        model.update(|m| m.set_page_size(size));
        match (on_page_size_change, on_page_change) {
            (Some(cb), _) => cb.run(size),
            (None, Some(cb)) if is_server => cb.run(0),
            _ => {}
        }
    });

    // ---- export ----
    let export_name = export_name.unwrap_or_else(|| "export".to_string());
    let csv_name = export_name.clone();
    let copy_rows = move |_| {
        let text = model.with_untracked(|m| m.export_clipboard());
        copy_to_clipboard_with_callback(&text, move |result| {
            if let Some(n) = notify {
                match result {
                    Ok(()) => n.success("Copied to clipboard"),
                    Err(_) => n.error("Could not copy to clipboard"),
                }
            }
        });
    };
    let download_csv = move |_| {
        let result = model
            .with_untracked(|m| m.export_csv(csv_dialect))
            .and_then(|csv| download_text(&csv, CSV_MIME, &timestamped_filename(&csv_name, "csv")));
        if let Err(e) = result {
            log::warn!("CSV export failed: {}", e);
            if let Some(n) = notify {
                n.error("CSV export failed");
            }
        }
    };
    let download_excel = move |_| {
        let content = model.with_untracked(|m| m.export_spreadsheet());
        let filename = timestamped_filename(&export_name, "csv");
        if let Err(e) = download_text(&content, CSV_MIME, &filename) {
            log::warn!("Excel export failed: {}", e);
            if let Some(n) = notify {
                n.error("Excel export failed");
            }
        }
    };
    let nothing_to_export =
        Signal::derive(move || model.with(|m| m.is_loading() || m.visible_count() == 0));

    // ---- header ----
    let open_filter = RwSignal::new(None::<String>);
    let header_cells = columns
        .iter()
        .cloned()
        .map(|col| header_cell(col, model, open_filter, is_server))
        .collect_view();

    let body_columns = StoredValue::new(columns);
    let column_count = body_columns.with_value(|c| c.len());

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <div class="data-table__search">
                    {icon(Icon::Search)}
                    <input
                        type="text"
                        class="data-table__search-input"
                        placeholder=search_placeholder.unwrap_or_else(|| "Search...".to_string())
                        prop:value=move || search_input.get()
                        on:input=move |ev| handle_search(event_target_value(&ev))
                    />
                    <Show when=move || !search_input.get().is_empty()>
                        <button
                            class="data-table__search-clear"
                            title="Clear"
                            on:click=move |_| handle_search(String::new())
                        >
                            {icon(Icon::X)}
                        </button>
                    </Show>
                </div>

                <Show when=move || model.with(|m| !m.filters().is_empty())>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| model.update(|m| m.clear_filters())
                    >
                        {icon(Icon::Filter)}
                        {move || format!(" Clear filters ({})", model.with(|m| m.filters().active_count()))}
                    </Button>
                </Show>

                <div class="data-table__export">
                    <Button appearance=ButtonAppearance::Secondary on_click=copy_rows disabled=nothing_to_export>
                        {icon(Icon::Copy)}
                        " Copy"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=download_csv disabled=nothing_to_export>
                        {icon(Icon::Download)}
                        " CSV"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=download_excel disabled=nothing_to_export>
                        {icon(Icon::Download)}
                        " Excel"
                    </Button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>{header_cells}</tr>
                    </thead>
                    <tbody>
                        {move || {
                            let (skeleton, empty, rows) = model.with(|m| {
                                (
                                    m.skeleton_rows(),
                                    m.is_empty_state(),
                                    m.page_rows().into_iter().cloned().collect::<Vec<_>>(),
                                )
                            });
                            if skeleton > 0 {
                                (0..skeleton)
                                    .map(|_| view! {
                                        <tr class="table__row table__row--skeleton">
                                            {(0..column_count)
                                                .map(|_| view! {
                                                    <td class="table__cell"><div class="skeleton-line"></div></td>
                                                })
                                                .collect_view()}
                                        </tr>
                                    })
                                    .collect_view()
                                    .into_any()
                            } else if empty {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=column_count>
                                            "No records found"
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|row| body_row(row, body_columns, on_row_click))
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || model.with(|m| m.page_index()))
                total_pages=Signal::derive(move || model.with(|m| m.page_count()))
                page_items=Signal::derive(move || model.with(|m| m.page_items()))
                range_label=Signal::derive(move || model.with(|m| m.range_label()))
                page_size=Signal::derive(move || model.with(|m| m.page_size()))
                disabled=Signal::derive(move || model.with(|m| m.is_loading() || m.page_count() == 0))
                on_page_change=go_to_page
                on_page_size_change=change_page_size
            />
        </div>
    }
}

fn header_cell(
    col: ColumnDef,
    model: RwSignal<TableModel>,
    open_filter: RwSignal<Option<String>>,
    is_server: bool,
) -> impl IntoView {
    let align_class = if col.align_right {
        "table__header-cell table__header-cell--right"
    } else {
        "table__header-cell"
    };
    let header = col.header.clone();

    let Some(key) = col.accessor_key.clone() else {
        return view! { <th class=align_class>{header}</th> }.into_any();
    };
    let sortable = col.is_sortable() && !is_server;
    let filterable = col.is_filterable() && !is_server;

    let sort_key = key.clone();
    let indicator_key = key.clone();
    let title_part = if sortable {
        view! {
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| model.update(|m| m.toggle_sort(&sort_key))
            >
                {header.clone()}
                <span class="table__sort-indicator">
                    {move || model.with(|m| m.sort().direction_of(&indicator_key).indicator())}
                </span>
            </div>
        }
        .into_any()
    } else {
        view! { <span>{header.clone()}</span> }.into_any()
    };

    let filter_part = if filterable {
        let toggle_key = key.clone();
        let active_key = key.clone();
        let popup_key = key.clone();
        view! {
            <button
                class="table__filter-btn"
                class:table__filter-btn--active=move || model.with(|m| m.filters().get(&active_key).is_some())
                title="Filter"
                on:click=move |ev| {
                    ev.stop_propagation();
                    let k = toggle_key.clone();
                    open_filter.update(|o| {
                        *o = if o.as_deref() == Some(k.as_str()) { None } else { Some(k) };
                    });
                }
            >
                {icon(Icon::Filter)}
            </button>
            {move || {
                (open_filter.get().as_deref() == Some(popup_key.as_str())).then(|| {
                    let (options, selected) = model.with_untracked(|m| {
                        (m.filter_options(&popup_key), m.selected_values(&popup_key))
                    });
                    let change_key = popup_key.clone();
                    view! {
                        <ColumnFilterSelector
                            title=header.clone()
                            options=options
                            selected=selected
                            on_change=Callback::new(move |values: Vec<String>| {
                                model.update(|m| m.set_column_filter(&change_key, values));
                            })
                            on_close=Callback::new(move |_| open_filter.set(None))
                        />
                    }
                })
            }}
        }
        .into_any()
    } else {
        view! { <></> }.into_any()
    };

    view! {
        <th class=align_class>
            <div class="table__header-content">{title_part}{filter_part}</div>
        </th>
    }
    .into_any()
}

fn body_row(
    row: Record,
    columns: StoredValue<Vec<ColumnDef>>,
    on_row_click: Option<Callback<Record>>,
) -> impl IntoView {
    let cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let class = if col.align_right {
                    "table__cell table__cell--right"
                } else {
                    "table__cell"
                };
                let content = match (&col.cell, col.key()) {
                    (Some(render), _) => render(&row),
                    (None, Some(key)) => field_text(&row, key).unwrap_or_default().into_any(),
                    (None, None) => ().into_any(),
                };
                view! { <td class=class>{content}</td> }
            })
            .collect_view()
    });

    view! {
        <tr
            class="table__row"
            class:table__row--clickable=on_row_click.is_some()
            on:click=move |_| {
                if let Some(cb) = on_row_click {
                    cb.run(row.clone());
                }
            }
        >
            {cells}
        </tr>
    }
}
