use crate::shared::data_table::pagination::{PageItem, PAGE_SIZE_OPTIONS};
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// First/prev, numbered pages with ellipses, next/last and a page size select
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Page-number strip
    #[prop(into)]
    page_items: Signal<Vec<PageItem>>,

    /// "1–10 of 25"
    #[prop(into)]
    range_label: Signal<String>,

    #[prop(into)]
    page_size: Signal<usize>,

    /// Disables every control (loading, empty table)
    #[prop(into, optional)]
    disabled: Signal<bool>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let no_prev = move || disabled.get() || current_page.get() == 0;
    let no_next = move || disabled.get() || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || range_label.get()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=no_prev
                title="First page"
            >
                {icon(Icon::ChevronsLeft)}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=no_prev
                title="Previous page"
            >
                {icon(Icon::ChevronLeft)}
            </button>

            {move || {
                let current = current_page.get();
                let off = disabled.get();
                page_items
                    .get()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(p) => view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=p == current
                                disabled=off
                                on:click=move |_| on_page_change.run(p)
                            >
                                {p + 1}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=no_next
                title="Next page"
            >
                {icon(Icon::ChevronRight)}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().saturating_sub(1))
                disabled=no_next
                title="Last page"
            >
                {icon(Icon::ChevronsRight)}
            </button>
            <select
                class="page-size-select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let val = event_target_value(&ev)
                        .parse()
                        .unwrap_or(PAGE_SIZE_OPTIONS[0]);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
