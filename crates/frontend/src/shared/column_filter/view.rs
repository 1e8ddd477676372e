use super::state::{FilterSelectorState, SelectionState};
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Popup with a searchable multi-select over a column's values.
///
/// Every change is reported through `on_change` with the full new selection;
/// the caller owns the filter itself.
#[component]
pub fn ColumnFilterSelector(
    /// Column header shown as the popup title
    #[prop(into)]
    title: String,
    /// Distinct values of the column
    options: Vec<String>,
    /// Values selected when the popup opens
    selected: Vec<String>,
    on_change: Callback<Vec<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(FilterSelectorState::new(options, selected));

    let emit = move |f: fn(&mut FilterSelectorState) -> Vec<String>| {
        if let Some(values) = state.try_update(f) {
            on_change.run(values);
        }
    };

    let header_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        let current = state.with(|s| s.selection_state());
        if let Some(input) = header_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(current == SelectionState::Some);
            }
        }
    });

    view! {
        <div class="column-filter__backdrop" on:click=move |_| on_close.run(())></div>
        <div class="column-filter" on:click=|e| e.stop_propagation()>
            <div class="column-filter__header">
                <span class="column-filter__title">{title}</span>
                <button class="column-filter__close" title="Close" on:click=move |_| on_close.run(())>
                    {icon(Icon::X)}
                </button>
            </div>

            <Show when=move || state.with(|s| s.shows_search())>
                <input
                    type="text"
                    class="column-filter__search"
                    placeholder="Search values..."
                    prop:value=move || state.with(|s| s.search().to_string())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        state.update(|s| s.set_search(&v));
                    }
                />
            </Show>

            <label class="column-filter__option column-filter__option--all">
                <input
                    node_ref=header_ref
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.selection_state() == SelectionState::All)
                    on:change=move |_| emit(FilterSelectorState::toggle_all)
                />
                "(Select all)"
            </label>

            <div class="column-filter__options">
                {move || {
                    let visible: Vec<String> = state
                        .with(|s| s.visible_options().into_iter().cloned().collect());
                    if visible.is_empty() {
                        return view! { <div class="column-filter__empty">"No values"</div> }
                            .into_any();
                    }
                    visible
                        .into_iter()
                        .map(|value| {
                            let for_check = value.clone();
                            let for_toggle = value.clone();
                            view! {
                                <label class="column-filter__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.is_selected(&for_check))
                                        on:change=move |_| {
                                            if let Some(values) =
                                                state.try_update(|s| s.toggle(&for_toggle))
                                            {
                                                on_change.run(values);
                                            }
                                        }
                                    />
                                    {value}
                                </label>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <div class="column-filter__footer">
                <button class="button button--ghost" on:click=move |_| emit(FilterSelectorState::select_all)>
                    "Select all"
                </button>
                <button class="button button--ghost" on:click=move |_| emit(FilterSelectorState::clear_all)>
                    "Clear"
                </button>
                <button class="button button--secondary" on:click=move |_| emit(FilterSelectorState::reset)>
                    "Reset"
                </button>
            </div>
        </div>
    }
}
