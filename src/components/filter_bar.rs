// ============================================================================
// FILTER BAR - Controles de búsqueda / filtros / orden
// ============================================================================
// Lee y escribe el store del SearchFilterProvider.
// La config activa decide qué controles se muestran; nunca toca el estado.
// ============================================================================

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::hooks::use_search_filter;
use crate::models::filter::{FilterField, FilterPatch};

#[function_component(FilterBar)]
pub fn filter_bar() -> Html {
    let filter = use_search_filter();
    let state = filter.filter_state().clone();
    let config = filter.current_config().cloned().unwrap_or_default();

    let on_search = {
        let set_search_query = filter.set_search_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                set_search_query.emit(input.value());
            }
        })
    };

    let field_inputs = config
        .visible_fields()
        .into_iter()
        .map(|field| {
            let on_input = {
                let set_filters = filter.set_filters.clone();
                Callback::from(move |e: InputEvent| {
                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                        set_filters.emit(FilterPatch::new().with(field, input.value()));
                    }
                })
            };
            let input_type = match field {
                FilterField::DateFrom | FilterField::DateTo => "date",
                _ => "text",
            };
            html! {
                <label class="filter-field" key={field.key()}>
                    <span>{field.label()}</span>
                    <input
                        type={input_type}
                        name={field.key()}
                        value={state.filters.get(field).to_string()}
                        oninput={on_input}
                    />
                </label>
            }
        })
        .collect::<Html>();

    let sort_controls = if config.sort_options.is_empty() {
        html! {}
    } else {
        let on_sort_change = {
            let set_sort_by = filter.set_sort_by.clone();
            Callback::from(move |e: Event| {
                if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                    set_sort_by.emit(select.value());
                }
            })
        };
        let on_order_click = {
            let set_sort_order = filter.set_sort_order.clone();
            let next = state.sort_order.toggled();
            Callback::from(move |_: MouseEvent| set_sort_order.emit(next))
        };
        html! {
            <div class="sort-controls">
                <select class="sort-by" onchange={on_sort_change}>
                    { for config.sort_options.iter().map(|opt| html! {
                        <option value={opt.value.clone()} selected={opt.value == state.sort_by}>
                            {opt.label.clone()}
                        </option>
                    }) }
                </select>
                <button class="sort-order" onclick={on_order_click} title="Toggle sort order">
                    {state.sort_order.as_str()}
                </button>
            </div>
        }
    };

    let on_clear = {
        let clear_all = filter.clear_all.clone();
        Callback::from(move |_: MouseEvent| clear_all.emit(()))
    };

    let active_count = state.filters.active().count();

    html! {
        <div class="filter-bar">
            <input
                class="search-input"
                type="search"
                placeholder="Search..."
                value={state.search_query.clone()}
                oninput={on_search}
            />
            { field_inputs }
            { sort_controls }
            <button class="btn-clear" onclick={on_clear} disabled={state.is_default()}>
                { if active_count > 0 { format!("Clear ({})", active_count) } else { "Clear".to_string() } }
            </button>
        </div>
    }
}
