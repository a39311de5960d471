// ============================================================================
// USE SEARCH FILTER HOOK - Store de búsqueda / filtros / orden
// ============================================================================
// use_filter_store() crea el estado (solo lo llama SearchFilterProvider).
// use_search_filter() lo lee desde el Context y falla si no hay provider.
// ============================================================================

use yew::prelude::*;
use crate::error::FilterContextError;
use crate::models::filter::{FilterConfig, FilterPatch, FilterState, SortOrder};
use crate::stores::{FilterAction, FilterStore};

#[derive(Clone, PartialEq)]
pub struct UseSearchFilterHandle {
    pub state: UseReducerHandle<FilterStore>,
    pub set_search_query: Callback<String>,
    pub set_filters: Callback<FilterPatch>,
    pub set_sort_by: Callback<String>,
    pub set_sort_order: Callback<SortOrder>,
    pub clear_all: Callback<()>,
    pub set_config: Callback<Option<FilterConfig>>,
}

impl UseSearchFilterHandle {
    pub fn filter_state(&self) -> &FilterState {
        &self.state.state
    }

    pub fn current_config(&self) -> Option<&FilterConfig> {
        self.state.config.as_ref()
    }
}

#[hook]
pub fn use_filter_store() -> UseSearchFilterHandle {
    let state = use_reducer(FilterStore::default);

    let set_search_query = {
        let state = state.clone();
        Callback::from(move |query: String| state.dispatch(FilterAction::SetSearchQuery(query)))
    };

    let set_filters = {
        let state = state.clone();
        Callback::from(move |patch: FilterPatch| state.dispatch(FilterAction::SetFilters(patch)))
    };

    let set_sort_by = {
        let state = state.clone();
        Callback::from(move |field: String| state.dispatch(FilterAction::SetSortBy(field)))
    };

    let set_sort_order = {
        let state = state.clone();
        Callback::from(move |order: SortOrder| state.dispatch(FilterAction::SetSortOrder(order)))
    };

    let clear_all = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("🧹 [FILTERS] Limpiando búsqueda y filtros");
            state.dispatch(FilterAction::ClearAll);
        })
    };

    // Config: reemplazo completo, sin merge
    let set_config = {
        let state = state.clone();
        Callback::from(move |config: Option<FilterConfig>| state.dispatch(FilterAction::SetConfig(config)))
    };

    UseSearchFilterHandle {
        state,
        set_search_query,
        set_filters,
        set_sort_by,
        set_sort_order,
        clear_all,
        set_config,
    }
}

/// Convertir la lectura del Context en error explícito
pub fn require_provider<T>(context: Option<T>) -> Result<T, FilterContextError> {
    context.ok_or(FilterContextError::MissingProvider)
}

#[hook]
pub fn use_search_filter_checked() -> Result<UseSearchFilterHandle, FilterContextError> {
    require_provider(use_context::<UseSearchFilterHandle>())
}

/// Leer el store de filtros. Panic si se usa fuera de SearchFilterProvider.
#[hook]
pub fn use_search_filter() -> UseSearchFilterHandle {
    match use_search_filter_checked() {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("❌ {}", e);
            panic!("{}", e);
        }
    }
}
