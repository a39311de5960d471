// ============================================================================
// SEARCH FILTER CONTEXT - Compartir búsqueda / filtros entre vistas hermanas
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_search_filter::{use_filter_store, UseSearchFilterHandle};

#[derive(Properties, PartialEq)]
pub struct SearchFilterProviderProps {
    pub children: Children,
}

/// Provider que crea el store al montarse y lo descarta al desmontarse
#[function_component(SearchFilterProvider)]
pub fn search_filter_provider(props: &SearchFilterProviderProps) -> Html {
    let handle = use_filter_store();

    html! {
        <ContextProvider<UseSearchFilterHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseSearchFilterHandle>>
    }
}
