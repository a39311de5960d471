// ============================================================================
// FILTER STORE - Reducer de búsqueda / filtros / orden
// ============================================================================
// Cada setter del contexto despacha exactamente una FilterAction.
// Yew aplica las acciones en el orden de dispatch y notifica a los consumidores.
// ============================================================================

use std::rc::Rc;
use yew::Reducible;
use crate::models::filter::{FilterConfig, FilterPatch, FilterState, SortOrder};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SetSearchQuery(String),
    SetFilters(FilterPatch),
    SetSortBy(String),
    SetSortOrder(SortOrder),
    ClearAll,
    SetConfig(Option<FilterConfig>),
}

/// Estado del store - Compatible con use_reducer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterStore {
    pub state: FilterState,
    /// Slot independiente: ClearAll no lo toca y nunca modifica `state`
    pub config: Option<FilterConfig>,
}

impl FilterStore {
    /// Aplicar una acción sobre una copia del estado
    pub fn apply(&self, action: FilterAction) -> Self {
        let mut next = self.clone();
        match action {
            FilterAction::SetSearchQuery(query) => next.state.search_query = query,
            FilterAction::SetFilters(patch) => next.state.filters.merge(&patch),
            FilterAction::SetSortBy(field) => next.state.sort_by = field,
            FilterAction::SetSortOrder(order) => next.state.sort_order = order,
            FilterAction::ClearAll => next.state = FilterState::default(),
            FilterAction::SetConfig(config) => next.config = config,
        }
        next
    }
}

impl Reducible for FilterStore {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("🔎 [FILTERS] {:?}", action);
        Rc::new(self.apply(action))
    }
}
