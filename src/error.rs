// ============================================================================
// ERRORES DE LA APP
// ============================================================================

use thiserror::Error;

/// Uso del contexto de filtros fuera de su provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterContextError {
    #[error("use_search_filter must be used within a SearchFilterProvider")]
    MissingProvider,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,
    #[error("error eliminando '{0}' de localStorage")]
    Remove(String),
}

/// Fixtures embebidos con formato inválido
#[derive(Debug, Error)]
#[error("fixture '{name}' inválido: {source}")]
pub struct FixtureError {
    pub name: &'static str,
    #[source]
    pub source: serde_json::Error,
}
