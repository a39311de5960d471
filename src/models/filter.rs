// ============================================================================
// FILTER MODELS - Estado de búsqueda / filtros / orden compartido entre vistas
// ============================================================================

use serde::{Deserialize, Serialize};

/// Campo de orden por defecto
pub const DEFAULT_SORT_BY: &str = "created_at";

/// Dirección de orden. Solo existen dos valores posibles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parsear el valor de un `<select>`; cualquier otro string no es un orden válido
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Conjunto cerrado de campos de filtro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    CountryCode,
    DateFrom,
    DateTo,
    Email,
    CompanyName,
    Status,
    OrganizationType,
    AccountType,
    BillingType,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        FilterField::CountryCode,
        FilterField::DateFrom,
        FilterField::DateTo,
        FilterField::Email,
        FilterField::CompanyName,
        FilterField::Status,
        FilterField::OrganizationType,
        FilterField::AccountType,
        FilterField::BillingType,
    ];

    /// Nombre del campo tal como lo usa el backend
    pub fn key(&self) -> &'static str {
        match self {
            FilterField::CountryCode => "country_code",
            FilterField::DateFrom => "date_from",
            FilterField::DateTo => "date_to",
            FilterField::Email => "email",
            FilterField::CompanyName => "company_name",
            FilterField::Status => "status",
            FilterField::OrganizationType => "organization_type",
            FilterField::AccountType => "account_type",
            FilterField::BillingType => "billing_type",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::CountryCode => "Country",
            FilterField::DateFrom => "From",
            FilterField::DateTo => "To",
            FilterField::Email => "Email",
            FilterField::CompanyName => "Company",
            FilterField::Status => "Status",
            FilterField::OrganizationType => "Organization type",
            FilterField::AccountType => "Account type",
            FilterField::BillingType => "Billing type",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FilterField::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// Valores de filtro. Todos los campos existen siempre; "" significa sin filtro.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters {
    pub country_code: String,
    pub date_from: String,
    pub date_to: String,
    pub email: String,
    pub company_name: String,
    pub status: String,
    pub organization_type: String,
    pub account_type: String,
    pub billing_type: String,
}

impl Filters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::CountryCode => &self.country_code,
            FilterField::DateFrom => &self.date_from,
            FilterField::DateTo => &self.date_to,
            FilterField::Email => &self.email,
            FilterField::CompanyName => &self.company_name,
            FilterField::Status => &self.status,
            FilterField::OrganizationType => &self.organization_type,
            FilterField::AccountType => &self.account_type,
            FilterField::BillingType => &self.billing_type,
        }
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::CountryCode => &mut self.country_code,
            FilterField::DateFrom => &mut self.date_from,
            FilterField::DateTo => &mut self.date_to,
            FilterField::Email => &mut self.email,
            FilterField::CompanyName => &mut self.company_name,
            FilterField::Status => &mut self.status,
            FilterField::OrganizationType => &mut self.organization_type,
            FilterField::AccountType => &mut self.account_type,
            FilterField::BillingType => &mut self.billing_type,
        }
    }

    /// Merge superficial: solo se tocan los campos presentes en el patch
    pub fn merge(&mut self, patch: &FilterPatch) {
        for field in FilterField::ALL {
            if let Some(value) = patch.get(field) {
                *self.slot_mut(field) = value.to_string();
            }
        }
    }

    /// Campos con valor distinto de ""
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> + '_ {
        FilterField::ALL
            .into_iter()
            .map(move |f| (f, self.get(f)))
            .filter(|(_, v)| !v.is_empty())
    }
}

/// Actualización parcial de `Filters`. `None` deja el campo intacto.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    values: [Option<String>; 9],
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        self.values[index_of(field)] = Some(value.into());
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.values[index_of(field)].as_deref()
    }
}

// Las variantes de FilterField están declaradas en el mismo orden que ALL
fn index_of(field: FilterField) -> usize {
    field as usize
}

/// Estado completo de búsqueda
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub filters: Filters,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl FilterState {
    /// Sin búsqueda, sin filtros y con el orden por defecto
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            filters: Filters::default(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::default(),
        }
    }
}

/// Opción de orden que una vista ofrece en su `<select>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub value: String,
    pub label: String,
}

impl SortOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Qué controles quiere mostrar una vista. Nunca modifica el estado.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub country_code: bool,
    pub date_range: bool,
    pub email: bool,
    pub company_name: bool,
    pub status: bool,
    pub organization_type: bool,
    pub account_type: bool,
    pub billing_type: bool,
    pub sort_options: Vec<SortOption>,
}

impl FilterConfig {
    pub fn shows(&self, field: FilterField) -> bool {
        match field {
            FilterField::CountryCode => self.country_code,
            FilterField::DateFrom | FilterField::DateTo => self.date_range,
            FilterField::Email => self.email,
            FilterField::CompanyName => self.company_name,
            FilterField::Status => self.status,
            FilterField::OrganizationType => self.organization_type,
            FilterField::AccountType => self.account_type,
            FilterField::BillingType => self.billing_type,
        }
    }

    /// Campos visibles en el orden canónico
    pub fn visible_fields(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|f| self.shows(*f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.search_query, "");
        assert_eq!(state.sort_by, "created_at");
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert_eq!(state.filters.active().count(), 0);
    }

    #[test]
    fn test_is_default_tracks_sort_changes() {
        assert!(FilterState::default().is_default());

        let mut state = FilterState::default();
        state.sort_order = SortOrder::Asc;
        assert!(!state.is_default());

        let mut state = FilterState::default();
        state.sort_by = "name".to_string();
        assert!(!state.is_default());
    }

    #[test]
    fn test_sort_order_parse_rejects_unknown() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("DESC"), None);
        assert_eq!(SortOrder::parse("random"), None);
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut filters = Filters {
            country_code: "FR".to_string(),
            ..Filters::default()
        };
        filters.merge(&FilterPatch::new().with(FilterField::Status, "active"));

        assert_eq!(filters.country_code, "FR");
        assert_eq!(filters.status, "active");
        assert_eq!(filters.email, "");
    }

    #[test]
    fn test_merge_empty_string_clears() {
        let mut filters = Filters {
            status: "active".to_string(),
            ..Filters::default()
        };
        filters.merge(&FilterPatch::new().with(FilterField::Status, ""));
        assert_eq!(filters, Filters::default());
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in FilterField::ALL {
            assert_eq!(FilterField::from_key(field.key()), Some(field));
        }
        assert_eq!(FilterField::from_key("phone"), None);
    }

    #[test]
    fn test_config_visible_fields() {
        let config = FilterConfig {
            status: true,
            date_range: true,
            ..FilterConfig::default()
        };
        assert_eq!(
            config.visible_fields(),
            vec![FilterField::DateFrom, FilterField::DateTo, FilterField::Status]
        );
    }

    #[test]
    fn test_sort_order_serializes_lowercase() {
        let json = serde_json::to_string(&SortOrder::Asc).unwrap();
        assert_eq!(json, "\"asc\"");
    }
}
