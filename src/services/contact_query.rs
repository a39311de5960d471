// ============================================================================
// CONTACT QUERY - Aplicar FilterState a una lista de contactos
// ============================================================================

use std::cmp::Reverse;
use chrono::NaiveDate;
use crate::models::filter::{FilterState, Filters, SortOrder};
use crate::models::Contact;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filtrar y ordenar. El orden es estable; una columna desconocida conserva
/// el orden de entrada.
pub fn apply_filters(contacts: &[Contact], state: &FilterState) -> Vec<Contact> {
    let search = state.search_query.trim().to_lowercase();
    let bounds = DateBounds::from_filters(&state.filters);

    let mut result: Vec<Contact> = contacts
        .iter()
        .filter(|c| matches_search(c, &search))
        .filter(|c| matches_filters(c, &state.filters))
        .filter(|c| bounds.contains(c.created_at))
        .cloned()
        .collect();

    if contacts.first().and_then(|c| c.sort_key(&state.sort_by)).is_some() {
        let key = |c: &Contact| c.sort_key(&state.sort_by).unwrap_or_default();
        match state.sort_order {
            SortOrder::Asc => result.sort_by_cached_key(key),
            // Reverse en la clave (no reverse() del vector) para mantener la estabilidad
            SortOrder::Desc => result.sort_by_cached_key(|c| Reverse(key(c))),
        }
    } else {
        log::debug!("↕️ Columna de orden desconocida: '{}'", state.sort_by);
    }

    result
}

fn matches_search(contact: &Contact, search: &str) -> bool {
    search.is_empty()
        || contact.name.to_lowercase().contains(search)
        || contact.email.to_lowercase().contains(search)
        || contact.company_name.to_lowercase().contains(search)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn equals_ci(value: &str, expected: &str) -> bool {
    let expected = expected.trim();
    expected.is_empty() || value.to_lowercase() == expected.to_lowercase()
}

fn matches_filters(contact: &Contact, filters: &Filters) -> bool {
    contains_ci(&contact.email, filters.email.trim())
        && contains_ci(&contact.company_name, filters.company_name.trim())
        && equals_ci(&contact.country_code, &filters.country_code)
        && equals_ci(&contact.status, &filters.status)
        && equals_ci(&contact.organization_type, &filters.organization_type)
        && equals_ci(&contact.account_type, &filters.account_type)
        && equals_ci(&contact.billing_type, &filters.billing_type)
}

/// Rango inclusivo de fechas; un límite vacío o inválido no restringe
#[derive(Debug, Default)]
struct DateBounds {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateBounds {
    fn from_filters(filters: &Filters) -> Self {
        Self {
            from: parse_bound("date_from", &filters.date_from),
            to: parse_bound("date_to", &filters.date_to),
        }
    }

    fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

fn parse_bound(name: &str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::debug!("⚠️ {} ignorado ('{}'): {}", name, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filter::{FilterField, FilterPatch};
    use crate::services::mock_data_service::load_contacts;

    fn contacts() -> Vec<Contact> {
        load_contacts().unwrap()
    }

    fn ids(list: &[Contact]) -> Vec<u32> {
        list.iter().map(|c| c.id).collect()
    }

    fn with_filters(patch: FilterPatch) -> FilterState {
        let mut state = FilterState::default();
        state.filters.merge(&patch);
        state
    }

    #[test]
    fn test_default_state_sorts_newest_first() {
        let result = apply_filters(&contacts(), &FilterState::default());
        assert_eq!(ids(&result), vec![6, 4, 8, 2, 5, 1, 3, 7]);
    }

    #[test]
    fn test_search_matches_name_email_company() {
        let mut state = FilterState::default();
        state.search_query = "  ACME ".to_string();
        let result = apply_filters(&contacts(), &state);
        assert_eq!(ids(&result), vec![1, 3]);

        state.search_query = "ramirez".to_string();
        assert_eq!(ids(&apply_filters(&contacts(), &state)), vec![4]);
    }

    #[test]
    fn test_exact_and_substring_filters() {
        let state = with_filters(
            FilterPatch::new()
                .with(FilterField::CountryCode, "fr")
                .with(FilterField::Status, "active"),
        );
        assert_eq!(ids(&apply_filters(&contacts(), &state)), vec![1]);

        let state = with_filters(FilterPatch::new().with(FilterField::Email, ".de"));
        assert_eq!(ids(&apply_filters(&contacts(), &state)), vec![5]);

        // "act" no es igual a "active"
        let state = with_filters(FilterPatch::new().with(FilterField::Status, "act"));
        assert!(apply_filters(&contacts(), &state).is_empty());
    }

    #[test]
    fn test_date_range_inclusive() {
        let state = with_filters(
            FilterPatch::new()
                .with(FilterField::DateFrom, "2024-03-02")
                .with(FilterField::DateTo, "2024-05-08"),
        );
        assert_eq!(ids(&apply_filters(&contacts(), &state)), vec![4, 8, 2]);
    }

    #[test]
    fn test_invalid_date_bound_ignored() {
        let state = with_filters(
            FilterPatch::new()
                .with(FilterField::DateFrom, "yesterday")
                .with(FilterField::DateTo, "2023-12-31"),
        );
        assert_eq!(ids(&apply_filters(&contacts(), &state)), vec![3, 7]);
    }

    #[test]
    fn test_sort_by_name_asc() {
        let mut state = FilterState::default();
        state.sort_by = "name".to_string();
        state.sort_order = SortOrder::Asc;
        assert_eq!(
            ids(&apply_filters(&contacts(), &state)),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_desc_sort_is_stable() {
        let mut state = FilterState::default();
        state.sort_by = "company_name".to_string();
        let result = apply_filters(&contacts(), &state);
        // Acme Corp (1, 3) queda al final, en el orden de entrada
        assert_eq!(&ids(&result)[6..], &[1, 3]);
    }

    #[test]
    fn test_unknown_sort_keeps_input_order() {
        let mut state = FilterState::default();
        state.sort_by = "phone".to_string();
        assert_eq!(
            ids(&apply_filters(&contacts(), &state)),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_blank_filters_do_not_restrict() {
        let state = with_filters(
            FilterPatch::new()
                .with(FilterField::Email, "  ")
                .with(FilterField::Status, "  ")
                .with(FilterField::CountryCode, "\t"),
        );
        assert_eq!(apply_filters(&contacts(), &state).len(), 8);
    }

    #[test]
    fn test_exact_match_folds_non_ascii_case() {
        assert!(equals_ci("Société", "SOCIÉTÉ"));
        assert!(equals_ci("active", " Active "));
        assert!(!equals_ci("active", "act"));
    }

    #[test]
    fn test_empty_input() {
        assert!(apply_filters(&[], &FilterState::default()).is_empty());
    }
}
