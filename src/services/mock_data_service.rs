// ============================================================================
// MOCK DATA SERVICE - Datos embebidos para las vistas del dashboard
// ============================================================================
// El backend real (proxy a CONFIG.backend_url) no forma parte de esta app;
// las vistas trabajan sobre estos fixtures.
// ============================================================================

use serde::de::DeserializeOwned;
use crate::error::FixtureError;
use crate::models::{Contact, VaultMetric};

const CONTACTS_JSON: &str = include_str!("../../assets/contacts.json");
const VAULT_METRICS_JSON: &str = include_str!("../../assets/vault_metrics.json");

fn parse_fixture<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError { name, source })
}

pub fn load_contacts() -> Result<Vec<Contact>, FixtureError> {
    let contacts = parse_fixture("contacts", CONTACTS_JSON)?;
    log::debug!("📋 Contactos cargados: {}", contacts.len());
    Ok(contacts)
}

pub fn load_vault_metrics() -> Result<Vec<VaultMetric>, FixtureError> {
    parse_fixture("vault_metrics", VAULT_METRICS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let contacts = load_contacts().unwrap();
        assert_eq!(contacts.len(), 8);
        assert!(contacts.iter().all(|c| c.email.contains('@')));

        let metrics = load_vault_metrics().unwrap();
        assert_eq!(metrics.len(), 4);
    }

    #[test]
    fn test_invalid_fixture_names_source() {
        let err = parse_fixture::<Contact>("broken", "[{").unwrap_err();
        assert_eq!(err.name, "broken");
        assert!(err.to_string().starts_with("fixture 'broken' inválido"));
    }
}
