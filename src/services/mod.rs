pub mod contact_query;
pub mod mock_data_service;

pub use contact_query::apply_filters;
pub use mock_data_service::{load_contacts, load_vault_metrics};
