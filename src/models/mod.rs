pub mod filter;
pub mod contact;
pub mod metrics;

pub use filter::{FilterConfig, FilterField, FilterPatch, FilterState, Filters, SortOption, SortOrder};
pub use contact::Contact;
pub use metrics::VaultMetric;
