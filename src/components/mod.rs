pub mod app;
pub mod avatar;
pub mod contacts_table;
pub mod filter_bar;
pub mod header;
pub mod metric_card;
pub mod sidebar;

pub use app::App;
pub use avatar::Avatar;
pub use contacts_table::ContactsTable;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use metric_card::MetricCard;
pub use sidebar::Sidebar;
