pub mod contacts;
pub mod data_vault;
pub mod placeholder;
pub mod signed_out;

pub use contacts::ContactsView;
pub use data_vault::DataVaultView;
pub use placeholder::PlaceholderView;
pub use signed_out::SignedOutView;

/// Páginas navegables desde el sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Contacts,
    DataVault,
    Reports,
    Settings,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Contacts, Page::DataVault, Page::Reports, Page::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Contacts => "Contacts",
            Page::DataVault => "Data Vault",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
        }
    }
}
