pub mod use_search_filter;
pub mod use_current_user;

pub use use_search_filter::{
    require_provider, use_search_filter_checked, use_filter_store, use_search_filter,
    UseSearchFilterHandle,
};
pub use use_current_user::{use_current_user, UseCurrentUserHandle};
