pub mod search_filter;

pub use search_filter::SearchFilterProvider;
