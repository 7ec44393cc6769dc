pub mod api;
pub mod data_table;
pub mod debounced_search;
pub mod error;
pub mod form;
pub mod lookup;
pub mod record;
pub mod search_select;
pub mod ui_config;
