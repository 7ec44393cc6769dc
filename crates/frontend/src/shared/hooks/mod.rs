pub mod use_debounced_search;

pub use use_debounced_search::{use_debounced_search, DebouncedSearchHandle};
