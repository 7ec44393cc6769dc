pub mod data_table;
pub mod search_select;
pub mod table;

pub use data_table::FilterableTable;
pub use search_select::AsyncSearchSelect;
