//! Универсальная таблица: поиск по колонкам, сортировка по одному полю,
//! подсчёт видимых записей.
//!
//! ## Использование
//!
//! ```rust,ignore
//! use contracts::shared::data_table::{ColumnSpec, DataTableState};
//!
//! let columns = vec![ColumnSpec::new("name", "Name").sortable()];
//! let mut state = DataTableState::default();
//! state.set_search_text("al");
//! let view = state.view(&rows, &columns);
//! println!("{:?}", view.footer());
//! ```

mod column;
mod filter;
mod sort;
mod state;

pub use column::{CellRenderer, ColumnSpec, CELL_PLACEHOLDER};
pub use filter::{filter_rows, row_matches};
pub use sort::{sort_rows, SortDirection, SortState};
pub use state::{
    footer_text, DataTableState, EmptyState, TableView, DEFAULT_EMPTY_MESSAGE, NO_RESULTS_MESSAGE,
};
