use super::column::ColumnSpec;
use super::filter::filter_rows;
use super::sort::{sort_rows, SortState};
use crate::shared::record::Record;

pub const NO_RESULTS_MESSAGE: &str = "No results for this search";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// UI-состояние таблицы одного экземпляра компонента
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTableState {
    pub search_text: String,
    pub sort: SortState,
}

impl DataTableState {
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_sort(&mut self, key: &str) {
        self.sort.toggle(key);
    }

    /// Клик по заголовку: сортировка только для sortable колонок
    pub fn header_click(&mut self, column: &ColumnSpec) -> bool {
        if !column.sortable {
            return false;
        }
        self.set_sort(&column.key);
        true
    }

    /// Фильтр, затем сортировка
    pub fn view<'a>(&self, rows: &'a [Record], columns: &[ColumnSpec]) -> TableView<'a> {
        let mut visible = filter_rows(rows, columns, &self.search_text);
        sort_rows(&mut visible, &self.sort);
        TableView {
            rows: visible,
            total: rows.len(),
            query_active: !self.search_text.is_empty(),
        }
    }
}

/// Что показать вместо пустой таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Запрос ничего не нашёл
    NoResults,
    /// Исходная коллекция пуста
    NoData,
}

impl EmptyState {
    pub fn message<'m>(&self, empty_message: &'m str) -> &'m str {
        match self {
            Self::NoResults => NO_RESULTS_MESSAGE,
            Self::NoData => empty_message,
        }
    }
}

/// Вычисленное представление таблицы
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Record>,
    pub total: usize,
    pub query_active: bool,
}

impl<'a> TableView<'a> {
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.rows.is_empty() {
            None
        } else if self.query_active {
            Some(EmptyState::NoResults)
        } else {
            Some(EmptyState::NoData)
        }
    }

    /// Подпись под таблицей, только если есть видимые строки
    pub fn footer(&self) -> Option<String> {
        if self.rows.is_empty() {
            return None;
        }
        Some(footer_text(self.rows.len(), self.total))
    }
}

pub fn footer_text(visible: usize, total: usize) -> String {
    format!(
        "Showing {} of {} record{}",
        visible,
        total,
        if total == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnSpec> {
        vec![ColumnSpec::new("name", "Name").sortable()]
    }

    fn rows() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("name", "Alpha"),
            Record::new().with("id", 2).with("name", "Beta"),
        ]
    }

    #[test]
    fn test_search_scenario() {
        let data = rows();
        let mut state = DataTableState::default();
        state.set_search_text("al");
        let view = state.view(&data, &columns());
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id(), Some("1".to_string()));
        assert_eq!(view.footer().as_deref(), Some("Showing 1 of 2 records"));
    }

    #[test]
    fn test_filter_applies_before_sort() {
        let data = vec![
            Record::new().with("id", 1).with("name", "Beta one"),
            Record::new().with("id", 2).with("name", "Alpha"),
            Record::new().with("id", 3).with("name", "Beta two"),
        ];
        let mut state = DataTableState::default();
        state.set_sort("name");
        state.set_sort("name");
        state.set_search_text("beta");
        let view = state.view(&data, &columns());
        let ids: Vec<_> = view.rows.iter().filter_map(|r| r.id()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(view.total, 3);
    }

    #[test]
    fn test_empty_states() {
        let data = rows();
        let mut state = DataTableState::default();
        state.set_search_text("zzz");
        let view = state.view(&data, &columns());
        assert_eq!(view.empty_state(), Some(EmptyState::NoResults));
        assert_eq!(
            view.empty_state().map(|e| e.message(DEFAULT_EMPTY_MESSAGE)),
            Some(NO_RESULTS_MESSAGE)
        );
        assert_eq!(view.footer(), None);

        let empty: Vec<Record> = Vec::new();
        let view = DataTableState::default().view(&empty, &columns());
        assert_eq!(view.empty_state(), Some(EmptyState::NoData));
        assert_eq!(
            view.empty_state().map(|e| e.message("No suppliers registered")),
            Some("No suppliers registered")
        );
    }

    #[test]
    fn test_header_click_ignores_unsortable_columns() {
        let mut state = DataTableState::default();
        let phone = ColumnSpec::new("phone", "Phone");
        assert!(!state.header_click(&phone));
        assert_eq!(state.sort.key, None);
        assert!(state.header_click(&columns()[0]));
        assert_eq!(state.sort.key.as_deref(), Some("name"));
    }

    #[test]
    fn test_footer_singular() {
        assert_eq!(footer_text(1, 1), "Showing 1 of 1 record");
        assert_eq!(footer_text(3, 10), "Showing 3 of 10 records");
    }
}
