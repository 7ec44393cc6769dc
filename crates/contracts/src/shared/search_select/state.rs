use super::config::SearchSelectConfig;
use crate::shared::record::Record;
use serde::{Deserialize, Serialize};

pub const NO_OPTIONS_MESSAGE: &str = "No results found";

/// Событие изменения поля в форме `{ target: { name, value } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTarget {
    pub name: String,
    pub value: String,
}

impl ChangeEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: ChangeTarget {
                name: name.into(),
                value: value.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectPhase {
    /// Нет запроса и нет выбора
    #[default]
    Idle,
    /// Пользователь вводит запрос
    Typing,
    /// Текст совпадает с выбранной опцией
    Selected,
    /// Сброшено кнопкой очистки
    Cleared,
}

/// Что показывать под полем ввода
#[derive(Debug, Clone, PartialEq)]
pub enum Dropdown<'a> {
    Hidden,
    Options(Vec<&'a Record>),
    NoResults,
}

/// Состояние поля выбора с поиском.
///
/// Методы, меняющие выбор, возвращают событие для владельца формы.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSelectState {
    config: SearchSelectConfig,
    search_text: String,
    selected_label: String,
    /// Последнее значение, о котором знает компонент (своё или от владельца)
    committed: String,
    dropdown_open: bool,
    phase: SelectPhase,
}

impl SearchSelectState {
    pub fn new(config: SearchSelectConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SearchSelectConfig {
        &self.config
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_label(&self) -> &str {
        &self.selected_label
    }

    pub fn phase(&self) -> SelectPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.dropdown_open
    }

    /// Ввод текста. Если текст разошёлся с выбранной подписью, выбор
    /// сбрасывается у владельца сразу, не дожидаясь нового выбора.
    pub fn input(&mut self, text: impl Into<String>) -> Option<ChangeEvent> {
        self.search_text = text.into();
        self.dropdown_open = true;
        self.phase = if self.search_text.is_empty() {
            SelectPhase::Idle
        } else {
            SelectPhase::Typing
        };

        if self.search_text != self.selected_label {
            self.committed.clear();
            return Some(self.change(String::new()));
        }
        None
    }

    /// Кандидаты для текущего текста. Пустой текст — пустой список.
    pub fn candidates<'a>(&self, options: &'a [Record]) -> Vec<&'a Record> {
        if self.search_text.trim().is_empty() {
            return Vec::new();
        }
        let needle = self.search_text.to_lowercase();
        options
            .iter()
            .filter(|option| self.config.option_matches(option, &needle))
            .collect()
    }

    pub fn dropdown<'a>(&self, options: &'a [Record]) -> Dropdown<'a> {
        if !self.dropdown_open {
            return Dropdown::Hidden;
        }
        let candidates = self.candidates(options);
        if !candidates.is_empty() {
            Dropdown::Options(candidates)
        } else if !self.search_text.is_empty() {
            Dropdown::NoResults
        } else {
            Dropdown::Hidden
        }
    }

    pub fn select(&mut self, option: &Record) -> ChangeEvent {
        let label = self.config.display_text(option);
        self.search_text = label.clone();
        self.selected_label = label;
        self.dropdown_open = false;
        self.phase = SelectPhase::Selected;

        let value = self.config.option_value(option);
        self.committed = value.clone();
        self.change(value)
    }

    pub fn clear(&mut self) -> ChangeEvent {
        self.search_text.clear();
        self.selected_label.clear();
        self.committed.clear();
        self.dropdown_open = false;
        self.phase = SelectPhase::Cleared;
        self.change(String::new())
    }

    /// Фокус открывает список, только если есть из чего выбирать
    pub fn focus(&mut self, options: &[Record]) {
        if !options.is_empty() {
            self.dropdown_open = true;
        }
    }

    pub fn click_outside(&mut self) {
        self.dropdown_open = false;
    }

    /// Синхронизация с внешним значением владельца (сброс формы, загрузка
    /// записи на редактирование, пришли опции).
    ///
    /// Эхо собственного события во время ввода текст не затирает.
    pub fn sync_value(&mut self, value: &str, options: &[Record]) {
        let unchanged = value == self.committed;
        if unchanged && self.phase == SelectPhase::Typing {
            return;
        }
        self.committed = value.to_string();

        if value.is_empty() {
            self.selected_label.clear();
            self.search_text.clear();
            if self.phase != SelectPhase::Cleared {
                self.phase = SelectPhase::Idle;
            }
            return;
        }

        match options
            .iter()
            .find(|option| self.config.option_value(option) == value)
        {
            Some(option) => {
                let label = self.config.display_text(option);
                self.search_text = label.clone();
                self.selected_label = label;
                self.phase = SelectPhase::Selected;
            }
            // Выбранная опция выпала из новой порции результатов поиска:
            // значение у владельца прежнее, подпись остаётся
            None if unchanged
                && self.phase == SelectPhase::Selected
                && !self.selected_label.is_empty() =>
            {
                self.search_text = self.selected_label.clone();
            }
            None => {
                self.selected_label.clear();
                self.search_text.clear();
                self.phase = SelectPhase::Idle;
            }
        }
    }

    fn change(&self, value: String) -> ChangeEvent {
        ChangeEvent::new(self.config.name.clone(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<Record> {
        vec![
            Record::new().with("id", "1").with("name", "Acme"),
            Record::new().with("id", "2").with("name", "Beta Corp"),
        ]
    }

    fn state() -> SearchSelectState {
        SearchSelectState::new(SearchSelectConfig::new("supplierId"))
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().filter_map(|r| r.id()).collect()
    }

    #[test]
    fn test_type_and_pick_scenario() {
        let opts = options();
        let mut select = state();

        let event = select.input("be");
        assert_eq!(event, Some(ChangeEvent::new("supplierId", "")));
        assert_eq!(select.phase(), SelectPhase::Typing);
        match select.dropdown(&opts) {
            Dropdown::Options(items) => assert_eq!(ids(&items), vec!["2"]),
            other => panic!("unexpected dropdown: {:?}", other),
        }

        let picked = select.candidates(&opts)[0].clone();
        let event = select.select(&picked);
        assert_eq!(event, ChangeEvent::new("supplierId", "2"));
        assert_eq!(select.search_text(), "Beta Corp");
        assert_eq!(select.phase(), SelectPhase::Selected);
        assert!(!select.is_open());
        assert_eq!(select.dropdown(&opts), Dropdown::Hidden);
    }

    #[test]
    fn test_clear_notifies_empty_value() {
        let opts = options();
        let mut select = state();
        select.select(&opts[0]);
        let event = select.clear();
        assert_eq!(event, ChangeEvent::new("supplierId", ""));
        assert_eq!(select.search_text(), "");
        assert_eq!(select.selected_label(), "");
        assert_eq!(select.phase(), SelectPhase::Cleared);
    }

    #[test]
    fn test_editing_selected_text_clears_value_and_keeps_text() {
        let opts = options();
        let mut select = state();
        select.select(&opts[1]);

        let event = select.input("Beta Cor");
        assert_eq!(event, Some(ChangeEvent::new("supplierId", "")));
        // Владелец возвращает пустое значение — введённый текст остаётся
        select.sync_value("", &opts);
        assert_eq!(select.search_text(), "Beta Cor");
        assert_eq!(select.phase(), SelectPhase::Typing);

        // Ввод, совпадающий с подписью выбора, ничего не сообщает
        let mut select = state();
        select.select(&opts[1]);
        assert_eq!(select.input("Beta Corp"), None);
    }

    #[test]
    fn test_unknown_value_shows_empty_text() {
        let opts = options();
        let mut select = state();
        select.sync_value("2", &opts);
        assert_eq!(select.search_text(), "Beta Corp");
        select.sync_value("99", &opts);
        assert_eq!(select.search_text(), "");
        assert_eq!(select.selected_label(), "");
    }

    #[test]
    fn test_selection_survives_results_without_it() {
        let opts = options();
        let mut select = state();
        let event = select.select(&opts[0]);
        select.sync_value(&event.target.value, &opts);

        // Новый ответ поиска без выбранного поставщика
        let next_page = vec![Record::new().with("id", "7").with("name", "Gamma")];
        select.sync_value("1", &next_page);
        assert_eq!(select.search_text(), "Acme");
        assert_eq!(select.phase(), SelectPhase::Selected);

        // Другое неизвестное значение от владельца по-прежнему очищает текст
        select.sync_value("99", &next_page);
        assert_eq!(select.search_text(), "");
    }

    #[test]
    fn test_value_resolved_when_options_arrive_later() {
        let mut select = state();
        select.sync_value("1", &[]);
        assert_eq!(select.search_text(), "");
        select.sync_value("1", &options());
        assert_eq!(select.search_text(), "Acme");
        assert_eq!(select.phase(), SelectPhase::Selected);
    }

    #[test]
    fn test_focus_and_click_outside_keep_value() {
        let opts = options();
        let mut select = state();
        select.select(&opts[0]);

        select.focus(&[]);
        assert!(!select.is_open());
        select.focus(&opts);
        assert!(select.is_open());
        assert_eq!(select.search_text(), "Acme");

        select.click_outside();
        assert!(!select.is_open());
        assert_eq!(select.phase(), SelectPhase::Selected);
    }

    #[test]
    fn test_no_results_row_and_blank_query() {
        let opts = options();
        let mut select = state();
        select.input("zzz");
        assert_eq!(select.dropdown(&opts), Dropdown::NoResults);

        select.input("   ");
        assert!(select.candidates(&opts).is_empty());
        assert_eq!(select.dropdown(&opts), Dropdown::NoResults);

        select.input("");
        assert_eq!(select.phase(), SelectPhase::Idle);
        assert_eq!(select.dropdown(&opts), Dropdown::Hidden);
    }

    #[test]
    fn test_numeric_ids_are_reported_as_text() {
        let opts = vec![Record::new().with("id", 5).with("name", "Filtro")];
        let mut select = state();
        let event = select.select(&opts[0]);
        assert_eq!(event.target.value, "5");
        select.sync_value("5", &opts);
        assert_eq!(select.search_text(), "Filtro");
    }
}
