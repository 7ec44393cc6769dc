use crate::shared::record::{compare_values, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// Состояние сортировки. Направление имеет смысл только при заданном ключе.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Клик по заголовку: тот же ключ меняет направление, новый ключ
    /// сбрасывает направление на возрастание.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn is_sorted_by(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    /// Индикатор для заголовка колонки
    pub fn indicator(&self, key: &str) -> &'static str {
        if !self.is_sorted_by(key) {
            return "";
        }
        match self.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }
}

/// Стабильная сортировка по одному полю. Без ключа порядок не меняется.
pub fn sort_rows(rows: &mut [&Record], state: &SortState) {
    let Some(key) = state.key.as_deref() else {
        return;
    };
    rows.sort_by(|a, b| {
        let cmp = compare_values(a.get(key), b.get(key));
        if state.direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("name", "Gamma").with("qty", 5),
            Record::new().with("id", 2).with("name", "Alpha").with("qty", 10),
            Record::new().with("id", 3).with("name", "Beta").with("qty", 5),
            Record::new().with("id", 4).with("name", "Delta"),
        ]
    }

    fn ids(rows: &[&Record]) -> Vec<String> {
        rows.iter().filter_map(|r| r.id()).collect()
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let mut state = SortState::default();
        state.toggle("name");
        assert_eq!(state.key.as_deref(), Some("name"));
        assert_eq!(state.direction, SortDirection::Ascending);
        state.toggle("name");
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle("qty");
        assert_eq!(state.key.as_deref(), Some("qty"));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_strings_and_numbers() {
        let data = rows();
        let mut view: Vec<&Record> = data.iter().collect();
        let mut state = SortState::default();
        state.toggle("name");
        sort_rows(&mut view, &state);
        assert_eq!(ids(&view), vec!["2", "3", "4", "1"]);

        state.toggle("name");
        sort_rows(&mut view, &state);
        assert_eq!(ids(&view), vec!["1", "4", "3", "2"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let data = rows();
        let mut view: Vec<&Record> = data.iter().collect();
        let state = SortState {
            key: Some("qty".to_string()),
            direction: SortDirection::Ascending,
        };
        sort_rows(&mut view, &state);
        // id 1 и 3 с одинаковым qty сохраняют порядок, строка без qty в конце
        assert_eq!(ids(&view), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let data = rows();
        let mut view: Vec<&Record> = data.iter().collect();
        let state = SortState {
            key: Some("name".to_string()),
            direction: SortDirection::Descending,
        };
        sort_rows(&mut view, &state);
        let once = ids(&view);
        sort_rows(&mut view, &state);
        assert_eq!(ids(&view), once);
    }

    #[test]
    fn test_double_toggle_returns_to_ascending_and_keeps_ties_in_order() {
        let data = vec![
            Record::new().with("id", 1).with("group", "b"),
            Record::new().with("id", 2).with("group", "a"),
            Record::new().with("id", 3).with("group", "b"),
            Record::new().with("id", 4).with("group", "a"),
        ];
        let mut state = SortState::default();
        state.toggle("group");
        let mut first: Vec<&Record> = data.iter().collect();
        sort_rows(&mut first, &state);

        state.toggle("group");
        state.toggle("group");
        assert_eq!(state.direction, SortDirection::Ascending);
        let mut second: Vec<&Record> = data.iter().collect();
        sort_rows(&mut second, &state);

        assert_eq!(ids(&first), vec!["2", "4", "1", "3"]);
        assert_eq!(ids(&second), ids(&first));
    }

    #[test]
    fn test_indicator() {
        let mut state = SortState::default();
        assert_eq!(state.indicator("name"), "");
        state.toggle("name");
        assert_eq!(state.indicator("name"), " ▲");
        assert_eq!(state.indicator("qty"), "");
        state.toggle("name");
        assert_eq!(state.indicator("name"), " ▼");
    }
}
