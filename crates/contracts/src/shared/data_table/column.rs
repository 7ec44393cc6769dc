use crate::shared::record::{coerce_to_string, Record};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Плейсхолдер для пустых ячеек
pub const CELL_PLACEHOLDER: &str = "-";

/// Функция отображения ячейки: (значение поля, вся строка) -> текст
pub type CellRenderer = Arc<dyn Fn(Option<&Value>, &Record) -> String + Send + Sync>;

/// Описание колонки таблицы
#[derive(Clone)]
pub struct ColumnSpec {
    /// Поле записи
    pub key: String,
    /// Заголовок
    pub label: String,
    pub sortable: bool,
    /// Ширина колонки (CSS), если задана
    pub width: Option<String>,
    pub render: Option<CellRenderer>,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Inline-стиль ячейки заголовка для заданной ширины
    pub fn header_style(&self) -> Option<String> {
        self.width
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(|w| format!("width: {}", w))
    }

    /// Текст ячейки для строки. Отсутствующее поле, `null` и пустая строка
    /// дают плейсхолдер.
    pub fn cell_text(&self, row: &Record) -> String {
        self.cell_text_or(row, CELL_PLACEHOLDER)
    }

    pub fn cell_text_or(&self, row: &Record, placeholder: &str) -> String {
        let value = row.get(&self.key);
        if let Some(render) = &self.render {
            return render(value, row);
        }
        value
            .and_then(coerce_to_string)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| placeholder.to_string())
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl PartialEq for ColumnSpec {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.sortable == other.sortable
            && self.width == other.width
            && self.render.is_some() == other.render.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_placeholder_for_absent_fields() {
        let column = ColumnSpec::new("phone", "Phone");
        let row = Record::new().with("id", 1).with("name", "Alpha");
        assert_eq!(column.cell_text(&row), "-");
        assert_eq!(column.cell_text(&Record::new().with("phone", "")), "-");
        assert_eq!(column.cell_text(&Record::new().with("phone", Value::Null)), "-");
        assert_eq!(column.cell_text(&Record::new().with("phone", 0)), "0");
    }

    #[test]
    fn test_custom_renderer_receives_value_and_row() {
        let column = ColumnSpec::new("active", "Status").render(|value, row| {
            let active = value.and_then(Value::as_bool).unwrap_or(false);
            format!(
                "{} ({})",
                if active { "Active" } else { "Inactive" },
                row.text("name").unwrap_or_default()
            )
        });
        let row = Record::new().with("name", "Acme").with("active", true);
        assert_eq!(column.cell_text(&row), "Active (Acme)");
        assert_eq!(column.cell_text(&Record::new()), "Inactive ()");
    }

    #[test]
    fn test_header_style_from_width() {
        assert_eq!(ColumnSpec::new("name", "Name").header_style(), None);
        assert_eq!(
            ColumnSpec::new("name", "Name").width("240px").header_style().as_deref(),
            Some("width: 240px")
        );
        assert_eq!(ColumnSpec::new("name", "Name").width(" ").header_style(), None);
    }
}
