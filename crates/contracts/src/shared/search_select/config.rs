use crate::shared::record::{value_contains, Record};
use serde::{Deserialize, Serialize};

/// Настройки поля выбора с поиском
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSelectConfig {
    /// Имя поля формы, уходит в `ChangeEvent::target.name`
    pub name: String,
    /// Поле для отображения
    pub display_key: String,
    /// Поле значения (идентификатор)
    pub value_key: String,
    /// Поля для поиска; `None` — искать по `display_key`
    pub search_keys: Option<Vec<String>>,
    /// Поле для отображения, если `display_key` пустой
    pub fallback_display_key: Option<String>,
}

impl Default for SearchSelectConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            display_key: "name".to_string(),
            value_key: "id".to_string(),
            search_keys: None,
            fallback_display_key: None,
        }
    }
}

impl SearchSelectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn display_key(mut self, key: impl Into<String>) -> Self {
        self.display_key = key.into();
        self
    }

    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        self
    }

    pub fn search_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn fallback_display_key(mut self, key: impl Into<String>) -> Self {
        self.fallback_display_key = Some(key.into());
        self
    }

    /// Текст для отображения: основное поле, если оно не пустое,
    /// иначе запасное поле.
    pub fn display_text(&self, option: &Record) -> String {
        let primary = option.text(&self.display_key).unwrap_or_default();
        if !primary.trim().is_empty() {
            return primary;
        }
        if let Some(fallback_key) = &self.fallback_display_key {
            if let Some(fallback) = option.text(fallback_key).filter(|s| !s.is_empty()) {
                return fallback;
            }
        }
        primary
    }

    /// Значение (идентификатор) опции
    pub fn option_value(&self, option: &Record) -> String {
        option.text(&self.value_key).unwrap_or_default()
    }

    /// `needle_lower` — запрос в нижнем регистре
    pub fn option_matches(&self, option: &Record, needle_lower: &str) -> bool {
        match &self.search_keys {
            Some(keys) => keys
                .iter()
                .any(|key| value_contains(option.get(key), needle_lower)),
            None => value_contains(option.get(&self.display_key), needle_lower),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_fallback() {
        let config = SearchSelectConfig::new("customerId")
            .display_key("fullName")
            .fallback_display_key("companyName");
        let person = Record::new().with("fullName", "Ana Ruiz").with("companyName", "Acme");
        let company = Record::new().with("fullName", "  ").with("companyName", "Acme");
        let nothing = Record::new().with("fullName", "");
        assert_eq!(config.display_text(&person), "Ana Ruiz");
        assert_eq!(config.display_text(&company), "Acme");
        assert_eq!(config.display_text(&nothing), "");
    }

    #[test]
    fn test_option_matches_search_keys() {
        let config = SearchSelectConfig::new("customerId")
            .display_key("fullName")
            .search_keys(["fullName", "companyName"]);
        let option = Record::new().with("fullName", "Ana Ruiz").with("companyName", "Acme");
        assert!(config.option_matches(&option, "acm"));
        assert!(config.option_matches(&option, "ruiz"));
        assert!(!config.option_matches(&option, "zeta"));

        let by_display = SearchSelectConfig::new("customerId").display_key("fullName");
        assert!(!by_display.option_matches(&option, "acm"));
    }
}
