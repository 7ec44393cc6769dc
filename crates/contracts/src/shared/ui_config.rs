use serde::{Deserialize, Serialize};

pub const DEFAULT_DEBOUNCE_MS: u32 = 200;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub table: TableSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

/// Параметры поиска с задержкой
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Пауза после последнего нажатия, мс
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
    /// Минимальная длина запроса для обращения к API
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

fn default_base_url() -> String {
    "http://localhost:8585".to_string()
}

fn default_timeout_ms() -> u32 {
    10_000
}

fn default_debounce_ms() -> u32 {
    DEFAULT_DEBOUNCE_MS
}

fn default_min_query_len() -> usize {
    DEFAULT_MIN_QUERY_LEN
}

fn default_page_size() -> u32 {
    10
}

fn default_placeholder() -> String {
    crate::shared::data_table::CELL_PLACEHOLDER.to_string()
}

fn default_empty_message() -> String {
    crate::shared::data_table::DEFAULT_EMPTY_MESSAGE.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            search: SearchSettings::default(),
            table: TableSettings::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            page_size: default_page_size(),
        }
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            empty_message: default_empty_message(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8585"
timeout_ms = 10000

[search]
debounce_ms = 200
min_query_len = 2
page_size = 10

[table]
placeholder = "-"
empty_message = "No data available"
"#;

/// Load UI configuration
///
/// Search order:
/// 1. Override TOML (e.g. from localStorage), if given and valid
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<UiConfig> {
    if let Some(contents) = override_toml.filter(|s| !s.trim().is_empty()) {
        match toml::from_str::<UiConfig>(contents) {
            Ok(config) => {
                log::info!("Loaded UI config override");
                return Ok(config);
            }
            Err(e) => log::warn!("Invalid UI config override, using defaults: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    let config: UiConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<UiConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8585");
        assert_eq!(config.search.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.search.min_query_len, DEFAULT_MIN_QUERY_LEN);
        assert_eq!(config.table.placeholder, "-");
    }

    #[test]
    fn test_partial_override_takes_defaults() {
        let config = load_config(Some("[search]\ndebounce_ms = 450\n")).unwrap();
        assert_eq!(config.search.debounce_ms, 450);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("[search\nbroken")).unwrap();
        assert_eq!(config.search, SearchSettings::default());
        let config = load_config(None).unwrap();
        assert_eq!(config.table, TableSettings::default());
    }
}
