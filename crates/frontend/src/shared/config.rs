//! Конфигурация UI: встроенный TOML + необязательное переопределение
//! из `localStorage["ui_config"]`.

use contracts::shared::ui_config::{load_config, UiConfig};
use once_cell::sync::OnceCell;

const STORAGE_KEY: &str = "ui_config";

static CONFIG: OnceCell<UiConfig> = OnceCell::new();

fn read_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

/// Загружается один раз при первом обращении
pub fn ui_config() -> &'static UiConfig {
    CONFIG.get_or_init(|| {
        let override_toml = read_override();
        load_config(override_toml.as_deref()).unwrap_or_else(|e| {
            log::error!("Failed to load UI config: {}", e);
            UiConfig::default()
        })
    })
}
