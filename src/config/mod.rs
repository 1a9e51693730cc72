use serde::Deserialize;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub ui: UiConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки REST API, из которого берутся события
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

// Настройки отображения страниц
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub site_name: String,
    pub list_placeholder_image: String,
    pub detail_placeholder_image: String,
    /// Смещение от UTC, в котором показываются даты.
    pub display_utc_offset_hours: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: "EventManager".to_string(),
            list_placeholder_image: "https://via.placeholder.com/400x250?text=No+Image".to_string(),
            detail_placeholder_image:
                "https://via.placeholder.com/800x400?text=Нет+изображения".to_string(),
            display_utc_offset_hours: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let ui_defaults = UiConfig::default();

        Ok(Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", "8080")?,
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "event_frontend=debug,tower_http=debug".to_string()),
            },
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout_seconds: parse_var("API_TIMEOUT_SECONDS", "30")?,
            },
            ui: UiConfig {
                site_name: env::var("SITE_NAME").unwrap_or(ui_defaults.site_name),
                list_placeholder_image: env::var("LIST_PLACEHOLDER_IMAGE")
                    .unwrap_or(ui_defaults.list_placeholder_image),
                detail_placeholder_image: env::var("DETAIL_PLACEHOLDER_IMAGE")
                    .unwrap_or(ui_defaults.detail_placeholder_image),
                display_utc_offset_hours: parse_var("DISPLAY_UTC_OFFSET_HOURS", "0")?,
            },
        })
    }

    /// Конфигурация для тестов и локального запуска против произвольного API.
    pub fn for_api(base_url: impl Into<String>) -> Self {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
                rust_log: "event_frontend=debug".to_string(),
            },
            api: ApiConfig {
                base_url: base_url.into().trim_end_matches('/').to_string(),
                timeout_seconds: 5,
            },
            ui: UiConfig::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}
