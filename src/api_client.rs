//! api_client.rs
//!
//! HTTP-клиент к REST API событий. Все сетевые ошибки ловятся здесь и
//! превращаются в [`ApiError`]; контроллеры решают, фатальна ли ошибка для страницы.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::ApiConfig,
    models::{EventDetail, EventSummary, ImageSet, ImagesResponse, ListResponse, Paginated, VenueOption, WeatherSnapshot},
};

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 от API: событие не найдено или скрыто.
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Клиент для REST API событий.
#[derive(Clone)]
pub struct ApiClient {
    /// Базовый URL без завершающего `/`.
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// `GET /api/venues/` — конверт пагинации или плоский массив.
    pub async fn list_venues(&self) -> Result<Vec<VenueOption>, ApiError> {
        let response: ListResponse<VenueOption> = self.get_json("/api/venues/").await?;
        Ok(response.into_items())
    }

    /// `GET /api/events/?{query}`.
    pub async fn list_events(
        &self,
        query: &[(&str, String)],
    ) -> Result<Paginated<EventSummary>, ApiError> {
        let query = serde_urlencoded::to_string(query)?;
        let path = if query.is_empty() {
            "/api/events/".to_string()
        } else {
            format!("/api/events/?{}", query)
        };
        self.get_json(&path).await
    }

    /// `GET /api/events/{id}/`.
    pub async fn get_event(&self, id: i64) -> Result<EventDetail, ApiError> {
        self.get_json(&format!("/api/events/{}/", id)).await
    }

    /// `GET /api/events/{id}/weather/`.
    pub async fn get_weather(&self, id: i64) -> Result<WeatherSnapshot, ApiError> {
        self.get_json(&format!("/api/events/{}/weather/", id)).await
    }

    /// `GET /api/events/{id}/images/`, нормализованный в [`ImageSet`].
    pub async fn get_images(&self, id: i64) -> Result<ImageSet, ApiError> {
        let response: ImagesResponse = self.get_json(&format!("/api/events/{}/images/", id)).await?;
        Ok(response.into())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url));
        }
        if !status.is_success() {
            return Err(ApiError::Status { status, url });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }
}
