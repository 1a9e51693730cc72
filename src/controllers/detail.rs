//! Страница события.
//!
//! Сначала последовательно грузится и рендерится основная информация, затем
//! погода и картинки запрашиваются одновременно, и каждая часть рендерится
//! сама по себе, как только ее запрос завершится. Ошибка одной не мешает другой.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use futures::{future::BoxFuture, stream::FuturesUnordered, FutureExt, StreamExt};
use maud::Markup;
use std::{convert::Infallible, sync::Arc};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{
    api_client::{ApiClient, ApiError},
    config::UiConfig,
    models::{EventDetail, ImageSet, WeatherSnapshot},
    views::{
        detail,
        gallery::{Gallery, CAROUSEL_ID},
        html,
    },
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/events/{id}/", get(detail_page))
}

/// Фазы страницы: `Loading → ContentShown → (WeatherLoaded | ImagesLoaded)*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Loading,
    NotFound,
    Failed,
    ContentShown,
}

/// Что поменялось на странице после вторичного запроса.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryUpdate {
    WeatherLoaded,
    ImagesLoaded,
}

enum SecondaryResult {
    Weather(Result<WeatherSnapshot, ApiError>),
    Images(Result<ImageSet, ApiError>),
}

/// Сессия одной страницы события. Владеет списком слайдов.
pub struct DetailSession {
    api: ApiClient,
    ui: UiConfig,
    event_id: i64,
    phase: DetailPhase,
    event: Option<EventDetail>,
    gallery: Gallery,
    weather: Option<WeatherSnapshot>,
}

impl DetailSession {
    pub fn new(api: ApiClient, ui: UiConfig, event_id: i64) -> Self {
        Self {
            api,
            ui,
            event_id,
            phase: DetailPhase::Loading,
            event: None,
            gallery: Gallery::default(),
            weather: None,
        }
    }

    /// Основной запрос. До его завершения страница не показывается.
    pub async fn load_primary(&mut self) -> DetailPhase {
        match self.api.get_event(self.event_id).await {
            Ok(event) => self.show_content(event),
            Err(ApiError::NotFound(_)) => {
                info!("Event {} not found", self.event_id);
                self.phase = DetailPhase::NotFound;
            }
            Err(e) => {
                error!("Failed to load event {}: {}", self.event_id, e);
                self.phase = DetailPhase::Failed;
            }
        }
        self.phase
    }

    fn show_content(&mut self, event: EventDetail) {
        let preview = event
            .summary
            .preview_image()
            .unwrap_or(self.ui.detail_placeholder_image.as_str());
        self.gallery = Gallery::seeded(preview);
        self.event = Some(event);
        self.phase = DetailPhase::ContentShown;
    }

    /// Погода и картинки параллельно; `on_update` вызывается после каждого
    /// примененного результата в порядке их завершения.
    pub async fn load_secondary<F>(&mut self, mut on_update: F)
    where
        F: FnMut(&DetailSession, SecondaryUpdate),
    {
        if self.phase != DetailPhase::ContentShown {
            return;
        }

        let id = self.event_id;
        let weather_api = self.api.clone();
        let images_api = self.api.clone();

        let mut pending: FuturesUnordered<BoxFuture<'static, SecondaryResult>> = FuturesUnordered::new();
        pending.push(async move { SecondaryResult::Weather(weather_api.get_weather(id).await) }.boxed());
        pending.push(async move { SecondaryResult::Images(images_api.get_images(id).await) }.boxed());

        while let Some(result) = pending.next().await {
            if let Some(update) = self.apply_secondary(result) {
                on_update(&*self, update);
            }
        }
    }

    fn apply_secondary(&mut self, result: SecondaryResult) -> Option<SecondaryUpdate> {
        match result {
            SecondaryResult::Weather(Ok(weather)) => {
                debug!("Weather loaded for event {}", self.event_id);
                self.weather = Some(weather);
                Some(SecondaryUpdate::WeatherLoaded)
            }
            SecondaryResult::Weather(Err(e)) => {
                warn!("Weather unavailable for event {}: {}", self.event_id, e);
                None
            }
            SecondaryResult::Images(Ok(images)) => {
                // Реальные фото вытесняют превью целиком
                if self.gallery.rebuild(&images) {
                    debug!("Gallery rebuilt with {} images for event {}", images.len(), self.event_id);
                    Some(SecondaryUpdate::ImagesLoaded)
                } else {
                    None
                }
            }
            SecondaryResult::Images(Err(e)) => {
                warn!("Images unavailable for event {}: {}", self.event_id, e);
                None
            }
        }
    }

    /// Вся страница целиком: основной запрос, затем оба вторичных.
    pub async fn run(&mut self) -> DetailPhase {
        if self.load_primary().await == DetailPhase::ContentShown {
            self.load_secondary(|_, _| {}).await;
        }
        self.phase
    }

    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    pub fn event(&self) -> Option<&EventDetail> {
        self.event.as_ref()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn title(&self) -> String {
        match &self.event {
            Some(event) => detail::document_title(&event.summary.title, &self.ui),
            None => self.ui.site_name.clone(),
        }
    }

    fn body(&self) -> Markup {
        match (self.phase, &self.event) {
            (DetailPhase::ContentShown, Some(event)) => {
                detail::render_main_layout(event, &self.gallery, self.weather.as_ref(), &self.ui)
            }
            (DetailPhase::NotFound, _) => detail::render_not_found(),
            (DetailPhase::Failed, _) | (DetailPhase::ContentShown, None) => detail::render_failed(),
            (DetailPhase::Loading, _) => detail::render_loading(),
        }
    }

    /// Текущее состояние страницы одним документом.
    pub fn render_page(&self) -> String {
        html::document(&self.title(), &self.ui.site_name, self.body()).into_string()
    }

    /// Открытая часть документа с основной информацией; дальше идут фрагменты.
    pub fn render_shell(&self) -> String {
        let mut out = html::document_open(&self.title(), &self.ui.site_name).into_string();
        out.push_str(&self.body().into_string());
        out
    }

    /// Фрагмент, заменяющий устаревшую часть уже отправленной страницы.
    pub fn render_fragment(&self, update: SecondaryUpdate) -> String {
        let markup = match update {
            SecondaryUpdate::WeatherLoaded => html::fragment(
                detail::WEATHER_BLOCK_ID,
                detail::render_weather_block(self.weather.as_ref(), &self.ui),
            ),
            SecondaryUpdate::ImagesLoaded => html::fragment(CAROUSEL_ID, self.gallery.render()),
        };
        markup.into_string()
    }
}

pub async fn detail_page(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    let mut session = DetailSession::new(state.api.clone(), state.config.ui.clone(), id);

    match session.load_primary().await {
        DetailPhase::NotFound => {
            return (StatusCode::NOT_FOUND, Html(session.render_page())).into_response();
        }
        DetailPhase::Failed | DetailPhase::Loading => {
            return (StatusCode::BAD_GATEWAY, Html(session.render_page())).into_response();
        }
        DetailPhase::ContentShown => {}
    }

    // Оболочка уходит клиенту сразу, вторичные данные догружаются в потоке ответа
    let (tx, rx) = mpsc::unbounded_channel::<String>();
    let _ = tx.send(session.render_shell());

    tokio::spawn(async move {
        session
            .load_secondary(|session, update| {
                let _ = tx.send(session.render_fragment(update));
            })
            .await;
        let _ = tx.send(html::document_close().into_string());
    });

    let stream = futures::stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|chunk| (Ok::<_, Infallible>(chunk), rx))
    });

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(stream),
    )
        .into_response()
}
