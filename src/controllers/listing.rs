use axum::{
    extract::{RawQuery, State},
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    api_client::{ApiClient, ApiError},
    config::UiConfig,
    filters::{validation_messages, ListingQuery},
    models::{EventSummary, Paginated, VenueOption},
    views::listing::{self, EventsRegion, PaginationState},
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(listing_page))
}

/// Контроллер страницы списка: площадки для фильтра, карточки событий, пагинация.
pub struct ListingController {
    api: ApiClient,
    ui: UiConfig,
    query: ListingQuery,
    venues: Vec<VenueOption>,
    events: EventsRegion,
    pagination: Option<PaginationState>,
}

enum EventsFailure {
    Invalid(Vec<String>),
    Api(ApiError),
}

impl ListingController {
    pub fn new(api: ApiClient, ui: UiConfig, query: ListingQuery) -> Self {
        Self {
            api,
            ui,
            query,
            venues: Vec::new(),
            events: EventsRegion::Loading,
            pagination: None,
        }
    }

    /// Загружает площадки и события текущей страницы параллельно.
    pub async fn load(&mut self) {
        let page = self.query.page;
        self.clear_events();

        let (venues, events) = tokio::join!(self.api.list_venues(), self.fetch_events(page));
        self.apply_venues(venues);
        self.apply_events(events, page);
    }

    /// Площадки для мультиселекта. Ошибка не фатальна: фильтр остается пустым.
    pub async fn load_venues(&mut self) {
        let venues = self.api.list_venues().await;
        self.apply_venues(venues);
    }

    /// Загружает страницу событий по текущим значениям формы.
    pub async fn load_events(&mut self, page: u32) {
        let page = page.max(1);
        self.query.page = page;
        self.clear_events();

        let events = self.fetch_events(page).await;
        self.apply_events(events, page);
    }

    fn clear_events(&mut self) {
        self.events = EventsRegion::Loading;
        self.pagination = None;
    }

    async fn fetch_events(&self, page: u32) -> Result<Paginated<EventSummary>, EventsFailure> {
        if let Err(errors) = self.query.filter.validate() {
            return Err(EventsFailure::Invalid(validation_messages(&errors)));
        }

        let params = self.query.filter.to_query_pairs(page);
        self.api
            .list_events(&params)
            .await
            .map_err(EventsFailure::Api)
    }

    fn apply_venues(&mut self, venues: Result<Vec<VenueOption>, ApiError>) {
        match venues {
            Ok(venues) => self.venues = venues,
            Err(e) => {
                warn!("Не удалось загрузить список площадок: {}", e);
                self.venues.clear();
            }
        }
    }

    fn apply_events(&mut self, events: Result<Paginated<EventSummary>, EventsFailure>, page: u32) {
        match events {
            Ok(data) => {
                info!("Loaded {} of {} events for page {}", data.results.len(), data.count, page);
                self.pagination = PaginationState::from_page(&data, page);
                self.events = if data.results.is_empty() {
                    EventsRegion::Empty
                } else {
                    EventsRegion::Cards(data.results)
                };
            }
            Err(EventsFailure::Invalid(messages)) => {
                warn!("Rejected listing filters: {:?}", messages);
                self.events = EventsRegion::Invalid(messages);
            }
            Err(EventsFailure::Api(e)) => {
                error!("Failed to load events: {}", e);
                self.events = EventsRegion::Error;
            }
        }
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn venues(&self) -> &[VenueOption] {
        &self.venues
    }

    pub fn events(&self) -> &EventsRegion {
        &self.events
    }

    pub fn pagination(&self) -> Option<PaginationState> {
        self.pagination
    }

    pub fn render(&self) -> String {
        listing::render_page(
            &self.ui,
            &self.query.filter,
            &self.venues,
            &self.events,
            self.pagination,
        )
        .into_string()
    }
}

pub async fn listing_page(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Html<String> {
    let query = ListingQuery::from_query_str(raw.as_deref());
    let mut controller = ListingController::new(state.api.clone(), state.config.ui.clone(), query);
    controller.load().await;
    Html(controller.render())
}
