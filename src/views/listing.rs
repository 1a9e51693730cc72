use maud::{html, Markup};

use super::format;
use crate::config::UiConfig;
use crate::filters::{FilterForm, ORDERING_OPTIONS};
use crate::models::{EventSummary, Paginated, VenueOption};

pub const EMPTY_MESSAGE: &str = "Событий не найдено 😔";
pub const LOAD_ERROR_MESSAGE: &str = "Ошибка загрузки событий. Проверьте API.";

/// Содержимое `#events-container`.
#[derive(Debug, Clone, PartialEq)]
pub enum EventsRegion {
    Loading,
    Cards(Vec<EventSummary>),
    Empty,
    Error,
    Invalid(Vec<String>),
}

/// Состояние `#pagination`; существует, только если у API есть соседняя страница.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationState {
    pub fn from_page<T>(page: &Paginated<T>, current: u32) -> Option<Self> {
        if !page.has_next() && !page.has_previous() {
            return None;
        }
        Some(Self {
            current,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        })
    }
}

pub fn render_page(
    ui: &UiConfig,
    filter: &FilterForm,
    venues: &[VenueOption],
    events: &EventsRegion,
    pagination: Option<PaginationState>,
) -> Markup {
    let body = html! {
        (render_filter_form(filter, venues))
        div #events-container .row ."row-cols-1" ."row-cols-md-2" ."row-cols-lg-3" ."g-4" {
            (render_events(events, ui))
        }
        nav #pagination ."mt-4" aria-label="Страницы" {
            @if let Some(state) = pagination {
                (render_pagination(state, filter))
            }
        }
    };

    super::html::document(&ui.site_name, &ui.site_name, body)
}

fn input(id: &str, kind: &str, label: &str, value: Option<&str>) -> Markup {
    html! {
        ."col-md-3" {
            label.form-label for=(id) { (label) }
            input.form-control id=(id) name=(id) type=(kind) value=(value.unwrap_or_default());
        }
    }
}

pub fn render_filter_form(filter: &FilterForm, venues: &[VenueOption]) -> Markup {
    let ordering = filter.ordering.as_deref().unwrap_or_default();

    html! {
        form #filterForm .card .card-body .shadow-sm ."mb-4" method="get" action="/" {
            .row ."g-3" {
                (input("search", "text", "Поиск", filter.search.as_deref()))
                ."col-md-3" {
                    label.form-label for="ordering" { "Сортировка" }
                    select #ordering .form-select name="ordering" {
                        @for (key, label) in ORDERING_OPTIONS {
                            option value=(key) selected[ordering == *key] { (label) }
                        }
                    }
                }
                (input("rating_min", "number", "Рейтинг от", filter.rating_min.as_deref()))
                (input("rating_max", "number", "Рейтинг до", filter.rating_max.as_deref()))
                (input("start_at_after", "datetime-local", "Начало от", filter.start_at_after.as_deref()))
                (input("start_at_before", "datetime-local", "Начало до", filter.start_at_before.as_deref()))
                (input("end_at_after", "datetime-local", "Окончание от", filter.end_at_after.as_deref()))
                (input("end_at_before", "datetime-local", "Окончание до", filter.end_at_before.as_deref()))
                ."col-md-9" {
                    label.form-label for="venueFilter" { "Площадки" }
                    select #venueFilter .form-select name="venue" multiple {
                        @for venue in venues {
                            option value=(venue.id) selected[filter.has_venue(venue.id)] { (venue.name) }
                        }
                    }
                }
                ."col-md-3" ."d-grid" .align-items-end {
                    button.btn.btn-primary type="submit" { "Найти" }
                }
            }
        }
    }
}

pub fn render_events(region: &EventsRegion, ui: &UiConfig) -> Markup {
    html! {
        @match region {
            EventsRegion::Loading => {
                ."col-12" .loading-overlay {
                    .spinner-border .text-primary role="status" {}
                }
            }
            EventsRegion::Empty => {
                ."col-12" .text-center .text-muted ."py-5" .empty-state {
                    h4 { (EMPTY_MESSAGE) }
                }
            }
            EventsRegion::Error => {
                .alert .alert-danger ."w-100" { (LOAD_ERROR_MESSAGE) }
            }
            EventsRegion::Invalid(messages) => {
                .alert .alert-warning ."w-100" {
                    "Проверьте фильтры:"
                    ul ."mb-0" {
                        @for message in messages {
                            li { (message) }
                        }
                    }
                }
            }
            EventsRegion::Cards(events) => {
                @let offset = format::display_offset(ui.display_utc_offset_hours);
                @for event in events {
                    (render_card(event, ui, offset))
                }
            }
        }
    }
}

pub fn render_card(event: &EventSummary, ui: &UiConfig, offset: chrono::FixedOffset) -> Markup {
    let image = event
        .preview_image()
        .unwrap_or(ui.list_placeholder_image.as_str());

    html! {
        .col {
            .card ."h-100" .event-card .shadow-sm {
                div style="position: relative;" {
                    img.card-img-top src=(image) alt=(event.title);
                    .badge-rating { "★ " (event.rating.unwrap_or(0)) }
                }
                .card-body ."d-flex" .flex-column {
                    h5.card-title.text-primary { (event.title) }
                    h6.card-subtitle ."mb-2" .text-muted {
                        i.bi.bi-calendar-event {}
                        " " (format::card_date(&event.start_at, offset))
                    }
                    p.card-text ."flex-grow-1" { (format::short_description(event.description())) }
                    ."d-grid" ."mt-3" {
                        a.btn.btn-outline-primary href={ "/events/" (event.id) "/" } { "Подробнее" }
                    }
                }
            }
        }
    }
}

pub fn render_pagination(state: PaginationState, filter: &FilterForm) -> Markup {
    html! {
        ul.pagination.justify-content-center {
            @if state.has_previous {
                li.page-item {
                    a.page-link rel="prev" href=(filter.page_href(state.current.saturating_sub(1).max(1))) { "← Назад" }
                }
            } @else {
                li.page-item.disabled { span.page-link { "← Назад" } }
            }

            li.page-item.active { span.page-link { (state.current) } }

            @if state.has_next {
                li.page-item {
                    a.page-link rel="next" href=(filter.page_href(state.current.saturating_add(1))) { "Вперед →" }
                }
            } @else {
                li.page-item.disabled { span.page-link { "Вперед →" } }
            }
        }
    }
}
