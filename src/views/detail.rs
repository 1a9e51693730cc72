use maud::{html, Markup};

use super::{format, gallery::Gallery, html::multiline};
use crate::config::UiConfig;
use crate::models::{EventDetail, WeatherSnapshot};

pub const NOT_FOUND_MESSAGE: &str = "Событие не найдено или скрыто.";
pub const FAILED_MESSAGE: &str = "Не удалось загрузить событие.";

pub const WEATHER_BLOCK_ID: &str = "weather-block";

pub fn document_title(event_title: &str, ui: &UiConfig) -> String {
    format!("{} - {}", event_title, ui.site_name)
}

pub fn render_loading() -> Markup {
    html! {
        #event-detail-content .text-center ."mt-5" {
            .spinner-border .text-primary role="status" {}
        }
    }
}

/// Блокирующее сообщение вместо страницы: 404 или ошибка API.
pub fn render_not_found() -> Markup {
    html! {
        #event-detail-content {
            .alert .alert-warning .text-center ."mt-5" { (NOT_FOUND_MESSAGE) }
        }
    }
}

pub fn render_failed() -> Markup {
    html! {
        #event-detail-content {
            .alert .alert-danger .text-center ."mt-5" { (FAILED_MESSAGE) }
        }
    }
}

/// Основной макет страницы: лоадер спрятан, `#main-layout` показан.
pub fn render_main_layout(
    event: &EventDetail,
    gallery: &Gallery,
    weather: Option<&WeatherSnapshot>,
    ui: &UiConfig,
) -> Markup {
    let offset = format::display_offset(ui.display_utc_offset_hours);
    let summary = &event.summary;
    let venue = event.venue.as_ref();
    let map_url = venue.and_then(|v| v.location).map(|location| location.map_url());

    html! {
        #event-detail-content .d-none {}
        #main-layout .row ."g-4" {
            ."col-lg-8" {
                #gallery ."mb-4" {
                    #gallery-loader .d-none {}
                    (gallery.render())
                }
                h1 #event-title { (summary.title) }
                #event-description .lead {
                    @if let Some(description) = summary.description() {
                        (multiline(description))
                    }
                }
            }
            ."col-lg-4" {
                .card .shadow-sm ."mb-4" {
                    .card-body {
                        p { i.bi.bi-play-circle {} " Начало: " span #event-start { (format::detail_date(&summary.start_at, offset)) } }
                        p { i.bi.bi-stop-circle {} " Окончание: " span #event-end { (format::detail_date(&summary.end_at, offset)) } }
                        p { i.bi.bi-star {} " Рейтинг: " span #event-rating { (summary.rating.unwrap_or(0)) } }
                        p {
                            i.bi.bi-geo-alt {}
                            " "
                            span #venue-name { @if let Some(venue) = venue { (venue.name) } }
                            @if let Some(url) = map_url {
                                " "
                                a #venue-coords href=(url) target="_blank" rel="noopener" { "Показать на карте" }
                            }
                        }
                    }
                }
                (render_weather_block(weather, ui))
            }
        }
    }
}

/// `#weather-block`; спрятан, пока погода не загружена.
pub fn render_weather_block(weather: Option<&WeatherSnapshot>, ui: &UiConfig) -> Markup {
    let Some(weather) = weather else {
        return html! {
            div.card.shadow-sm.d-none id=(WEATHER_BLOCK_ID) {}
        };
    };

    let offset = format::display_offset(ui.display_utc_offset_hours);

    html! {
        div.card.shadow-sm id=(WEATHER_BLOCK_ID) {
            .card-body {
                h5.card-title { i.bi.bi-cloud-sun {} " Погода" }
                p."display-6" { span #weather-temp { (weather.signed_temperature()) } " °C" }
                p { "Влажность: " span #weather-humidity { (weather.humidity_percent) } "%" }
                p {
                    "Ветер: " span #weather-wind { (weather.wind_speed_ms) } " м/с"
                    @if let Some(direction) = &weather.wind_direction {
                        " (" (direction) ")"
                    }
                }
                p { "Давление: " span #weather-pressure { (weather.pressure_mmhg) } " мм рт. ст." }
                small #weather-note .text-muted {
                    "* Прогноз на момент начала события (актуализирован: "
                    (format::timestamp(&weather.created_at, offset))
                    ")"
                }
            }
        }
    }
}
