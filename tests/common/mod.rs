#![allow(dead_code)]

use event_frontend::{api_client::ApiClient, config::Config, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const PREVIEW_URL: &str = "http://cdn.test/previews/7.jpg";

pub fn config(server: &MockServer) -> Config {
    Config::for_api(server.uri())
}

pub fn api(server: &MockServer) -> ApiClient {
    ApiClient::from_config(&config(server).api).expect("client")
}

pub fn state(server: &MockServer) -> Arc<AppState> {
    AppState::new(config(server)).expect("state")
}

pub fn event_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Первая строка\nВторая строка",
        "publish_at": null,
        "start_at": "2026-03-05T16:30:00Z",
        "end_at": "2026-03-05T19:00:00Z",
        "venue": {
            "id": 1,
            "name": "Arena",
            "location": {"latitude": 55.0, "longitude": 92.0}
        },
        "rating": 18,
        "preview_image": PREVIEW_URL
    })
}

pub fn weather_json() -> Value {
    json!({
        "id": 3,
        "venue": 1,
        "venue_name": "Arena",
        "temperature_celsius": 12.5,
        "humidity_percent": 40,
        "pressure_mmhg": 750,
        "wind_direction": "NE",
        "wind_speed_ms": 3.5,
        "created_at": "2026-03-01T09:00:00Z"
    })
}

pub fn paginated(results: Vec<Value>, next: Option<&str>, previous: Option<&str>) -> Value {
    json!({
        "count": results.len(),
        "next": next,
        "previous": previous,
        "results": results
    })
}

pub fn image_objects(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "id": i,
                "image": format!("http://cdn.test/images/{}.jpg", i),
                "created_at": "2026-03-01T09:00:00Z"
            })
        })
        .collect()
}

pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn count(html: &str, css: &str) -> usize {
    let document = scraper::Html::parse_document(html);
    let selector = scraper::Selector::parse(css).expect("selector");
    document.select(&selector).count()
}

pub fn text_of(html: &str, css: &str) -> Option<String> {
    let document = scraper::Html::parse_document(html);
    let selector = scraper::Selector::parse(css).expect("selector");
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
