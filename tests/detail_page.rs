mod common;

use common::*;
use event_frontend::{
    config::UiConfig,
    controllers::detail::{DetailPhase, DetailSession, SecondaryUpdate},
    views::detail::{FAILED_MESSAGE, NOT_FOUND_MESSAGE},
};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn session(server: &MockServer, id: i64) -> DetailSession {
    DetailSession::new(api(server), UiConfig::default(), id)
}

async fn expect_no_request(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn not_found_halts_without_secondary_fetches() {
    let server = MockServer::start().await;
    mount_status(&server, "/api/events/7/", 404).await;
    expect_no_request(&server, "/api/events/7/weather/").await;
    expect_no_request(&server, "/api/events/7/images/").await;

    let mut session = session(&server, 7);
    assert_eq!(session.run().await, DetailPhase::NotFound);

    let html = session.render_page();
    assert!(html.contains(NOT_FOUND_MESSAGE));
    assert_eq!(count(&html, "#main-layout"), 0);
}

#[tokio::test]
async fn server_error_shows_generic_failure() {
    let server = MockServer::start().await;
    mount_status(&server, "/api/events/7/", 500).await;
    expect_no_request(&server, "/api/events/7/weather/").await;
    expect_no_request(&server, "/api/events/7/images/").await;

    let mut session = session(&server, 7);
    assert_eq!(session.run().await, DetailPhase::Failed);
    assert!(session.render_page().contains(FAILED_MESSAGE));
}

#[tokio::test]
async fn malformed_primary_payload_is_a_failure() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/events/7/", 200, json!({"unexpected": true})).await;

    let mut session = session(&server, 7);
    assert_eq!(session.load_primary().await, DetailPhase::Failed);
}

#[tokio::test]
async fn primary_info_survives_failed_secondaries() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/events/7/", 200, event_json(7, "Jazz night")).await;
    mount_status(&server, "/api/events/7/weather/", 500).await;
    mount_status(&server, "/api/events/7/images/", 503).await;

    let mut session = session(&server, 7);
    assert_eq!(session.run().await, DetailPhase::ContentShown);

    assert!(session.weather().is_none());
    assert_eq!(session.gallery().len(), 1);
    assert_eq!(session.gallery().slides()[0].url, PREVIEW_URL);

    let html = session.render_page();
    assert_eq!(text_of(&html, "#event-title").as_deref(), Some("Jazz night"));
    assert_eq!(count(&html, "#weather-block.d-none"), 1);
    assert_eq!(count(&html, "#carousel-inner .carousel-item"), 1);
    assert_eq!(count(&html, "#btn-prev.d-none"), 1);
    assert!(html.contains("<title>Jazz night - EventManager</title>"));
}

#[tokio::test]
async fn real_images_replace_preview() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/events/7/", 200, event_json(7, "Jazz night")).await;
    mount_json(&server, "/api/events/7/weather/", 200, weather_json()).await;
    mount_json(
        &server,
        "/api/events/7/images/",
        200,
        paginated(image_objects(3), None, None),
    )
    .await;

    let mut session = session(&server, 7);
    session.run().await;

    let gallery = session.gallery();
    assert_eq!(gallery.len(), 3);
    assert!(gallery.controls_visible());
    assert!(gallery.slides().iter().all(|s| s.url != PREVIEW_URL));
    assert!(gallery.slides()[0].active);
    assert_eq!(gallery.slides().iter().filter(|s| s.active).count(), 1);

    let html = session.render_page();
    assert_eq!(count(&html, "#carousel-inner .carousel-item"), 3);
    assert_eq!(count(&html, "#carousel-indicators button"), 3);
    assert_eq!(count(&html, "#btn-prev.d-none"), 0);
    assert_eq!(count(&html, "#btn-next.d-none"), 0);
}

#[tokio::test]
async fn single_image_keeps_navigation_hidden() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/events/7/", 200, event_json(7, "Jazz night")).await;
    mount_status(&server, "/api/events/7/weather/", 404).await;
    mount_json(
        &server,
        "/api/events/7/images/",
        200,
        json!({"preview_image_url": PREVIEW_URL, "images": ["http://cdn.test/only.jpg"]}),
    )
    .await;

    let mut session = session(&server, 7);
    session.run().await;

    assert_eq!(session.gallery().len(), 1);
    assert_eq!(session.gallery().slides()[0].url, "http://cdn.test/only.jpg");
    assert!(!session.gallery().controls_visible());
}

#[tokio::test]
async fn empty_images_keep_preview_slide() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/events/7/", 200, event_json(7, "Jazz night")).await;
    mount_status(&server, "/api/events/7/weather/", 404).await;
    mount_json(&server, "/api/events/7/images/", 200, paginated(vec![], None, None)).await;

    let mut session = session(&server, 7);
    session.run().await;

    assert_eq!(session.gallery().len(), 1);
    assert_eq!(session.gallery().slides()[0].url, PREVIEW_URL);
}

#[tokio::test]
async fn missing_preview_seeds_placeholder() {
    let server = MockServer::start().await;
    let mut event = event_json(7, "Jazz night");
    event["preview_image"] = json!(null);
    mount_json(&server, "/api/events/7/", 200, event).await;
    mount_status(&server, "/api/events/7/weather/", 404).await;
    mount_status(&server, "/api/events/7/images/", 404).await;

    let mut session = session(&server, 7);
    session.run().await;

    assert_eq!(
        session.gallery().slides()[0].url,
        UiConfig::default().detail_placeholder_image
    );
}

#[tokio::test]
async fn weather_renders_independently_of_images() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/events/7/", 200, event_json(7, "Jazz night")).await;
    mount_json(&server, "/api/events/7/weather/", 200, weather_json()).await;
    mount_json(&server, "/api/events/7/images/", 200, json!({"photos": []})).await;

    let mut session = session(&server, 7);
    assert_eq!(session.load_primary().await, DetailPhase::ContentShown);

    let mut updates = Vec::new();
    session
        .load_secondary(|_, update| updates.push(update))
        .await;

    assert_eq!(updates, [SecondaryUpdate::WeatherLoaded]);
    assert_eq!(session.gallery().len(), 1);

    let html = session.render_page();
    assert_eq!(text_of(&html, "#weather-temp").as_deref(), Some("+12.5"));
    assert_eq!(text_of(&html, "#weather-humidity").as_deref(), Some("40"));
    assert_eq!(text_of(&html, "#weather-pressure").as_deref(), Some("750"));
    assert_eq!(count(&html, "#weather-block.d-none"), 0);
}

#[tokio::test]
async fn both_updates_arrive_in_any_order() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/events/7/", 200, event_json(7, "Jazz night")).await;
    mount_json(&server, "/api/events/7/weather/", 200, weather_json()).await;
    mount_json(
        &server,
        "/api/events/7/images/",
        200,
        paginated(image_objects(2), None, None),
    )
    .await;

    let mut session = session(&server, 7);
    session.load_primary().await;

    let mut fragments = Vec::new();
    session
        .load_secondary(|session, update| fragments.push((update, session.render_fragment(update))))
        .await;

    assert_eq!(fragments.len(), 2);
    let weather = fragments
        .iter()
        .find(|(u, _)| *u == SecondaryUpdate::WeatherLoaded)
        .expect("weather fragment");
    assert!(weather.1.contains(r#"data-fragment-for="weather-block""#));

    let images = fragments
        .iter()
        .find(|(u, _)| *u == SecondaryUpdate::ImagesLoaded)
        .expect("images fragment");
    assert!(images.1.contains(r#"data-fragment-for="mainCarousel""#));
    assert_eq!(images.1.matches("carousel-item").count(), 2);
}

#[tokio::test]
async fn main_info_renders_venue_and_description() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/events/7/", 200, event_json(7, "<Jazz> night")).await;
    mount_status(&server, "/api/events/7/weather/", 404).await;
    mount_status(&server, "/api/events/7/images/", 404).await;

    let mut session = session(&server, 7);
    session.run().await;
    let html = session.render_page();

    assert!(html.contains("&lt;Jazz&gt; night"));
    assert!(html.contains("Первая строка<br>Вторая строка"));
    assert_eq!(text_of(&html, "#venue-name").as_deref(), Some("Arena"));
    assert_eq!(text_of(&html, "#event-rating").as_deref(), Some("18"));
    assert_eq!(text_of(&html, "#event-start").as_deref(), Some("5 марта 2026 г., 16:30"));
    assert!(html.contains("https://yandex.ru/maps/?pt=92,55&amp;z=15&amp;l=map"));
}
