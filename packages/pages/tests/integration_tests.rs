// ABOUTME: Integration tests for the display pages
// ABOUTME: Tests concurrent catalog loading, local filtering, and participation listings

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coursemgr_auth::Session;
use coursemgr_client::ApiClient;
use coursemgr_core::test_utils::sample_user;
use coursemgr_pages::{AvailableEventsPage, EventFilters, HomePage, MyEventsPage};

fn event_json(id: i64, organizer_id: i64, tag_ids: &[i64]) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Course {}", id),
        "startDatetime": "2025-03-01T10:00:00",
        "endDatetime": "2025-03-01T12:00:00",
        "maxParticipants": 10,
        "minAge": 0,
        "info": "Details",
        "organizerId": organizer_id,
        "organizerName": "Someone",
        "classroomId": 1,
        "classroomName": "Lab",
        "tagIds": tag_ids
    })
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            event_json(1, 3, &[1]),
            event_json(2, 4, &[2, 99]),
            event_json(3, 3, &[]),
            event_json(4, 4, &[1, 2]),
            event_json(5, 3, &[2])
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "rust" },
            { "id": 2, "name": "web" }
        ])))
        .mount(server)
        .await;
}

fn session() -> Session {
    Session::new(sample_user(7, "Anna", "Nowak").masked())
}

#[tokio::test]
async fn test_home_shows_first_three_events() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    let mut page = HomePage::new(ApiClient::new(server.uri()).unwrap());

    page.load().await.unwrap();

    let ids: Vec<_> = page.cards().iter().map(|c| c.event_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(page.cards()[1].tags, vec!["web".to_string()]);
    assert!(page.error().is_none());
}

#[tokio::test]
async fn test_home_fails_when_tags_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([event_json(1, 3, &[])])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let mut page = HomePage::new(ApiClient::new(server.uri()).unwrap());

    assert!(page.load().await.is_err());
    assert!(page.cards().is_empty());
    assert_eq!(
        page.error(),
        Some("Failed to load events or tags. Please try again later.")
    );
}

#[tokio::test]
async fn test_available_events_filter_locally() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    let mut page = AvailableEventsPage::new(ApiClient::new(server.uri()).unwrap());

    page.load().await.unwrap();
    assert_eq!(page.cards().len(), 5);

    page.set_filters(EventFilters {
        organizer_id: Some(4),
        tag_id: Some(1),
        ..EventFilters::default()
    });
    let ids: Vec<_> = page.cards().iter().map(|c| c.event_id).collect();
    assert_eq!(ids, vec![4]);
}

#[tokio::test]
async fn test_available_events_search_upcoming_with_free_places() {
    let server = MockServer::start().await;
    let mut past = event_json(1, 3, &[]);
    past["startDatetime"] = json!("2024-12-01T10:00:00");
    let mut full = event_json(2, 3, &[]);
    full["startDatetime"] = json!("2025-05-01T10:00:00");
    full["participantCount"] = json!(10);
    let mut open = event_json(3, 3, &[]);
    open["startDatetime"] = json!("2025-05-02T10:00:00");
    open["participantCount"] = json!(4);
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([past, full, open])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let now = "2025-01-15T08:00:00".parse().unwrap();
    let mut page = AvailableEventsPage::new(ApiClient::new(server.uri()).unwrap())
        .with_filters(EventFilters::upcoming(now));
    page.load().await.unwrap();

    let ids: Vec<_> = page.cards().iter().map(|c| c.event_id).collect();
    assert_eq!(ids, vec![2, 3]);

    page.set_filters(EventFilters {
        exclude_full: true,
        ..EventFilters::upcoming(now)
    });
    let ids: Vec<_> = page.cards().iter().map(|c| c.event_id).collect();
    assert_eq!(ids, vec![3]);
}

#[tokio::test]
async fn test_available_events_greeting() {
    let session = session();
    assert_eq!(
        AvailableEventsPage::greeting(Some(&session)),
        Some("Welcome Anna Nowak!".to_string())
    );
}

#[tokio::test]
async fn test_my_events_lists_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants/7/past"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 11 }, { "id": 12 }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/participants/7/future"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 20 }])))
        .expect(1)
        .mount(&server)
        .await;
    let mut page = MyEventsPage::new(ApiClient::new(server.uri()).unwrap());

    page.load(&session()).await.unwrap();

    assert_eq!(page.past_ids(), &[11, 12]);
    assert_eq!(page.future_ids(), &[20]);
    assert!(page.error().is_none());
}

#[tokio::test]
async fn test_my_events_single_error_for_both_sections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants/7/past"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 11 }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/participants/7/future"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let mut page = MyEventsPage::new(ApiClient::new(server.uri()).unwrap());

    assert!(page.load(&session()).await.is_err());

    assert_eq!(page.error(), Some("Failed to load event data."));
    assert!(page.past_ids().is_empty());
    assert!(page.future_ids().is_empty());
}
