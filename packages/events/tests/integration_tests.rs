// ABOUTME: Integration tests for the organizer event list
// ABOUTME: Tests scoped loading, create/update submission, echo fallback, and deletion

use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coursemgr_client::ApiClient;
use coursemgr_core::test_utils::RecordingPrompter;
use coursemgr_events::OrganizerEventList;

const ORGANIZER: i64 = 3;

fn event_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "startDatetime": "2025-03-01T10:00:00",
        "endDatetime": "2025-03-01T12:00:00",
        "maxParticipants": 20,
        "minAge": 16,
        "info": "Bring a laptop",
        "organizerId": ORGANIZER,
        "organizerName": "Ada Lovelace",
        "classroomId": 12,
        "classroomName": "A-101",
        "tagIds": [1, 2]
    })
}

async fn mount_listing(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/events/organizers/3/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn create_list(server: &MockServer, prompter: Arc<RecordingPrompter>) -> OrganizerEventList {
    OrganizerEventList::new(ApiClient::new(server.uri()).unwrap(), prompter, ORGANIZER)
}

#[tokio::test]
async fn test_show_loads_organizer_events() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([event_json(1, "Rust 101"), event_json(2, "Async Rust"), event_json(3, "Unsafe")]),
    )
    .await;
    let mut list = create_list(&server, Arc::new(RecordingPrompter::new()));

    list.show().await.unwrap();

    assert_eq!(list.displayed().len(), 3);
}

#[tokio::test]
async fn test_load_failure_is_inline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let prompter = Arc::new(RecordingPrompter::new());
    let mut list = create_list(&server, prompter.clone());

    assert!(list.load().await.is_err());
    assert_eq!(list.error(), Some("Failed to fetch the organizer's events."));
    assert!(prompter.alerts().is_empty());
}

#[tokio::test]
async fn test_edit_submits_reassembled_datetimes() {
    let server = MockServer::start().await;
    mount_listing(&server, json!([event_json(5, "Rust 101")])).await;
    Mock::given(method("PUT"))
        .and(path("/api/events/5/update"))
        .and(body_json(json!({
            "name": "Rust 102",
            "startDatetime": "2025-03-01T10:00:00",
            "endDatetime": "2025-03-01T12:00:00",
            "maxParticipants": 20,
            "minAge": 16,
            "info": "Bring a laptop",
            "organizerId": ORGANIZER,
            "classroomId": 12,
            "tagIds": [1, 2]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_json(5, "Rust 102")))
        .expect(1)
        .mount(&server)
        .await;
    let prompter = Arc::new(RecordingPrompter::new());
    let mut list = create_list(&server, prompter.clone());
    list.load().await.unwrap();

    let form = list.start_editing(5).unwrap();
    assert_eq!(form.start_date, "2025-03-01");
    assert_eq!(form.start_time, "10:00");
    form.name = "Rust 102".to_string();
    list.submit().await.unwrap();

    assert_eq!(list.events().get(5).unwrap().name, "Rust 102");
    assert_eq!(list.editing_id(), None);
    assert_eq!(prompter.alerts(), vec!["Event updated!".to_string()]);
}

#[tokio::test]
async fn test_create_without_echo_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events/organizers/3/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([event_json(8, "Macros")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/events/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Event created"))
        .expect(1)
        .mount(&server)
        .await;
    let prompter = Arc::new(RecordingPrompter::new());
    let mut list = create_list(&server, prompter.clone());

    let form = list.start_creating();
    form.name = "Macros".to_string();
    form.start_date = "2025-04-02".to_string();
    form.start_time = "09:30".to_string();
    form.end_date = "2025-04-02".to_string();
    form.end_time = "11:00".to_string();
    form.max_participants = "12".to_string();
    form.min_age = "18".to_string();
    form.classroom = "12".to_string();
    list.submit().await.unwrap();

    assert_eq!(list.events().len(), 1);
    assert!(list.events().contains(8));
    assert_eq!(prompter.alerts(), vec!["Event created!".to_string()]);
}

#[tokio::test]
async fn test_incomplete_form_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let mut list = create_list(&server, Arc::new(RecordingPrompter::new()));

    list.start_creating().name = "Half an event".to_string();

    assert!(list.submit().await.unwrap_err().is_validation());
    assert!(list.error().unwrap().contains("Start date is required"));
    assert_eq!(list.form().name, "Half an event");
}

#[tokio::test]
async fn test_failed_save_keeps_form() {
    let server = MockServer::start().await;
    mount_listing(&server, json!([event_json(5, "Rust 101")])).await;
    Mock::given(method("PUT"))
        .and(path("/api/events/5/update"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Classroom not found"))
        .mount(&server)
        .await;
    let mut list = create_list(&server, Arc::new(RecordingPrompter::new()));
    list.load().await.unwrap();

    list.start_editing(5).unwrap().classroom = "999".to_string();
    assert!(list.submit().await.is_err());

    assert_eq!(list.error(), Some("Failed to save the event."));
    assert_eq!(list.editing_id(), Some(5));
    assert_eq!(list.form().classroom, "999");
}

#[tokio::test]
async fn test_delete_removes_event() {
    let server = MockServer::start().await;
    mount_listing(&server, json!([event_json(1, "Rust 101"), event_json(2, "Async Rust")])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/events/1/delete"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let prompter = Arc::new(RecordingPrompter::new());
    let mut list = create_list(&server, prompter.clone());
    list.load().await.unwrap();

    assert!(list.delete(1).await.unwrap());

    let ids: Vec<_> = list.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(prompter.alerts(), vec!["Event deleted!".to_string()]);
}
