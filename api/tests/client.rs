// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client integration tests with wiremock.

use std::time::Duration;

use staycal_api::{
    ApiConfig, BookingApiClient, ConflictStatus, EventQuery, Platform, ResolutionAction,
    ResolutionRequest, Session,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BookingApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    BookingApiClient::new(config, Session::anonymous()).expect("Failed to create client")
}

#[tokio::test]
#[ignore = "require network"]
async fn client_list_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/prop-1/events"))
        .and(query_param("platforms[]", "airbnb"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{
                "id": "evt-1",
                "property_id": "prop-1",
                "platform": "airbnb",
                "event_type": "booking",
                "status": "confirmed",
                "title": "Guest stay",
                "start_date": "2025-06-01T14:00:00Z",
                "end_date": "2025-06-05T11:00:00Z"
            }]"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = EventQuery::new().platform(Platform::Airbnb);
    let events = client
        .list_events("prop-1", &query)
        .await
        .expect("Failed to list events");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "evt-1");
    assert_eq!(events[0].platform, Platform::Airbnb);
}

#[tokio::test]
#[ignore = "require network"]
async fn client_list_conflicts_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/prop-1/conflicts"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{
                "id": "cfl-1",
                "property_id": "prop-1",
                "event_ids": ["evt-1", "evt-2"],
                "conflict_type": "overlap",
                "severity": "critical",
                "status": "active",
                "created_at": "2025-06-01T00:00:00Z",
                "updated_at": "2025-06-01T00:00:00Z"
            }]"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let conflicts = client
        .list_conflicts("prop-1", Some(ConflictStatus::Active))
        .await
        .expect("Failed to list conflicts");

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].event_ids, vec!["evt-1", "evt-2"]);
}

#[tokio::test]
#[ignore = "require network"]
async fn client_resolve_conflict_posts_decision() {
    let mock_server = MockServer::start().await;

    let request = ResolutionRequest {
        resolution: ResolutionAction::KeepOne,
        event_id: Some("evt-2".to_string()),
        notes: Some("guest rebooked".to_string()),
    };

    Mock::given(method("POST"))
        .and(path("/properties/prop-1/conflicts/cfl-1/resolve"))
        .and(body_json(&request))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"success": true}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let resp = client
        .resolve_conflict("prop-1", "cfl-1", &request)
        .await
        .expect("Failed to resolve conflict");

    assert!(resp.success);
}

#[tokio::test]
#[ignore = "require network"]
async fn client_delete_conflict_preserves_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/properties/prop-1/conflicts/cfl-1"))
        .and(query_param("preserve_history", "true"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .delete_conflict("prop-1", "cfl-1", true)
        .await
        .expect("Failed to delete conflict");
}

#[tokio::test]
#[ignore = "require network"]
async fn client_check_availability() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/prop-1/calendar/availability"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"is_available": false, "conflicting_events": [{
                "id": "evt-1",
                "property_id": "prop-1",
                "platform": "vrbo",
                "event_type": "booking",
                "status": "confirmed",
                "title": "Existing stay",
                "start_date": "2025-06-01T14:00:00Z",
                "end_date": "2025-06-05T11:00:00Z"
            }]}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let availability = client
        .check_availability(
            "prop-1",
            "2025-06-03T00:00:00Z".parse().unwrap(),
            "2025-06-04T00:00:00Z".parse().unwrap(),
        )
        .await
        .expect("Failed to check availability");

    assert!(!availability.is_available);
    let blocking = availability.conflicting_events.unwrap();
    assert_eq!(blocking.len(), 1);
    assert_eq!(blocking[0].platform, Platform::Vrbo);
}

#[tokio::test]
#[ignore = "require network"]
async fn client_bearer_auth_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/prop-1/conflicts"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&mock_server)
        .await;

    let config = ApiConfig {
        base_url: mock_server.uri(),
        ..Default::default()
    };
    let client = BookingApiClient::new(config, Session::bearer("tok-123"))
        .expect("Failed to create client");

    let conflicts = client
        .list_conflicts("prop-1", None)
        .await
        .expect("Failed to list conflicts");
    assert!(conflicts.is_empty());
}

#[tokio::test]
#[ignore = "require network"]
async fn client_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    // expect(1): a 5xx response must surface immediately, not be retried
    Mock::given(method("GET"))
        .and(path("/properties/prop-1/conflicts"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            r#"{"error": "database unavailable"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_conflicts("prop-1", None)
        .await
        .expect_err("Expected server error");

    match err {
        staycal_api::ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
#[ignore = "require network"]
async fn client_transport_failure_is_retried_bounded() {
    let mock_server = MockServer::start().await;

    // Every response outlives the 1 s client deadline, so each attempt
    // times out. expect(3): the initial try plus the two retries.
    Mock::given(method("GET"))
        .and(path("/properties/prop-1/conflicts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("[]", "application/json")
                .set_delay(Duration::from_secs(5)),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = ApiConfig {
        base_url: mock_server.uri(),
        timeout_secs: 1,
        max_retries: 2,
        ..Default::default()
    };
    let client =
        BookingApiClient::new(config, Session::anonymous()).expect("Failed to create client");

    let err = client
        .list_conflicts("prop-1", None)
        .await
        .expect_err("Expected transport error");
    assert!(err.is_transport());
}
