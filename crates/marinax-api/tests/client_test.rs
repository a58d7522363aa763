#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use marinax_api::{ApiClient, Credentials, Error, PrincipalKind, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, PartialEq)]
struct TestJob {
    id: String,
    title: String,
}

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials::new(email, password.to_string().into())
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_staff_login_success_installs_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .and(body_json(json!({
            "email": "ops@marine-axis.io",
            "password": "hunter22",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-123",
                "user": { "id": "a1", "email": "ops@marine-axis.io", "role": "admin" }
            }
        })))
        .mount(&server)
        .await;

    assert!(!client.has_token());
    let data = client
        .login(PrincipalKind::Staff, &credentials("ops@marine-axis.io", "hunter22"))
        .await
        .unwrap();

    assert_eq!(data.principal.email, "ops@marine-axis.io");
    assert_eq!(data.principal.role, "admin");
    assert!(client.has_token());
}

#[tokio::test]
async fn test_provider_login_uses_provider_surface() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/provider/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-456",
                "provider": { "id": "p1", "email": "dock@harbor.example", "role": "provider" }
            }
        })))
        .mount(&server)
        .await;

    let data = client
        .login(
            PrincipalKind::Provider,
            &credentials("dock@harbor.example", "anchors4life"),
        )
        .await
        .unwrap();

    assert_eq!(data.principal.id, "p1");
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let result = client
        .login(PrincipalKind::Staff, &credentials("ops@marine-axis.io", "nope"))
        .await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(
                message.contains("Invalid email"),
                "expected server message, got: {message}"
            );
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
    assert!(!client.has_token());
}

#[tokio::test]
async fn test_login_business_rejection_maps_to_authentication() {
    let (server, client) = setup().await;

    // Some deployments answer HTTP 200 + success:false for bad logins.
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Account suspended"
        })))
        .mount(&server)
        .await;

    let result = client
        .login(PrincipalKind::Staff, &credentials("ops@marine-axis.io", "pw"))
        .await;

    assert!(matches!(result, Err(Error::Authentication { .. })));
}

#[tokio::test]
async fn test_logout_clears_token_even_on_server_failure() {
    let (server, client) = setup().await;
    client.set_token("tok-789".to_string().into());

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let _ = client.logout(PrincipalKind::Staff).await;
    assert!(!client.has_token());
}

#[tokio::test]
async fn test_me_returns_principal() {
    let (server, client) = setup().await;
    client.set_token("tok-789".to_string().into());

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/admin/me"))
        .and(header("Authorization", "Bearer tok-789"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "a1", "email": "ops@marine-axis.io", "role": "superadmin" }
        })))
        .mount(&server)
        .await;

    let me = client.me(PrincipalKind::Staff).await.unwrap();
    assert_eq!(me.role, "superadmin");
}

// ── Collection tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_with_pagination_and_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "10"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "id": "j1", "title": "Hull cleaning" },
                { "id": "j2", "title": "Engine overhaul" }
            ],
            "total": 12
        })))
        .mount(&server)
        .await;

    let page = client
        .list::<TestJob>(
            "jobs",
            2,
            10,
            &[("status".to_string(), "pending".to_string())],
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 12);
    assert_eq!(page.items[0].title, "Hull cleaning");
}

#[tokio::test]
async fn test_list_missing_total_falls_back_to_len() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/vessels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": "v1", "title": "MV Petrel" }]
        })))
        .mount(&server)
        .await;

    let page = client.list::<TestJob>("vessels", 1, 25, &[]).await.unwrap();
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn test_get_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "j1", "title": "Hull cleaning" }
        })))
        .mount(&server)
        .await;

    let job = client.get_by_id::<TestJob>("jobs", "j1").await.unwrap();
    assert_eq!(job.id, "j1");
}

#[tokio::test]
async fn test_create_echoes_record() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/jobs"))
        .and(body_json(json!({ "title": "Prop inspection" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": { "id": "j9", "title": "Prop inspection" },
            "message": "Job created"
        })))
        .mount(&server)
        .await;

    let created = client
        .create::<TestJob, _>("jobs", &json!({ "title": "Prop inspection" }))
        .await
        .unwrap();

    assert_eq!(created.unwrap().id, "j9");
}

#[tokio::test]
async fn test_update_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "j1", "title": "Hull cleaning (urgent)" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/jobs/j2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Job deleted"
        })))
        .mount(&server)
        .await;

    let updated = client
        .update::<TestJob, _>("jobs", "j1", &json!({ "title": "Hull cleaning (urgent)" }))
        .await
        .unwrap();
    assert_eq!(updated.unwrap().title, "Hull cleaning (urgent)");

    client.delete("jobs", "j2").await.unwrap();
}

// ── Approval workflow tests ─────────────────────────────────────────

#[tokio::test]
async fn test_approve_and_reject() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/providers/p1/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "p1", "title": "Harbor Divers Ltd" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/providers/p2/reject"))
        .and(body_json(json!({ "reason": "incomplete documents" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "p2", "title": "Rustbucket Repairs" }
        })))
        .mount(&server)
        .await;

    let approved = client.approve::<TestJob>("providers", "p1").await.unwrap();
    assert_eq!(approved.unwrap().id, "p1");

    let rejected = client
        .reject::<TestJob>("providers", "p2", "incomplete documents")
        .await
        .unwrap();
    assert_eq!(rejected.unwrap().id, "p2");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_session_expired_on_401() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list::<TestJob>("jobs", 1, 25, &[]).await;
    assert!(matches!(result, Err(Error::SessionExpired)));
}

#[tokio::test]
async fn test_forbidden_on_403() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admins"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "success": false,
            "message": "Superadmin access required"
        })))
        .mount(&server)
        .await;

    match client.list::<TestJob>("admins", 1, 25, &[]).await {
        Err(Error::Forbidden { ref message }) => {
            assert!(message.contains("Superadmin"), "got: {message}");
        }
        other => panic!("expected Forbidden, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_on_500() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "database unavailable"
        })))
        .mount(&server)
        .await;

    match client.list::<TestJob>("jobs", 1, 25, &[]).await {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("database"), "got: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_on_success_false() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "job has active bookings"
        })))
        .mount(&server)
        .await;

    match client.delete("jobs", "j1").await {
        Err(Error::Rejected { ref message }) => {
            assert!(message.contains("active bookings"), "got: {message}");
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
        .mount(&server)
        .await;

    let result = client.list::<TestJob>("jobs", 1, 25, &[]).await;
    assert!(matches!(result, Err(Error::Deserialization { .. })));
}

#[tokio::test]
async fn test_timeout_is_distinguishable() {
    let server = MockServer::start().await;
    let transport = TransportConfig::default().with_timeout(Duration::from_millis(200));
    let client = ApiClient::new(&server.uri(), &transport).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(json!({ "success": true, "data": [] })),
        )
        .mount(&server)
        .await;

    let result = client.list::<TestJob>("jobs", 1, 25, &[]).await;
    assert!(
        matches!(result, Err(Error::Timeout { .. })),
        "expected Timeout, got: {result:?}"
    );
}
