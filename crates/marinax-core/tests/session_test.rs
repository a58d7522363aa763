#![allow(clippy::unwrap_used)]
// Integration tests for the session lifecycle against a wiremock transport.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use marinax_api::{ApiClient, TransportConfig};
use marinax_core::{CoreError, PrincipalKind, ProfilePatch, Role, Session};

async fn setup(kind: PrincipalKind) -> (MockServer, Session) {
    let server = MockServer::start().await;
    let api = Arc::new(ApiClient::new(&server.uri(), &TransportConfig::default()).unwrap());
    (server, Session::new(api, kind))
}

#[tokio::test]
async fn login_installs_the_principal() {
    let (server, session) = setup(PrincipalKind::Staff).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-1",
                "user": { "id": "a1", "email": "ops@marine-axis.io", "role": "superadmin" }
            }
        })))
        .mount(&server)
        .await;

    assert!(!session.is_authenticated());

    let principal = session
        .login("ops@marine-axis.io", "anchor2024".to_string().into())
        .await
        .unwrap();

    assert_eq!(principal.role, Role::Superadmin);
    assert!(session.is_authenticated());
    assert!(session.has_role(Role::Superadmin));
    assert!(!session.has_role(Role::Admin));
    assert!(session.api().has_token());
}

#[tokio::test]
async fn login_accepts_the_legacy_role_spelling() {
    let (server, session) = setup(PrincipalKind::Staff).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-1",
                "user": { "id": "a1", "email": "ops@marine-axis.io", "role": "super_admin" }
            }
        })))
        .mount(&server)
        .await;

    let principal = session
        .login("ops@marine-axis.io", "anchor2024".to_string().into())
        .await
        .unwrap();

    assert_eq!(principal.role, Role::Superadmin);
}

#[tokio::test]
async fn unknown_role_is_an_internal_error() {
    let (server, session) = setup(PrincipalKind::Staff).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-1",
                "user": { "id": "a1", "email": "ops@marine-axis.io", "role": "harbormaster" }
            }
        })))
        .mount(&server)
        .await;

    let result = session
        .login("ops@marine-axis.io", "anchor2024".to_string().into())
        .await;

    assert!(matches!(result, Err(CoreError::Internal(_))));
}

#[tokio::test]
async fn restore_with_a_rejected_token_starts_signed_out() {
    let (server, session) = setup(PrincipalKind::Staff).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/admin/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = session.restore("stale-token".to_string().into()).await;

    assert!(matches!(result, Err(CoreError::SessionExpired)));
    assert!(!session.is_authenticated());
    assert!(!session.api().has_token());
}

#[tokio::test]
async fn provider_session_uses_the_provider_surface() {
    let (server, session) = setup(PrincipalKind::Provider).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/provider/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "p1", "email": "dock@harbor.example", "role": "provider" }
        })))
        .mount(&server)
        .await;

    let principal = session.restore("tok-9".to_string().into()).await.unwrap();
    assert_eq!(principal.kind, PrincipalKind::Provider);
    assert_eq!(principal.role, Role::Provider);
}

#[tokio::test]
async fn logout_tears_down_locally_even_when_the_server_fails() {
    let (server, session) = setup(PrincipalKind::Staff).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/admin/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "a1", "email": "ops@marine-axis.io", "role": "admin" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    session.restore("tok-1".to_string().into()).await.unwrap();
    assert!(session.is_authenticated());

    let _ = session.logout().await;

    assert!(!session.is_authenticated());
    assert!(!session.api().has_token());
}

#[tokio::test]
async fn update_profile_refreshes_the_local_principal() {
    let (server, session) = setup(PrincipalKind::Staff).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/admin/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "a1", "email": "ops@marine-axis.io", "role": "admin" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/admin/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "a1",
                "email": "ops@marine-axis.io",
                "role": "admin",
                "name": "Ops Team"
            }
        })))
        .mount(&server)
        .await;

    session.restore("tok-1".to_string().into()).await.unwrap();

    let patch = ProfilePatch {
        name: Some("Ops Team".into()),
        ..ProfilePatch::default()
    };
    let principal = session.update_profile(&patch).await.unwrap();

    assert_eq!(principal.name.as_deref(), Some("Ops Team"));
    assert_eq!(
        session.principal().unwrap().name.as_deref(),
        Some("Ops Team")
    );
}
