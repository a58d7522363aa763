#![allow(clippy::unwrap_used)]
// Integration tests for `ResourceStore` against a wiremock transport.
//
// The store's contract is identical whether backed by the real API or a
// fixture server, so everything here runs against mocks.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use marinax_api::{ApiClient, TransportConfig};
use marinax_core::store::{FilterSet, FilterValue, Operation, ResourceStore};
use marinax_core::{AdminDirectory, CoreError, Job, JobPatch, Notifier, Provider, Session, Severity};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Arc<ApiClient>, Notifier) {
    let server = MockServer::start().await;
    let api = Arc::new(ApiClient::new(&server.uri(), &TransportConfig::default()).unwrap());
    (server, api, Notifier::new())
}

fn job(id: &str, title: &str) -> serde_json::Value {
    json!({ "id": id, "title": title, "category": "maintenance", "status": "pending" })
}

fn jobs_page(items: Vec<serde_json::Value>, total: u64) -> serde_json::Value {
    json!({ "success": true, "data": items, "total": total })
}

fn filters(pairs: &[(&str, &str)]) -> FilterSet {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), FilterValue::from(*v)))
        .collect()
}

// ── Fetch ───────────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_replaces_items_and_total() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_page(
            vec![job("j1", "Hull cleaning"), job("j2", "Engine overhaul")],
            7,
        )))
        .mount(&server)
        .await;

    store.refresh().await.unwrap();

    let state = store.state();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.total, 7);
    assert_eq!(state.items[0].title, "Hull cleaning");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_items() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier.clone());
    let mut notices = notifier.subscribe();

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_page(
            vec![job("j1", "Hull cleaning"), job("j2", "Engine overhaul")],
            2,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "database unavailable"
        })))
        .mount(&server)
        .await;

    store.refresh().await.unwrap();
    assert_eq!(store.state().items.len(), 2);

    // Stale data over a blank screen: the failed fetch must not clear rows.
    let result = store.refresh().await;
    assert!(result.is_err());

    let state = store.state();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, "j1");
    assert_eq!(state.items[1].id, "j2");

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert!(notice.body.contains("database unavailable"), "{}", notice.body);
}

#[tokio::test]
async fn set_filters_is_idempotent_and_fetches_once_per_call() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .and(query_param("status", "pending"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_page(
            vec![job("j1", "Hull cleaning")],
            1,
        )))
        .expect(2)
        .mount(&server)
        .await;

    store
        .set_filters(filters(&[("status", "pending")]))
        .await
        .unwrap();
    let first = store.state();

    store
        .set_filters(filters(&[("status", "pending")]))
        .await
        .unwrap();
    let second = store.state();

    assert_eq!(first.items.len(), second.items.len());
    assert_eq!(first.total, second.total);

    // .expect(2) on the mock verifies exactly one request per call.
    server.verify().await;
}

#[tokio::test]
async fn unknown_filter_key_is_rejected_before_any_request() {
    let (_server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    // No mock mounted: if a request were made anyway it would surface as
    // a server error, not the validation error asserted below.
    let result = store.set_filters(filters(&[("color", "blue")])).await;

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field, "color"),
        other => panic!("expected Validation error, got: {other:?}"),
    }
    assert!(!store.is_busy(Operation::Fetch));
}

#[tokio::test]
async fn set_filters_resets_to_first_page() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(jobs_page(vec![job("j1", "x")], 50)),
        )
        .mount(&server)
        .await;

    store.set_page(3).await.unwrap();
    assert_eq!(store.state().page, 3);

    store
        .set_filters(filters(&[("search", "hull")]))
        .await
        .unwrap();
    assert_eq!(store.state().page, 1);
}

// ── Flag cleanup invariant ──────────────────────────────────────────

#[tokio::test]
async fn flags_clear_after_success_and_failure() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_page(vec![], 0)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Success branch.
    store.refresh().await.unwrap();
    assert!(!store.is_busy(Operation::Fetch));

    // Failure branches: the flag must be back down after every settle.
    let draft = marinax_core::JobDraft {
        title: "Prop inspection".into(),
        category: "maintenance".into(),
        description: None,
        budget: None,
        location: None,
    };
    assert!(store.create(&draft).await.is_err());
    assert!(!store.is_busy(Operation::Create));

    assert!(store.update("j1", &JobPatch::default()).await.is_err());
    assert!(!store.is_busy(Operation::Update));

    assert!(store.delete("j1").await.is_err());
    assert!(!store.is_busy(Operation::Delete));
}

#[tokio::test]
async fn loading_flag_is_up_while_the_request_is_in_flight() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_millis(100))
                .set_body_json(jobs_page(vec![], 0)),
        )
        .mount(&server)
        .await;

    let mut flag = store.subscribe_flag(Operation::Fetch);
    let (result, observed) = tokio::join!(store.refresh(), async {
        flag.wait_for(|up| *up).await.is_ok()
    });

    result.unwrap();
    assert!(observed, "flag never observed in-flight");
    assert!(!store.is_busy(Operation::Fetch));
}

// ── Mutations ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_refetches_and_total_grows_by_one() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier.clone());
    let mut notices = notifier.subscribe();

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_page(
            vec![job("j1", "Hull cleaning"), job("j2", "Engine overhaul")],
            2,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    store.refresh().await.unwrap();
    let before = store.state().total;

    Mock::given(method("POST"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": job("j3", "Prop inspection")
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_page(
            vec![
                job("j1", "Hull cleaning"),
                job("j2", "Engine overhaul"),
                job("j3", "Prop inspection"),
            ],
            3,
        )))
        .mount(&server)
        .await;

    let draft = marinax_core::JobDraft {
        title: "Prop inspection".into(),
        category: "maintenance".into(),
        description: None,
        budget: None,
        location: None,
    };
    store.create(&draft).await.unwrap();

    assert_eq!(store.state().total, before + 1);

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.title, "Job created");
}

#[tokio::test]
async fn update_replaces_the_row_in_place() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_page(
            vec![job("j1", "A"), job("j2", "B"), job("j3", "C")],
            3,
        )))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/jobs/j2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": job("j2", "B (urgent)")
        })))
        .mount(&server)
        .await;

    store.refresh().await.unwrap();

    let patch = JobPatch {
        title: Some("B (urgent)".into()),
        ..JobPatch::default()
    };
    store.update("j2", &patch).await.unwrap();

    let state = store.state();
    assert_eq!(state.items.len(), 3);
    // Position preserved, neighbors untouched.
    assert_eq!(state.items[0].title, "A");
    assert_eq!(state.items[1].title, "B (urgent)");
    assert_eq!(state.items[2].title, "C");
}

#[tokio::test]
async fn delete_removes_the_row_and_decrements_total() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_page(
            vec![job("j1", "A"), job("j2", "B")],
            2,
        )))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true })),
        )
        .mount(&server)
        .await;

    store.refresh().await.unwrap();
    store.delete("j1").await.unwrap();

    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "j2");
    assert_eq!(state.total, 1);
}

#[tokio::test]
async fn failed_delete_leaves_state_unchanged() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier.clone());
    let mut notices = notifier.subscribe();

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(jobs_page(vec![job("j1", "A")], 1)),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "job has active bookings"
        })))
        .mount(&server)
        .await;

    store.refresh().await.unwrap();
    assert!(store.delete("j1").await.is_err());

    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.total, 1);

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.severity, Severity::Error);
}

// ── Approval workflow ───────────────────────────────────────────────

#[tokio::test]
async fn approve_swaps_in_the_servers_copy() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Provider> = ResourceStore::new(api, notifier);

    let pending = json!({
        "id": "p1", "name": "Harbor Divers Ltd", "email": "ops@harbordivers.example",
        "status": "pending"
    });
    let approved = json!({
        "id": "p1", "name": "Harbor Divers Ltd", "email": "ops@harbordivers.example",
        "status": "approved"
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "data": [pending], "total": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/providers/p1/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "data": approved
        })))
        .mount(&server)
        .await;

    store.refresh().await.unwrap();
    store.approve("p1").await.unwrap();

    assert_eq!(
        store.state().items[0].status,
        marinax_core::ApprovalStatus::Approved
    );
}

// ── Detach ──────────────────────────────────────────────────────────

#[tokio::test]
async fn detached_store_applies_no_late_response() {
    let (server, api, notifier) = setup().await;
    let store: ResourceStore<Job> = ResourceStore::new(api, notifier);

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(jobs_page(vec![job("j1", "A")], 1)),
        )
        .mount(&server)
        .await;

    store.detach();
    store.refresh().await.unwrap();

    // The response arrived after detach, so nothing was applied.
    assert!(store.state().items.is_empty());
    assert_eq!(store.state().total, 0);
}

// ── Self-delete guard ───────────────────────────────────────────────

#[tokio::test]
async fn own_account_delete_is_blocked_before_the_transport() {
    let (server, api, notifier) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/admin/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "a1", "email": "ops@marine-axis.io", "role": "superadmin" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "id": "a1", "name": "Ops", "email": "ops@marine-axis.io", "role": "superadmin" },
                { "id": "a2", "name": "Kim", "email": "kim@marine-axis.io", "role": "admin" }
            ],
            "total": 2
        })))
        .mount(&server)
        .await;

    // Zero tolerance: the delete call must never leave the process.
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admins/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let session = Session::new(api, marinax_core::PrincipalKind::Staff);
    session.restore("tok-123".to_string().into()).await.unwrap();

    let directory = AdminDirectory::new(session, notifier.clone());
    directory.store().refresh().await.unwrap();

    let mut notices = notifier.subscribe();
    let result = directory.delete("a1").await;

    assert!(matches!(result, Err(CoreError::OwnAccountDeletion)));
    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert!(notice.body.contains("signed in with"), "{}", notice.body);

    server.verify().await;
}

#[tokio::test]
async fn deleting_someone_else_goes_through() {
    let (server, api, notifier) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/admin/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": "a1", "email": "ops@marine-axis.io", "role": "superadmin" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "id": "a1", "name": "Ops", "email": "ops@marine-axis.io", "role": "superadmin" },
                { "id": "a2", "name": "Kim", "email": "kim@marine-axis.io", "role": "admin" }
            ],
            "total": 2
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admins/a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(api, marinax_core::PrincipalKind::Staff);
    session.restore("tok-123".to_string().into()).await.unwrap();

    let directory = AdminDirectory::new(session, notifier);
    directory.store().refresh().await.unwrap();
    directory.delete("a2").await.unwrap();

    let items = directory.store().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "a1");

    server.verify().await;
}
