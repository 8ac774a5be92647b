use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use console_core::{ApiClient, FabricSearch};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    ApiSettings, AppErrorKind, FindFabricsParams, LoginRequest, SearchQuery, UserRole,
};

use crate::common::serve;

type Recorded = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn find_fabrics(
    State(seen): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    seen.lock().expect("lock").push(params);
    Json(json!({
        "data": [
            { "id": 11, "ref": "FAB-11", "fabrication": "Single Jersey", "gsm": 180, "width": 72 },
            { "id": 12, "ref": null, "gsm": 260.5, "meta_data": { "finish": "brushed" } }
        ],
        "has_more": true,
        "total": 12
    }))
}

async fn catalog() -> (ApiClient, Recorded) {
    let seen: Recorded = Arc::default();
    let router = Router::new()
        .route("/api/find-fabrics", get(find_fabrics))
        .route(
            "/api/fabric-groups",
            get(|| async { Json(json!(["Fleece", "Single Jersey", "Twill"])) }),
        )
        .with_state(seen.clone());
    (ApiClient::new(serve(router).await), seen)
}

/// Criteria travel as `page`, `limit`, `search`, `group`, `weight`; the type
/// filter stays client-side.
#[tokio::test]
async fn find_fabrics_sends_criteria_and_decodes_page() {
    let (client, seen) = catalog().await;
    let query = SearchQuery {
        term: "cotton".to_string(),
        fabrication: "Single Jersey".to_string(),
        fabric_type: "knit".to_string(),
        gsm_range: "medium".to_string(),
    };

    let response = client
        .find_fabrics(&FindFabricsParams::new(&query, 2, 20))
        .await
        .expect("search");

    let seen = seen.lock().expect("lock").clone();
    assert_eq!(seen.len(), 1);
    let params = &seen[0];
    assert_eq!(params.get("page").map(String::as_str), Some("2"));
    assert_eq!(params.get("limit").map(String::as_str), Some("20"));
    assert_eq!(params.get("search").map(String::as_str), Some("cotton"));
    assert_eq!(params.get("group").map(String::as_str), Some("Single Jersey"));
    assert_eq!(params.get("weight").map(String::as_str), Some("medium"));
    assert!(!params.contains_key("type"));

    assert_eq!(response.total, 12);
    assert!(response.more_available());
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].key().as_str(), "FAB-11");
    assert_eq!(response.data[0].width.as_deref(), Some("72"));
    assert_eq!(response.data[1].key().as_str(), "12");
}

/// Empty criteria are left off the query string.
#[tokio::test]
async fn find_fabrics_omits_empty_criteria() {
    let (client, seen) = catalog().await;
    let query = SearchQuery {
        term: "fleece".to_string(),
        ..SearchQuery::default()
    };

    client
        .find_fabrics(&FindFabricsParams::new(&query, 1, 20))
        .await
        .expect("search");

    let seen = seen.lock().expect("lock").clone();
    let mut keys: Vec<&str> = seen[0].keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["limit", "page", "search"]);
}

#[tokio::test]
async fn fabric_groups_are_listed() {
    let (client, _) = catalog().await;
    let groups = client.fabric_groups().await.expect("groups");
    assert_eq!(groups, vec!["Fleece", "Single Jersey", "Twill"]);
}

/// The older `{results, total, page, pages}` body still decodes.
#[tokio::test]
async fn legacy_response_shape_is_accepted() {
    let router = Router::new().route(
        "/api/find-fabrics",
        get(|| async {
            Json(json!({
                "results": [{ "id": 1, "ref": "OLD-1" }],
                "total": 30,
                "page": 1,
                "pages": 2
            }))
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let response = client
        .find_fabrics(&FindFabricsParams::new(&SearchQuery::term("x"), 1, 20))
        .await
        .expect("search");

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.total, 30);
    assert!(response.more_available());
}

/// Non-2xx answers surface as `Http` errors carrying the server's `msg`.
#[tokio::test]
async fn error_status_carries_server_message() {
    let router = Router::new().route(
        "/api/find-fabrics",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "msg": "search index rebuilding" })),
            )
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let err = client
        .find_fabrics(&FindFabricsParams::new(&SearchQuery::term("x"), 1, 20))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Http);
    assert_eq!(err.status, Some(503));
    assert_eq!(err.message, "search index rebuilding");
    assert!(err.is_transient());
}

/// Without a JSON error body the status line is the message.
#[tokio::test]
async fn error_status_without_body_uses_status_text() {
    let router = Router::new().route(
        "/api/find-fabrics",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
    );
    let client = ApiClient::new(serve(router).await);

    let err = client
        .find_fabrics(&FindFabricsParams::new(&SearchQuery::term("x"), 1, 20))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Http);
    assert_eq!(err.message, "500 Internal Server Error");
}

/// A 200 with a body that is not a search page is a decode error.
#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route("/api/find-fabrics", get(|| async { "<html>" }));
    let client = ApiClient::new(serve(router).await);

    let err = client
        .find_fabrics(&FindFabricsParams::new(&SearchQuery::term("x"), 1, 20))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
    assert!(err.message.contains("<html>"), "{}", err.message);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = ApiClient::new(ApiSettings {
        base_url: "http://127.0.0.1:1".to_string(),
    });

    let err = client
        .find_fabrics(&FindFabricsParams::new(&SearchQuery::term("x"), 1, 20))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
}

fn auth_router() -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "correct horse" {
                    (
                        StatusCode::OK,
                        Json(json!({
                            "token": "tok-7",
                            "user_profile": {
                                "id": 7,
                                "email": body["email"],
                                "role": "buyer",
                                "name": "Acme Apparel"
                            }
                        })),
                    )
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "msg": "Invalid credentials" })),
                    )
                }
            }),
        )
        .route(
            "/api/auth/me",
            get(|headers: HeaderMap| async move {
                let bearer = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                if bearer == "Bearer tok-7" {
                    (
                        StatusCode::OK,
                        Json(json!({ "id": 7, "email": "buyer@acme.test", "role": "buyer" })),
                    )
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "msg": "Token expired" })),
                    )
                }
            }),
        )
}

#[tokio::test]
async fn login_returns_token_and_profile() {
    let client = ApiClient::new(serve(auth_router()).await);

    let response = client
        .login(&LoginRequest {
            email: "buyer@acme.test".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .expect("login");

    assert_eq!(response.token, "tok-7");
    assert_eq!(response.user_profile.role, UserRole::Buyer);
    assert_eq!(response.user_profile.display_name(), "Acme Apparel");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let client = ApiClient::new(serve(auth_router()).await);

    let err = client
        .login(&LoginRequest {
            email: "buyer@acme.test".to_string(),
            password: "guess".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
}

/// `me` sends the bearer token and needs one to be set.
#[tokio::test]
async fn me_uses_the_session_token() {
    let settings = serve(auth_router()).await;

    let user = ApiClient::new(settings.clone())
        .with_token("tok-7")
        .me()
        .await
        .expect("me");
    assert_eq!(user.id, 7);
    assert_eq!(user.display_name(), "Buyer");

    let err = ApiClient::new(settings.clone())
        .with_token("stale")
        .me()
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);

    let err = ApiClient::new(settings).me().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}
