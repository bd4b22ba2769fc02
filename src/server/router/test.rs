use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::{
    model::blood_type::UNKNOWN_BLOOD_TYPE_MESSAGE,
    server::{
        config::Config,
        model::admin::{Admin, ADMIN_ROLE},
        router::{app, with_rate_limit},
        state::AppState,
    },
};

struct TestApp {
    app: Router,
    token: String,
    /// Keeps the in-memory database alive for the duration of the test.
    _context: TestContext,
}

async fn test_app() -> TestApp {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let state = AppState::new(db, Config::for_tests());
    let token = state
        .jwt
        .issue(&Admin {
            id: 1,
            username: "admin".to_string(),
            password_hash: String::new(),
            role: ADMIN_ROLE.to_string(),
            created_at: Utc::now(),
        })
        .unwrap();

    TestApp {
        app: app(state),
        token,
        _context: test,
    }
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Expected: 401 for a mutating route called without a bearer token
#[tokio::test]
async fn mutating_route_requires_token() {
    let test = test_app().await;

    let (status, body) = send(
        &test.app,
        Method::POST,
        "/api/locality",
        None,
        Some(json!({ "street": "Rua A", "neighborhood": "Centro", "zip": "01000-000", "city": "São Paulo", "state": "SP" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Access token not provided");
}

/// Expected: 403 for a token that doesn't verify
#[tokio::test]
async fn forged_token_is_forbidden() {
    let test = test_app().await;

    let (status, _) = send(
        &test.app,
        Method::DELETE,
        "/api/hist-blood/delete",
        Some("not-a-token"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Expected: 200 with the fixed message for an unknown blood type
#[tokio::test]
async fn unknown_blood_type_returns_message() {
    let test = test_app().await;

    let (status, body) = send(&test.app, Method::GET, "/api/hist-blood/XYZ", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], UNKNOWN_BLOOD_TYPE_MESSAGE);
}

/// Expected: seeding twice reports that the records already exist
#[tokio::test]
async fn seed_is_reported_once() {
    let test = test_app().await;
    let token = Some(test.token.as_str());

    let (status, body) = send(&test.app, Method::POST, "/api/hist-blood/create", token, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);
    assert_eq!(body["data"][0]["type"], "A+");

    let (status, body) = send(&test.app, Method::POST, "/api/hist-blood/create", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Os tipos sanguíneos já existem no banco.");
}

/// Expected: update applies the turnaround rule and a revert restores the previous values
#[tokio::test]
async fn update_then_revert_restores_previous_state() {
    let test = test_app().await;
    let token = Some(test.token.as_str());

    send(&test.app, Method::POST, "/api/hist-blood/create", token, None).await;

    let (status, body) = send(
        &test.app,
        Method::PUT,
        "/api/hist-blood/update/o-",
        token,
        Some(json!({ "sent": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "sent alterado: 4");
    assert_eq!(body["result"]["received"], 1);
    assert_eq!(body["result"]["sent"], 4.0);
    assert_eq!(body["result"]["shortTime"], 4.0);
    assert_eq!(body["result"]["longTime"], 4.0);

    send(
        &test.app,
        Method::PUT,
        "/api/hist-blood/update/O-",
        token,
        Some(json!({ "sent": 10 })),
    )
    .await;

    let (status, body) =
        send(&test.app, Method::PUT, "/api/hist-blood/revert/o-", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["received"], 1);
    assert_eq!(body["result"]["longTime"], 4.0);
    assert_eq!(body["result"]["canRevert"], false);

    let (_, body) = send(&test.app, Method::GET, "/api/hist-blood/O-", None, None).await;
    assert_eq!(body["result"]["received"], 1);
    assert_eq!(body["result"]["sent"], 4.0);
}

/// Expected: 400 with a field error for a negative turnaround
#[tokio::test]
async fn negative_sent_is_rejected() {
    let test = test_app().await;
    let token = Some(test.token.as_str());

    send(&test.app, Method::POST, "/api/hist-blood/create", token, None).await;

    let (status, body) = send(
        &test.app,
        Method::PUT,
        "/api/hist-blood/update/a-",
        token,
        Some(json!({ "sent": -2 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"][0]["field"], "sent");
}

/// Expected: 404 for a known blood type before seeding
#[tokio::test]
async fn unseeded_type_is_not_found() {
    let test = test_app().await;

    let (status, _) = send(&test.app, Method::GET, "/api/hist-blood/b-", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: reset returns all eight types at their initial values
#[tokio::test]
async fn reset_restores_initial_values() {
    let test = test_app().await;
    let token = Some(test.token.as_str());

    send(&test.app, Method::POST, "/api/hist-blood/create", token, None).await;
    send(
        &test.app,
        Method::PUT,
        "/api/hist-blood/update/ab-",
        token,
        Some(json!({ "sent": 12.5 })),
    )
    .await;

    let (status, body) =
        send(&test.app, Method::DELETE, "/api/hist-blood/delete", token, None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 8);
    for stat in data {
        assert_eq!(stat["received"], 0);
        assert_eq!(stat["sent"], 0.0);
        assert_eq!(stat["shortTime"], 20.0);
        assert_eq!(stat["longTime"], 0.0);
    }
}

/// Expected: register then login returns a token and sets the HttpOnly cookie
#[tokio::test]
async fn register_and_login() {
    let test = test_app().await;

    let (status, body) = send(
        &test.app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "username": "ana", "password": "segredo1", "credentials": "let-me-in" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "ana");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": "ana", "password": "segredo1" }).to_string(),
        ))
        .unwrap();
    let response = test.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["user"]["username"], "ana");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

/// Expected: 403 when registering with the wrong shared secret
#[tokio::test]
async fn register_with_wrong_credentials_is_denied() {
    let test = test_app().await;

    let (status, _) = send(
        &test.app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "username": "ana", "password": "segredo1", "credentials": "guess" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Expected: 400 with parser details for a body that isn't JSON
#[tokio::test]
async fn malformed_body_is_rejected() {
    let test = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/stock")
        .header(header::AUTHORIZATION, format!("Bearer {}", test.token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = test.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Expected: donor lookup by a non-UUID id is a validation error
#[tokio::test]
async fn donor_id_must_be_uuid() {
    let test = test_app().await;

    let (status, body) = send(&test.app, Method::GET, "/api/donors/42", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["message"], "ID must be a valid UUID");
}

/// Expected: stock CRUD through the router, ending with 204 on delete
#[tokio::test]
async fn stock_lifecycle() {
    let test = test_app().await;
    let token = Some(test.token.as_str());

    let (status, body) = send(
        &test.app,
        Method::POST,
        "/api/stock",
        token,
        Some(json!({ "lot": "L-100", "blood_type": "o+", "quantity": 12, "expiration_date": "2030-01-31" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "available");
    let id = body["id"].as_i64().unwrap();

    let (status, _) = send(
        &test.app,
        Method::POST,
        "/api/stock",
        token,
        Some(json!({ "lot": "L-100", "blood_type": "A+", "quantity": 1, "expiration_date": "2030-01-31" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &test.app,
        Method::PATCH,
        &format!("/api/stock/{}/quantity", id),
        token,
        Some(json!({ "quantity": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 3);

    let (_, body) = send(&test.app, Method::GET, "/api/stock?lot=l-1", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &test.app,
        Method::DELETE,
        &format!("/api/stock/{}", id),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) =
        send(&test.app, Method::GET, &format!("/api/stock/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Lot not found");
}

/// Expected: the OpenAPI document lists the bearer scheme
#[tokio::test]
async fn serves_openapi_document() {
    let test = test_app().await;

    let (status, body) = send(&test.app, Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/hist-blood/update/{blood_type}"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer"].is_object());
}

async fn send_from(app: &Router, peer: SocketAddr) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method(Method::GET)
        .uri("/api/hist-blood")
        .body(Body::empty())
        .unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn rate_limit_rejects_requests_past_the_burst() {
    let test = test_app().await;
    let limited = with_rate_limit(test.app.clone()).unwrap();
    let peer: SocketAddr = "203.0.113.7:40000".parse().unwrap();

    for _ in 0..40 {
        let (status, _) = send_from(&limited, peer).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send_from(&limited, peer).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Too many requests, please try again later.");

    let other: SocketAddr = "198.51.100.2:40000".parse().unwrap();
    let (status, _) = send_from(&limited, other).await;
    assert_eq!(status, StatusCode::OK);
}
