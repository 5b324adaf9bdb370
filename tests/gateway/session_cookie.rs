use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use greatrace_test_utils::prelude::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

fn login_request() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username":"u1","password":"p1"}"#))
        .unwrap()
}

fn recent_races_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/recent-races");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
/// Expect a set-cookie header and `{"success":true}` on successful login
async fn login_sets_session_cookie() {
    let app = super::test_app(Arc::new(StubRacingClient::accepting()));

    let response = app.oneshot(login_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));
    assert_eq!(body_json(response).await, json!({"success": true}));
}

#[tokio::test]
/// Expect the generic 401 body when the stand-in upstream rejects the login
async fn failed_login_returns_generic_error() {
    let app = super::test_app(Arc::new(StubRacingClient::rejecting()));

    let response = app.oneshot(login_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Authentication failed"})
    );
}

#[tokio::test]
/// Expect the generic 401 body for recent races without a prior login
async fn recent_races_requires_authentication() {
    let stub = Arc::new(StubRacingClient::accepting());
    let app = super::test_app(stub.clone());

    let response = app.oneshot(recent_races_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Not authenticated"})
    );
    assert_eq!(stub.recent_races_calls(), 0);
}

#[tokio::test]
/// Expect the login cookie to unlock the proxied payload while a cookieless
/// request on the same app stays rejected
async fn session_cookie_gates_recent_races() {
    let payload = json!([{"raceId": 1}]);
    let stub = Arc::new(StubRacingClient::accepting().with_recent_races(payload.clone()));
    let app = super::test_app(stub);

    let login_response = app.clone().oneshot(login_request()).await.unwrap();
    assert_eq!(login_response.status(), StatusCode::OK);

    let cookie = login_response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let authenticated = app
        .clone()
        .oneshot(recent_races_request(Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(authenticated.status(), StatusCode::OK);
    assert_eq!(body_json(authenticated).await, payload);

    // A fresh session on the same router sees none of session A's state.
    let unauthenticated = app.oneshot(recent_races_request(None)).await.unwrap();
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
/// Expect logout to invalidate the cookie's session
async fn logout_invalidates_session() {
    let stub = Arc::new(StubRacingClient::accepting());
    let app = super::test_app(stub);

    let login_response = app.clone().oneshot(login_request()).await.unwrap();
    let cookie = login_response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let logout_response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/logout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(logout_response.status(), StatusCode::OK);

    let response = app.oneshot(recent_races_request(Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
