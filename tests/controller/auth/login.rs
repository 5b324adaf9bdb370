use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use greatrace::{
    controller::auth::login,
    model::{api::LoginDto, session::auth::SessionAuthenticated},
};
use greatrace_test_utils::prelude::*;

fn credentials() -> LoginDto {
    LoginDto {
        username: "u1".to_string(),
        password: "p1".to_string(),
    }
}

#[tokio::test]
/// Expect 200 and the session flag set when upstream accepts the credentials
async fn marks_session_authenticated_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_success(1).build().await?;

    let result = login(State(test.state()), test.session.clone(), Json(credentials())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(SessionAuthenticated::get(&test.session).await.unwrap());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 and the session untouched when upstream rejects the credentials
async fn rejects_login_when_upstream_rejects() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_rejected(1).build().await?;

    let result = login(State(test.state()), test.session.clone(), Json(credentials())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    assert!(!SessionAuthenticated::get(&test.session).await.unwrap());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 when the upstream auth endpoint fails at the transport level;
/// a network error and rejected credentials look identical to the client
async fn rejects_login_on_upstream_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_error(1).build().await?;

    let result = login(State(test.state()), test.session.clone(), Json(credentials())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    assert!(!SessionAuthenticated::get(&test.session).await.unwrap());

    Ok(())
}
