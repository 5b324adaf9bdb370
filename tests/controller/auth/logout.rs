use axum::{http::StatusCode, response::IntoResponse};
use greatrace::{controller::auth::logout, model::session::auth::SessionAuthenticated};
use greatrace_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 and the flag cleared after logout of an authenticated session
async fn clears_authenticated_flag() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionAuthenticated::insert(&test.session).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(!SessionAuthenticated::get(&test.session).await.unwrap());

    Ok(())
}

#[tokio::test]
/// Expect 200 for logout of a session that never authenticated
async fn succeeds_without_session_data() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
