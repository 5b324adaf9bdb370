//! Declarative test builder for gateway test setup.
//!
//! Provides the `TestBuilder` API for configuring the mock upstream before
//! execution. Endpoint shortcuts are queued and created against the mockito
//! server during the final `build()` call.

use mockito::Mock;
use serde_json::json;

use crate::{error::TestError, setup::TestSetup};

/// Builder for declarative test initialization.
///
/// Configures mock upstream endpoints for the iRacing auth and recent-races
/// routes. Methods can be chained together and finalized with `build()` to
/// create a complete [`TestSetup`].
#[derive(Default)]
pub struct TestBuilder {
    // Pre-configured endpoint shortcuts: (".." , expected_requests)
    login_success_endpoints: Vec<usize>,
    login_rejected_endpoints: Vec<usize>,
    login_error_endpoints: Vec<usize>,
    recent_races_endpoints: Vec<(serde_json::Value, usize)>,
    recent_races_error_endpoints: Vec<usize>,

    // Custom mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock the upstream auth endpoint accepting any credentials.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn with_login_success(mut self, expected_requests: usize) -> Self {
        self.login_success_endpoints.push(expected_requests);
        self
    }

    /// Mock the upstream auth endpoint rejecting the credentials.
    ///
    /// Answers 200 with `authcode: 0`, the service's rejection shape.
    pub fn with_login_rejected(mut self, expected_requests: usize) -> Self {
        self.login_rejected_endpoints.push(expected_requests);
        self
    }

    /// Mock the upstream auth endpoint failing at the transport level (503).
    pub fn with_login_error(mut self, expected_requests: usize) -> Self {
        self.login_error_endpoints.push(expected_requests);
        self
    }

    /// Mock the recent-races data endpoint returning `payload`.
    ///
    /// Pass `expected_requests` of zero to assert the endpoint is never hit.
    pub fn with_recent_races(
        mut self,
        payload: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.recent_races_endpoints.push((payload, expected_requests));
        self
    }

    /// Mock the recent-races data endpoint answering 500.
    pub fn with_recent_races_error(mut self, expected_requests: usize) -> Self {
        self.recent_races_error_endpoints.push(expected_requests);
        self
    }

    /// Add a custom mock endpoint built against the test server.
    pub fn with_mock<F>(mut self, mock_builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(mock_builder));
        self
    }

    /// Execute all queued endpoint setup and return the finished setup.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for expected_requests in self.login_success_endpoints {
            let mock = setup
                .server
                .mock("POST", "/auth")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(json!({"authcode": "token", "custId": 1}).to_string())
                .expect(expected_requests)
                .create_async()
                .await;
            setup.mocks.push(mock);
        }

        for expected_requests in self.login_rejected_endpoints {
            let mock = setup
                .server
                .mock("POST", "/auth")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    json!({"authcode": 0, "message": "Invalid email address or password."})
                        .to_string(),
                )
                .expect(expected_requests)
                .create_async()
                .await;
            setup.mocks.push(mock);
        }

        for expected_requests in self.login_error_endpoints {
            let mock = setup
                .server
                .mock("POST", "/auth")
                .with_status(503)
                .with_body("upstream unavailable")
                .expect(expected_requests)
                .create_async()
                .await;
            setup.mocks.push(mock);
        }

        for (payload, expected_requests) in self.recent_races_endpoints {
            let mock = setup
                .server
                .mock("GET", "/data/stats/member_recent_races")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(payload.to_string())
                .expect(expected_requests)
                .create_async()
                .await;
            setup.mocks.push(mock);
        }

        for expected_requests in self.recent_races_error_endpoints {
            let mock = setup
                .server
                .mock("GET", "/data/stats/member_recent_races")
                .with_status(500)
                .with_body("upstream error")
                .expect(expected_requests)
                .create_async()
                .await;
            setup.mocks.push(mock);
        }

        for mock_builder in self.mock_builders {
            let mock = mock_builder(&mut setup.server);
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
