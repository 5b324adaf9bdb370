use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_USER_AGENT, error::TestError};

pub struct TestAppState {
    pub racing_client: iracing::Client,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub store: Arc<MemoryStore>,
    pub session: Session,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from the
    /// racing client. This allows conversion to the gateway's AppState
    /// without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<iracing::Client>,
    {
        T::from(self.state.racing_client.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let racing_config = iracing::Config::builder().api_url(&mock_server.url()).build();

        let racing_client = iracing::Client::builder()
            .config(racing_config)
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store.clone(), None);

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { racing_client },
            store,
            session,
            mocks: Vec::new(),
        })
    }

    /// Mint an additional independent session backed by the same store.
    ///
    /// Used to verify that authenticating one session never leaks into
    /// another.
    pub fn new_session(&self) -> Session {
        Session::new(None, self.store.clone(), None)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
