use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    RacingError(#[from] iracing::Error),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}
