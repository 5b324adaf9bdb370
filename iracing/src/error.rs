use thiserror::Error;

/// Errors produced by the iRacing client.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connection, TLS, body decoding).
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// The service answered the login request but rejected the credentials.
    #[error("iRacing rejected the login: {0}")]
    LoginRejected(String),
    /// The service answered with a status the client does not understand.
    #[error("Unexpected response from iRacing (status {status}): {body}")]
    UnexpectedResponse {
        /// HTTP status of the offending response.
        status: u16,
        /// Response body, kept for server-side logging only.
        body: String,
    },
}
