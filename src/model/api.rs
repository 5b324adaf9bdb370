use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Credentials forwarded verbatim to the upstream login operation
///
/// No format validation happens at this layer; the upstream service is the
/// authority on what constitutes valid credentials.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    /// iRacing account e-mail
    pub username: String,
    /// iRacing account password
    pub password: String,
}

/// The response for operations that succeed without a payload
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    /// Always true on success
    pub success: bool,
}
