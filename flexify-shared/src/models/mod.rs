pub mod auth;
pub mod errors;
pub mod timestamp;
pub mod user;

pub use auth::{
    AuthResponse, CurrentUserResponse, GoogleAuthRequest, LoginRequest, RefreshRequest,
    RefreshResponse, RegisterRequest, TokenPair,
};
pub use errors::{ApiErrorBody, FormField};
use serde::{Deserialize, Serialize};
pub use timestamp::Timestamp;
pub use user::UserProfile;

/// Response body of the unauthenticated `/hello/` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelloResponse {
    /// Greeting returned by the backend.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_response_deserializes() {
        let hello: HelloResponse =
            serde_json::from_str(r#"{"message":"Hello From Django!"}"#).unwrap();
        assert_eq!(hello.message, "Hello From Django!");
    }
}
