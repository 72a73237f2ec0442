use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Credentials posted to `/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// New account posted to `/register/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Google access token exchanged at `/auth/google/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleAuthRequest {
    pub token: String,
}

/// Access/refresh pair issued on every successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer token.
    pub access: String,
    /// Long-lived token exchanged at `/token/refresh/`.
    pub refresh: String,
}

/// Body returned by `/login/`, `/register/` and `/auth/google/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub tokens: TokenPair,
    pub user: UserProfile,
}

/// Body posted to `/token/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Body returned by `/token/refresh/`.
///
/// `refresh` is only present when the backend rotates refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

/// Body returned by `/getUser/`, either wrapped in `{"user": ...}` or bare.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CurrentUserResponse {
    Wrapped { user: UserProfile },
    Bare(UserProfile),
}

impl CurrentUserResponse {
    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_matches_backend_shape() {
        let json = r#"{
            "user": {"email": "flexer@example.com", "username": "flexer@example.com"},
            "tokens": {"refresh": "r-token", "access": "a-token"}
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.tokens.access, "a-token");
        assert_eq!(response.tokens.refresh, "r-token");
        assert_eq!(response.user.email.as_deref(), Some("flexer@example.com"));
    }

    #[test]
    fn register_request_serializes_all_fields() {
        let request = RegisterRequest {
            username: "flexer".to_string(),
            email: "flexer@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "flexer",
                "email": "flexer@example.com",
                "password": "hunter22"
            })
        );
    }

    #[test]
    fn refresh_response_with_and_without_rotation() {
        let plain: RefreshResponse = serde_json::from_str(r#"{"access":"next"}"#).unwrap();
        assert_eq!(plain.refresh, None);

        let rotated: RefreshResponse =
            serde_json::from_str(r#"{"access":"next","refresh":"rotated"}"#).unwrap();
        assert_eq!(rotated.refresh.as_deref(), Some("rotated"));
    }

    #[test]
    fn current_user_accepts_wrapped_and_bare_bodies() {
        let wrapped: CurrentUserResponse =
            serde_json::from_str(r#"{"user":{"username":"flexer"}}"#).unwrap();
        assert_eq!(wrapped.into_profile().username.as_deref(), Some("flexer"));

        let bare: CurrentUserResponse =
            serde_json::from_str(r#"{"username":"flexer","email":"f@example.com"}"#).unwrap();
        let profile = bare.into_profile();
        assert_eq!(profile.username.as_deref(), Some("flexer"));
        assert_eq!(profile.email.as_deref(), Some("f@example.com"));
    }
}
