use std::cell::OnceCell;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    ApiErrorBody, AuthResponse, CurrentUserResponse, GoogleAuthRequest, HelloResponse,
    LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest, UserProfile,
};
use thiserror::Error;

use crate::config::FrontendConfig;
use crate::storage::Session;

const CONNECTION_FAILED: &str = "Unable to connect to server";
const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

thread_local! {
    static SHARED_CLIENT: OnceCell<FlexifyClient> = const { OnceCell::new() };
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("server responded with {status}")]
    Status { status: StatusCode, body: ApiErrorBody },
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("no access token stored")]
    MissingAccessToken,
    #[error("no refresh token stored")]
    MissingRefreshToken,
    #[error("session expired")]
    SessionExpired,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Network(err)
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) | Self::Decode(err) => err.status(),
            _ => None,
        }
    }

    /// Field-level details reported by the backend, if any.
    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The user must sign in again before authenticated calls can succeed.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::SessionExpired | Self::MissingAccessToken | Self::MissingRefreshToken
        )
    }

    /// Text for a notification, preferring what the backend said.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::Status { body, .. } => body.summary(default),
            Self::Network(_) => CONNECTION_FAILED.to_string(),
            Self::SessionExpired | Self::MissingRefreshToken => SESSION_EXPIRED.to_string(),
            Self::Decode(_) | Self::MissingAccessToken => default.to_string(),
        }
    }
}

/// API client for the Flexify backend.
///
/// Tokens are read from and written to the [`Session`] on every call, so
/// clones share state through the underlying storage.
#[derive(Clone, Debug)]
pub struct FlexifyClient {
    base_url: String,
    client: Client,
    session: Session,
}

impl FlexifyClient {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
        }
    }

    /// Client for the configured backend, backed by `localStorage`.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(config.api_base_url(), Session::browser())
            })
            .clone()
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ApiError::Decode);
        }

        let bytes = response.bytes().await?;
        log::debug!("request failed with {status}");
        Err(ApiError::Status {
            status,
            body: ApiErrorBody::from_slice(&bytes),
        })
    }

    async fn post_json<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.api_url(path))
            .json(payload)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn authenticate<B: Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<AuthResponse, ApiError> {
        let auth: AuthResponse = self.post_json(path, payload).await?;
        self.session.persist(&auth);
        log::info!(
            "signed in as {}",
            auth.user.display_name().unwrap_or("unknown user")
        );
        Ok(auth)
    }

    /// Sends a bearer-authenticated request, refreshing the access token once
    /// if the backend rejects it. Returns the token the response was made with.
    async fn send_authorized<F>(&self, build: F) -> Result<(Response, String), ApiError>
    where
        F: Fn(&str) -> RequestBuilder,
    {
        let token = self
            .session
            .access_token()
            .ok_or(ApiError::MissingAccessToken)?;

        let response = build(&token).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok((response, token));
        }
        drop(response);

        log::debug!("access token rejected, refreshing");
        let token = match self.refresh_access_token().await {
            Ok(token) => token,
            Err(ApiError::MissingRefreshToken) => {
                self.session.logout();
                return Err(ApiError::SessionExpired);
            }
            Err(err) => return Err(err),
        };

        let response = build(&token).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            log::warn!("refreshed token was rejected, signing out");
            self.session.logout();
            return Err(ApiError::SessionExpired);
        }
        Ok((response, token))
    }

    /// The session still holds `token`, i.e. no logout or re-login happened
    /// while a request made with it was in flight.
    fn still_using(&self, token: &str) -> bool {
        self.session.access_token().as_deref() == Some(token)
    }

    /// Connectivity probe returning the backend greeting.
    pub async fn hello(&self) -> Result<HelloResponse, ApiError> {
        let response = self.client.get(self.api_url("hello/")).send().await?;
        Self::parse(response).await
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.authenticate("login/", payload).await
    }

    /// Create an account. A successful signup is also signed in.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.authenticate("register/", payload).await
    }

    /// Exchange a Google access token for a Flexify token pair.
    pub async fn google_auth(&self, google_token: &str) -> Result<AuthResponse, ApiError> {
        let payload = GoogleAuthRequest {
            token: google_token.to_string(),
        };
        self.authenticate("auth/google/", &payload).await
    }

    /// Trade the stored refresh token for a new access token.
    ///
    /// A rejected refresh token signs the session out. Tokens are only stored
    /// if the session was not replaced or cleared while the call was pending.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh = self
            .session
            .refresh_token()
            .ok_or(ApiError::MissingRefreshToken)?;

        let response = self
            .client
            .post(self.api_url("token/refresh/"))
            .json(&RefreshRequest {
                refresh: refresh.clone(),
            })
            .send()
            .await?;

        if self.session.refresh_token().as_deref() != Some(refresh.as_str()) {
            log::info!("session changed during token refresh, discarding result");
            return Err(ApiError::SessionExpired);
        }

        if !response.status().is_success() {
            log::warn!("refresh token rejected with {}", response.status());
            self.session.logout();
            return Err(ApiError::SessionExpired);
        }

        let body: RefreshResponse = response.json().await.map_err(ApiError::Decode)?;
        if self.session.refresh_token().as_deref() != Some(refresh.as_str()) {
            return Err(ApiError::SessionExpired);
        }
        self.session.set_access_token(&body.access);
        if let Some(rotated) = body.refresh.as_deref() {
            self.session.set_refresh_token(rotated);
        }
        Ok(body.access)
    }

    /// Fetch the signed-in user's profile and cache it.
    ///
    /// Fails with [`ApiError::SessionExpired`] if the user signed out while
    /// the request was pending; nothing is cached in that case.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        let url = self.api_url("getUser/");
        let (response, token) = self
            .send_authorized(|token| self.client.get(url.clone()).bearer_auth(token))
            .await?;
        let user = Self::parse::<CurrentUserResponse>(response)
            .await?
            .into_profile();
        if !self.still_using(&token) {
            log::info!("session changed while fetching the profile, discarding it");
            return Err(ApiError::SessionExpired);
        }
        self.session.set_user(&user);
        Ok(user)
    }

    /// Local sign-out; the backend keeps no session to terminate.
    pub fn logout(&self) {
        self.session.logout();
        log::info!("signed out");
    }
}
