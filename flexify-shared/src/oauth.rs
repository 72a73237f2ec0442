//! Google sign-in through the OAuth 2.0 implicit flow.
//!
//! The browser is sent to Google's consent page and comes back with an access
//! token in the URL fragment. That token is then exchanged with the backend
//! at `/auth/google/` for a Flexify token pair.

use thiserror::Error;
use url::{Url, form_urlencoded};

pub const GOOGLE_AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_SCOPES: &str = "openid email profile";

/// Builds the consent URL for the implicit (`response_type=token`) flow.
///
/// # Errors
/// Returns [`url::ParseError`] if the authorize endpoint cannot be parsed.
pub fn google_authorize_url(
    client_id: &str,
    redirect_uri: &str,
    state: &str,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(GOOGLE_AUTHORIZE_ENDPOINT)?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "token")
        .append_pair("scope", GOOGLE_SCOPES)
        .append_pair("include_granted_scopes", "true")
        .append_pair("state", state);
    Ok(url)
}

/// Values Google appends to the redirect URI fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicitGrant {
    pub access_token: String,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OAuthFragmentError {
    #[error("Google sign-in was not completed: {0}")]
    Denied(String),
    #[error("Google did not return an access token")]
    MissingToken,
    #[error("Google sign-in response did not match this browser session")]
    StateMismatch,
}

/// Parses `#access_token=...&state=...` (leading `#` optional).
///
/// # Errors
/// [`OAuthFragmentError::Denied`] when Google returned an `error`,
/// [`OAuthFragmentError::MissingToken`] when no token is present.
pub fn parse_implicit_fragment(fragment: &str) -> Result<ImplicitGrant, OAuthFragmentError> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut access_token = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(OAuthFragmentError::Denied(error));
    }

    let access_token = access_token
        .filter(|token| !token.is_empty())
        .ok_or(OAuthFragmentError::MissingToken)?;

    Ok(ImplicitGrant {
        access_token,
        state,
    })
}

impl ImplicitGrant {
    /// Checks the returned `state` against the one stored before the redirect.
    ///
    /// # Errors
    /// [`OAuthFragmentError::StateMismatch`] when either side is missing or they differ.
    pub fn verify_state(self, expected: Option<&str>) -> Result<Self, OAuthFragmentError> {
        match (self.state.as_deref(), expected) {
            (Some(returned), Some(expected)) if returned == expected => Ok(self),
            _ => Err(OAuthFragmentError::StateMismatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_contains_implicit_flow_parameters() {
        let url = google_authorize_url(
            "client-123.apps.googleusercontent.com",
            "http://localhost:8080/auth/google/callback",
            "state-xyz",
        )
        .unwrap();

        assert_eq!(url.host_str(), Some("accounts.google.com"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("response_type".into(), "token".into())));
        assert!(pairs.contains(&("scope".into(), GOOGLE_SCOPES.into())));
        assert!(pairs.contains(&(
            "redirect_uri".into(),
            "http://localhost:8080/auth/google/callback".into()
        )));
        assert!(pairs.contains(&("state".into(), "state-xyz".into())));
    }

    #[test]
    fn parses_token_and_state() {
        let grant = parse_implicit_fragment(
            "#access_token=ya29.a0Af&token_type=Bearer&expires_in=3599&state=abc%20123",
        )
        .unwrap();
        assert_eq!(grant.access_token, "ya29.a0Af");
        assert_eq!(grant.state.as_deref(), Some("abc 123"));
    }

    #[test]
    fn reports_denied_consent() {
        assert_eq!(
            parse_implicit_fragment("error=access_denied&state=abc"),
            Err(OAuthFragmentError::Denied("access_denied".to_string()))
        );
    }

    #[test]
    fn missing_token_is_an_error() {
        assert_eq!(
            parse_implicit_fragment("#state=abc"),
            Err(OAuthFragmentError::MissingToken)
        );
        assert_eq!(
            parse_implicit_fragment("access_token=&state=abc"),
            Err(OAuthFragmentError::MissingToken)
        );
    }

    #[test]
    fn state_must_match() {
        let grant = parse_implicit_fragment("access_token=t&state=abc").unwrap();
        assert!(grant.clone().verify_state(Some("abc")).is_ok());
        assert_eq!(
            grant.clone().verify_state(Some("other")),
            Err(OAuthFragmentError::StateMismatch)
        );
        assert_eq!(
            grant.verify_state(None),
            Err(OAuthFragmentError::StateMismatch)
        );
    }
}
