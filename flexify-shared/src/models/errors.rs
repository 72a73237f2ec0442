use serde::{Deserialize, Deserializer, Serialize};

/// Form fields the backend can attach validation messages to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Username,
    Email,
    Password,
}

impl FormField {
    /// Prefix used when a field error is promoted to the notification text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

/// Error body sent by the backend on a failed request.
///
/// The backend mixes two conventions: a single `error`/`detail` string, or
/// per-field lists of messages (`{"email": ["already taken"]}`). All of them
/// are optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub username: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub email: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub password: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub non_field_errors: Vec<String>,
}

impl ApiErrorBody {
    /// Parse a response body, yielding an empty body when it is not JSON.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// First message attached to `field`, if any.
    #[must_use]
    pub fn field_error(&self, field: FormField) -> Option<&str> {
        let messages = match field {
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        };
        messages.first().map(String::as_str)
    }

    /// Message that is not tied to a specific field.
    #[must_use]
    pub fn general_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.detail.as_deref())
            .or_else(|| self.non_field_errors.first().map(String::as_str))
    }

    /// Best-effort text for the notification.
    ///
    /// A general message wins over field errors; among field errors the
    /// password outranks the username, which outranks the email.
    #[must_use]
    pub fn summary(&self, default: &str) -> String {
        if let Some(message) = self.general_message() {
            return message.to_string();
        }

        [FormField::Password, FormField::Username, FormField::Email]
            .into_iter()
            .find_map(|field| {
                self.field_error(field)
                    .map(|message| format!("{} error: {message}", field.label()))
            })
            .unwrap_or_else(|| default.to_string())
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(message) => vec![message],
        OneOrMany::Many(messages) => messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_beats_field_errors() {
        let body = ApiErrorBody::from_slice(
            br#"{"detail":"No active account found","email":["bad email"]}"#,
        );
        assert_eq!(body.summary("fallback"), "No active account found");
        assert_eq!(body.field_error(FormField::Email), Some("bad email"));
    }

    #[test]
    fn error_beats_detail() {
        let body = ApiErrorBody::from_slice(br#"{"error":"Invalid token","detail":"ignored"}"#);
        assert_eq!(body.summary("fallback"), "Invalid token");
    }

    #[test]
    fn field_precedence_is_password_username_email() {
        let body = ApiErrorBody::from_slice(
            br#"{"email":["email taken"],"username":["name taken"],"password":["too common"]}"#,
        );
        assert_eq!(body.summary("fallback"), "Password error: too common");

        let body = ApiErrorBody::from_slice(
            br#"{"email":["email taken"],"username":["name taken"]}"#,
        );
        assert_eq!(body.summary("fallback"), "Username error: name taken");

        let body = ApiErrorBody::from_slice(br#"{"email":"email taken"}"#);
        assert_eq!(body.summary("fallback"), "Email error: email taken");
    }

    #[test]
    fn non_json_body_falls_back_to_default() {
        let body = ApiErrorBody::from_slice(b"<html>502 Bad Gateway</html>");
        assert_eq!(body, ApiErrorBody::default());
        assert_eq!(
            body.summary("Registration failed. Please try again."),
            "Registration failed. Please try again."
        );
    }

    #[test]
    fn non_field_errors_count_as_general() {
        let body = ApiErrorBody::from_slice(
            br#"{"non_field_errors":["Unable to log in with provided credentials."]}"#,
        );
        assert_eq!(
            body.general_message(),
            Some("Unable to log in with provided credentials.")
        );
    }
}
