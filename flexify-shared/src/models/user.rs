use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile blob returned by the auth endpoints and cached under the `user`
/// local storage key.
///
/// The backend decides the exact shape; only the fields the UI reads are typed,
/// everything else is preserved in [`UserProfile::extra`] so that a round trip
/// through local storage does not lose data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Account username. Google sign-ups use the email address here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Any other fields sent by the backend.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Name used in greetings: the username, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.username.as_deref()).or_else(|| non_blank(self.email.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_username() {
        let user = UserProfile {
            username: Some("flexer".to_string()),
            email: Some("flexer@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), Some("flexer"));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = UserProfile {
            username: Some("   ".to_string()),
            email: Some("flexer@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), Some("flexer@example.com"));
        assert_eq!(UserProfile::default().display_name(), None);
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let json = r#"{"username":"flexer","email":"f@example.com","id":7,"is_staff":false}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.extra.get("id"), Some(&Value::from(7)));

        let encoded = serde_json::to_string(&user).unwrap();
        let decoded: UserProfile = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, user);
        assert!(!encoded.contains("first_name"));
    }
}
