//! Validation logic for the login and signup forms.
//!
//! The backend performs the authoritative checks; these only catch mistakes
//! that never need a round trip.

use crate::models::FormField;

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Email address is invalid (missing @ symbol)
    InvalidEmail,
    /// Email confirmation doesn't match email
    EmailsDoNotMatch,
    /// Password confirmation doesn't match password
    PasswordsDoNotMatch,
}

impl ValidationError {
    /// Translation key of the message shown under the input.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Required => "validation.required",
            Self::InvalidEmail => "validation.invalid_email",
            Self::EmailsDoNotMatch => "validation.emails_do_not_match",
            Self::PasswordsDoNotMatch => "validation.passwords_do_not_match",
        }
    }
}

/// Validates a username.
///
/// # Errors
/// [`ValidationError::Required`] when the username is blank.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates an email address.
///
/// # Errors
/// [`ValidationError::Required`] when blank, [`ValidationError::InvalidEmail`]
/// when there is no `@`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates that the email confirmation matches the email.
///
/// # Errors
/// [`ValidationError::Required`] when blank, [`ValidationError::EmailsDoNotMatch`]
/// when the two differ.
pub fn validate_confirm_email(confirm_email: &str, email: &str) -> Result<(), ValidationError> {
    if confirm_email.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if confirm_email.trim() != email.trim() {
        return Err(ValidationError::EmailsDoNotMatch);
    }

    Ok(())
}

/// Validates a password.
///
/// # Errors
/// [`ValidationError::Required`] when the password is empty.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
///
/// # Errors
/// [`ValidationError::Required`] when empty, [`ValidationError::PasswordsDoNotMatch`]
/// when the two differ.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.is_empty() {
        return Err(ValidationError::Required);
    }

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

/// Raw values of the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub confirm_email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field outcome of [`validate_signup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub username: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub confirm_email: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub confirm_password: Option<ValidationError>,
}

impl SignupErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.confirm_email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

#[must_use]
pub fn validate_signup(form: &SignupForm) -> SignupErrors {
    SignupErrors {
        username: validate_username(&form.username).err(),
        email: validate_email(&form.email).err(),
        confirm_email: validate_confirm_email(&form.confirm_email, &form.email).err(),
        password: validate_password(&form.password).err(),
        confirm_password: validate_confirm_password(&form.confirm_password, &form.password)
            .err(),
    }
}

/// Both login fields are required.
///
/// # Errors
/// The first missing field and [`ValidationError::Required`].
pub fn validate_login(username: &str, password: &str) -> Result<(), (FormField, ValidationError)> {
    validate_username(username).map_err(|err| (FormField::Username, err))?;
    validate_password(password).map_err(|err| (FormField::Password, err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            username: "flexer".to_string(),
            email: "flexer@example.com".to_string(),
            confirm_email: "flexer@example.com".to_string(),
            password: "deadlift-42".to_string(),
            confirm_password: "deadlift-42".to_string(),
        }
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("flexer").is_ok());
        assert_eq!(validate_username("  "), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(
            validate_email("flexer.example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_confirm_email() {
        assert!(validate_confirm_email("a@b.co ", "a@b.co").is_ok());
        assert_eq!(
            validate_confirm_email("b@b.co", "a@b.co"),
            Err(ValidationError::EmailsDoNotMatch)
        );
        assert_eq!(
            validate_confirm_email("", "a@b.co"),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("secret", "secret").is_ok());
        assert_eq!(
            validate_confirm_password("Secret", "secret"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        assert_eq!(
            validate_confirm_password("", "secret"),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn valid_signup_has_no_errors() {
        assert!(validate_signup(&valid_form()).is_empty());
    }

    #[test]
    fn mismatched_passwords_block_signup() {
        let form = SignupForm {
            confirm_password: "deadlift-43".to_string(),
            ..valid_form()
        };
        let errors = validate_signup(&form);
        assert!(!errors.is_empty());
        assert_eq!(
            errors.confirm_password,
            Some(ValidationError::PasswordsDoNotMatch)
        );
        assert_eq!(errors.password, None);
        assert_eq!(errors.email, None);
    }

    #[test]
    fn mismatched_emails_are_reported_on_confirmation() {
        let form = SignupForm {
            confirm_email: "other@example.com".to_string(),
            ..valid_form()
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.email, None);
        assert_eq!(errors.confirm_email, Some(ValidationError::EmailsDoNotMatch));
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("flexer", "pw").is_ok());
        assert_eq!(
            validate_login("", "pw"),
            Err((FormField::Username, ValidationError::Required))
        );
        assert_eq!(
            validate_login("flexer", ""),
            Err((FormField::Password, ValidationError::Required))
        );
    }

    #[test]
    fn message_keys_are_distinct() {
        let keys = [
            ValidationError::Required.message_key(),
            ValidationError::InvalidEmail.message_key(),
            ValidationError::EmailsDoNotMatch.message_key(),
            ValidationError::PasswordsDoNotMatch.message_key(),
        ];
        for (index, key) in keys.iter().enumerate() {
            assert!(key.starts_with("validation."));
            assert!(!keys[index + 1..].contains(key));
        }
    }
}
