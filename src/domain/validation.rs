//! Form rules checked before an intent is dispatched.
//!
//! A form that fails here never reaches the store.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;
use super::user::{LoginRequest, RegisterRequest, UpdateProfileRequest};

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email regex"));

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

fn email(value: &str) -> Result<(), ValidationError> {
    required("email", value)?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationError> {
    email(&request.email)?;
    required("password", &request.password)
}

pub fn validate_register(request: &RegisterRequest) -> Result<(), ValidationError> {
    required("firstName", &request.first_name)?;
    min_len("firstName", &request.first_name, MIN_NAME_LEN)?;
    required("lastName", &request.last_name)?;
    min_len("lastName", &request.last_name, MIN_NAME_LEN)?;
    email(&request.email)?;
    required("password", &request.password)?;
    min_len("password", &request.password, MIN_PASSWORD_LEN)
}

pub fn validate_profile(request: &UpdateProfileRequest) -> Result<(), ValidationError> {
    required("firstName", &request.first_name)?;
    required("lastName", &request.last_name)?;
    email(&request.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "engine123".into(),
        }
    }

    #[test]
    fn accepts_valid_register_form() {
        assert_eq!(validate_register(&register()), Ok(()));
    }

    #[test]
    fn rejects_short_password() {
        let mut form = register();
        form.password = "short".into();
        assert_eq!(
            validate_register(&form),
            Err(ValidationError::TooShort {
                field: "password",
                min: 8
            })
        );
    }

    #[test]
    fn rejects_bad_email() {
        let form = LoginRequest {
            email: "not-an-email".into(),
            password: "x".into(),
        };
        assert_eq!(
            validate_login(&form),
            Err(ValidationError::InvalidEmail("not-an-email".into()))
        );
    }

    #[test]
    fn blank_fields_are_required() {
        let form = UpdateProfileRequest {
            first_name: "  ".into(),
            last_name: "L".into(),
            email: "a@b.com".into(),
        };
        assert_eq!(
            validate_profile(&form),
            Err(ValidationError::Required("firstName"))
        );
    }
}
