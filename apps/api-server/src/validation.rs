//! Input validation for registration and login.

use regex::Regex;
use std::sync::OnceLock;

use crate::middleware::error::AppError;

const MIN_PASSWORD_LEN: usize = 5;

/// Validate that the username is a syntactically valid email address.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(username) {
        return Err("Username must be a valid email address".to_string());
    }

    Ok(())
}

/// Validate password length.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }

    Ok(())
}

/// Collect all violations so the client sees every problem at once.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_username(username) {
        errors.push(e);
    }
    if let Err(e) = validate_password(password) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_accepted() {
        assert!(validate_username("user@example.com").is_ok());
    }

    #[test]
    fn test_non_email_rejected() {
        assert!(validate_username("not-an-email").is_err());
        assert!(validate_username("missing@tld").is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(validate_password("1234").is_err());
        assert!(validate_password("12345").is_ok());
    }

    #[test]
    fn test_all_violations_reported_together() {
        let err = validate_credentials("bad", "123").unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
