use regex::Regex;
use std::sync::LazyLock;

use crate::server::error::validation::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Trims `value` and rejects it when nothing is left.
pub fn require_field(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(trimmed.to_string())
}

/// Trims and lowercases an email address, rejecting malformed ones.
pub fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = require_field("email", email)?.to_lowercase();
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail(email));
    }

    Ok(email)
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::InvalidField {
            field: "password",
            reason: format!("must have at least {} characters", MIN_PASSWORD_LENGTH),
        });
    }

    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidField {
            field: "price",
            reason: "must be a non-negative number".to_string(),
        });
    }

    Ok(())
}
