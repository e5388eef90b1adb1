/**
 * Input Validation Helpers
 *
 * Shared validation for the register, login and profile-update paths:
 * required-field checks, email format validation and email normalization.
 */

use crate::error::ApiError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Normalize an email for storage and lookup: trim and lowercase.
///
/// Uniqueness is enforced over the normalized form, so `" A@X.com "` and
/// `"a@x.com"` refer to the same identity.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an email address format
///
/// Accepts `local@domain` where both parts are non-empty, the domain
/// contains a dot and nothing contains whitespace. Deliberately loose;
/// deliverability is not this backend's problem.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Check that every named field is non-empty
///
/// Returns a validation error listing the missing fields, in the form
/// `"name, password are required fields."`.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(format!(
            "{} are required fields.",
            missing.join(", ")
        )))
    }
}
