use crate::types::error::FieldErrors;

pub const EMAIL_TAKEN: &str = "The email has already been taken.";

const NAME_MAX: usize = 255;
const EMAIL_MAX: usize = 255;
const PASSWORD_MIN: usize = 6;

/// Required, at most 255 chars.
pub fn name(value: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
    let value = value.map(str::trim).filter(|v| !v.is_empty());
    match value {
        None => {
            errors.push("name", "The name field is required.");
            None
        }
        Some(v) if v.chars().count() > NAME_MAX => {
            errors.push("name", "The name may not be greater than 255 characters.");
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

/// Required, valid syntax, at most 255 chars. Matching stays byte-wise
/// case-sensitive; the store's unique constraint is the final arbiter.
pub fn email(value: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
    let value = value.map(str::trim).filter(|v| !v.is_empty());
    match value {
        None => {
            errors.push("email", "The email field is required.");
            None
        }
        Some(v) if v.chars().count() > EMAIL_MAX => {
            errors.push("email", "The email may not be greater than 255 characters.");
            None
        }
        Some(v) if !looks_like_email(v) => {
            errors.push("email", "The email must be a valid email address.");
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

/// At least 6 chars; `required` is false on update, where an absent password
/// means "keep the current one".
pub fn password(value: Option<&str>, required: bool, errors: &mut FieldErrors) -> Option<String> {
    match value.filter(|v| !v.is_empty()) {
        None => {
            if required {
                errors.push("password", "The password field is required.");
            }
            None
        }
        Some(v) if v.chars().count() < PASSWORD_MIN => {
            errors.push("password", "The password must be at least 6 characters.");
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

/// Presence only. Login must not leak which rule a wrong credential broke,
/// so no length rule applies there.
pub fn required(
    value: Option<&str>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => Some(v.to_string()),
        None => {
            errors.push(field, format!("The {} field is required.", field));
            None
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
