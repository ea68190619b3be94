//! Input validation for search terms and contact messages

use crate::contract::{ContactMessage, TalesError};

/// Longest accepted search text, in characters
pub const MAX_SEARCH_LEN: usize = 200;

const MAX_NAME_LEN: usize = 200;
const MAX_EMAIL_LEN: usize = 320;
const MAX_MESSAGE_LEN: usize = 5000;

/// Wildcard in hosted `ilike` patterns that cannot be escaped
const HOSTED_WILDCARD: char = '*';

/// Validate a search term before it reaches a data source
///
/// `*` is rejected: the hosted table reads it as "any text" while the
/// snapshot matches it literally.
pub fn validate_search(search: Option<&str>) -> Result<(), TalesError> {
    if let Some(search) = search {
        if search.trim().chars().count() > MAX_SEARCH_LEN {
            return Err(TalesError::validation(format!(
                "search text must be at most {} characters",
                MAX_SEARCH_LEN
            )));
        }
        if search.contains(HOSTED_WILDCARD) {
            return Err(TalesError::validation(format!(
                "search text must not contain '{}'",
                HOSTED_WILDCARD
            )));
        }
    }
    Ok(())
}

/// Validate and trim a contact message
///
/// All fields are required. The email must have text on both sides of a
/// single `@` and no whitespace.
pub fn validate_contact(message: ContactMessage) -> Result<ContactMessage, TalesError> {
    let name = required("name", &message.name, MAX_NAME_LEN)?;
    let email = required("email", &message.email, MAX_EMAIL_LEN)?;
    let body = required("message", &message.message, MAX_MESSAGE_LEN)?;

    if !is_plausible_email(&email) {
        return Err(TalesError::validation(format!(
            "email '{}' is not a valid address",
            email
        )));
    }

    Ok(ContactMessage {
        name,
        email,
        message: body,
    })
}

fn required(field: &str, value: &str, max_len: usize) -> Result<String, TalesError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TalesError::validation(format!("{} is required", field)));
    }
    if value.chars().count() > max_len {
        return Err(TalesError::validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(value.to_string())
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
