//! Validation rules for catalog entities (projects and categories).
//!
//! Used by the API handlers before any row is written. All checks return
//! [`CoreError::Validation`] with a human-readable message.

use crate::error::CoreError;

/// Maximum length of a project description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Validate a project name: non-empty after trimming.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a project description against the length cap.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description is {len} characters; maximum is {MAX_DESCRIPTION_LEN}"
        )));
    }
    Ok(())
}

/// Validate that a URL is absolute http(s) and contains no whitespace.
///
/// This is a shape check, not a reachability check.
pub fn validate_url(url: &str) -> Result<(), CoreError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() && !url.chars().any(char::is_whitespace) => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "Invalid URL '{url}'. Must be an absolute http:// or https:// URL"
        ))),
    }
}

/// Validate a category slug: lowercase ASCII alphanumerics and single
/// hyphens, no leading or trailing hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !well_formed {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits, and single hyphens"
        )));
    }
    Ok(())
}

/// Validate a category display name: non-empty after trimming.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Category name must not be empty".to_string(),
        ));
    }
    Ok(())
}
