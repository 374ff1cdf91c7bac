//! Validation rules for posts and comments.

use crate::error::CoreError;

/// Maximum length of a comment, in characters.
pub const MAX_COMMENT_LEN: usize = 2000;

/// Validate a post title: non-empty after trimming.
pub fn validate_post_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Post title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate post body content: non-empty after trimming.
pub fn validate_post_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Post content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate comment content: non-empty after trimming and within the cap.
///
/// An empty or whitespace-only comment must be rejected before any row is
/// created so the parent post's comment counter stays untouched.
pub fn validate_comment_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Comment content must not be empty".to_string(),
        ));
    }
    let len = content.chars().count();
    if len > MAX_COMMENT_LEN {
        return Err(CoreError::Validation(format!(
            "Comment is {len} characters; maximum is {MAX_COMMENT_LEN}"
        )));
    }
    Ok(())
}
