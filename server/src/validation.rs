use crate::error::ApiError;

pub const MAX_TITLE_CHARS: usize = 200;

const TITLE_MESSAGE: &str = "Title is required and must be <= 200 characters.";

/// Reject titles that are absent, blank or longer than [`MAX_TITLE_CHARS`].
/// Hands back the accepted title.
pub fn validate_title(title: Option<&str>) -> Result<&str, ApiError> {
    match title {
        Some(title) if !title.trim().is_empty() && title.chars().count() <= MAX_TITLE_CHARS => {
            Ok(title)
        }
        _ => Err(ApiError::Validation(TITLE_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_character() {
        assert!(validate_title(Some("a")).is_ok());
    }

    #[test]
    fn accepts_exactly_max_length() {
        assert!(validate_title(Some(&"x".repeat(MAX_TITLE_CHARS))).is_ok());
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 200 two-byte characters
        assert!(validate_title(Some(&"é".repeat(MAX_TITLE_CHARS))).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(validate_title(Some("")), Err(ApiError::Validation(_))));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(matches!(validate_title(Some(" \t\n ")), Err(ApiError::Validation(_))));
    }

    #[test]
    fn rejects_over_max_length() {
        let err = validate_title(Some(&"x".repeat(MAX_TITLE_CHARS + 1))).unwrap_err();
        assert_eq!(err.to_string(), TITLE_MESSAGE);
    }

    #[test]
    fn keeps_surrounding_whitespace_valid() {
        assert_eq!(validate_title(Some("  Buy milk  ")).unwrap(), "  Buy milk  ");
    }

    #[test]
    fn rejects_absent() {
        assert!(matches!(validate_title(None), Err(ApiError::Validation(_))));
    }
}
