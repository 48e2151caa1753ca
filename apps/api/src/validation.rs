//! Request-field checks shared by every endpoint.
//!
//! Bodies deserialize required fields as `Option` so that a missing field is
//! reported as a 400 with a readable message instead of an extractor rejection.

use uuid::Uuid;

use crate::errors::AppError;

/// Requires a present, non-blank UUID field.
pub fn require_uuid(field: &str, value: Option<&str>) -> Result<Uuid, AppError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))?;

    Uuid::parse_str(raw).map_err(|_| AppError::Validation(format!("{field} must be a valid UUID")))
}

/// Requires a present text field that is non-empty after trimming. Returns the trimmed text.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, AppError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

/// Trims an optional text field, collapsing blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims every entry, drops blanks and duplicates, keeps first-seen order.
pub fn clean_list(values: Option<Vec<String>>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values.unwrap_or_default() {
        let value = value.trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_uuid_missing() {
        let err = require_uuid("user_id", None).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "user_id is required"));
    }

    #[test]
    fn test_require_uuid_blank_is_missing() {
        let err = require_uuid("user_id", Some("   ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "user_id is required"));
    }

    #[test]
    fn test_require_uuid_rejects_garbage() {
        let err = require_uuid("post_id", Some("not-a-uuid")).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("valid UUID")));
    }

    #[test]
    fn test_require_uuid_trims() {
        let id = Uuid::new_v4();
        let parsed = require_uuid("user_id", Some(format!(" {id} ").as_str())).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_require_text_trims_and_rejects_whitespace() {
        assert_eq!(require_text("name", Some("  Plumbing ")).unwrap(), "Plumbing");
        assert!(require_text("name", Some(" \t ")).is_err());
        assert!(require_text("name", None).is_err());
    }

    #[test]
    fn test_clean_list_dedupes_in_order() {
        let cleaned = clean_list(Some(vec![
            "b".to_string(),
            " a ".to_string(),
            "".to_string(),
            "b".to_string(),
        ]));
        assert_eq!(cleaned, vec!["b".to_string(), "a".to_string()]);
    }
}
