use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::profile::AccountRow;

pub async fn find_account_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<AccountRow>, AppError> {
    Ok(sqlx::query_as::<_, AccountRow>(
        r#"
        SELECT user_id, full_name, username, profile_picture_url, email, user_type, is_deleted
        FROM profiles
        WHERE lower(email) = lower($1)
        LIMIT 1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?)
}

/// Decides whether an account may sign in, optionally as a specific account type.
pub fn check_login_eligibility(
    account: &AccountRow,
    requested_type: Option<&str>,
) -> Result<(), AppError> {
    if account.is_deleted {
        return Err(AppError::Forbidden(
            "This account has been deleted".to_string(),
        ));
    }
    if let Some(requested) = requested_type {
        let matches = account
            .user_type
            .as_deref()
            .is_some_and(|actual| actual.eq_ignore_ascii_case(requested));
        if !matches {
            return Err(AppError::Forbidden(format!(
                "This account is not registered as {requested}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn account(user_type: Option<&str>, is_deleted: bool) -> AccountRow {
        AccountRow {
            user_id: Uuid::new_v4(),
            full_name: Some("Ada Rigger".to_string()),
            username: Some("ada".to_string()),
            profile_picture_url: None,
            email: Some("ada@example.com".to_string()),
            user_type: user_type.map(str::to_string),
            is_deleted,
        }
    }

    #[test]
    fn test_active_account_without_type_check() {
        assert!(check_login_eligibility(&account(Some("crew"), false), None).is_ok());
    }

    #[test]
    fn test_type_compared_case_insensitively() {
        assert!(check_login_eligibility(&account(Some("Company"), false), Some("company")).is_ok());
    }

    #[test]
    fn test_type_mismatch_forbidden() {
        let err =
            check_login_eligibility(&account(Some("crew"), false), Some("company")).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_missing_type_does_not_match_requested() {
        assert!(check_login_eligibility(&account(None, false), Some("admin")).is_err());
    }

    #[test]
    fn test_deleted_account_forbidden() {
        let err = check_login_eligibility(&account(Some("crew"), true), None).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(ref m) if m.contains("deleted")));
    }
}
