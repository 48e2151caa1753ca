use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::catalog::kind::CatalogKind;
use crate::errors::AppError;
use crate::models::catalog::CatalogEntryRow;
use crate::pagination::Pagination;

/// Postgres unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Builds an `ILIKE` pattern matching `search` anywhere, with `%`, `_` and `\` escaped.
pub fn search_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn map_write_error(kind: CatalogKind, name: &str, err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            AppError::Conflict(format!("'{name}' already exists in {}", kind.table()))
        }
        _ => AppError::Database(err),
    }
}

pub async fn list_entries(
    pool: &PgPool,
    kind: CatalogKind,
    search: Option<&str>,
    page: u32,
    limit: u32,
) -> Result<(Vec<CatalogEntryRow>, Pagination), AppError> {
    let pattern = search.map(search_pattern);

    let total: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE ($1::text IS NULL OR name ILIKE $1)",
        kind.table()
    ))
    .bind(&pattern)
    .fetch_one(pool)
    .await?;

    let pagination = Pagination::new(page, limit, u64::try_from(total).unwrap_or(0));
    let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);

    let rows = sqlx::query_as::<_, CatalogEntryRow>(&format!(
        r#"
        SELECT id, name, created_at FROM {}
        WHERE ($1::text IS NULL OR name ILIKE $1)
        ORDER BY name ASC
        LIMIT $2 OFFSET $3
        "#,
        kind.table()
    ))
    .bind(&pattern)
    .bind(i64::from(limit))
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok((rows, pagination))
}

pub async fn create_entry(
    pool: &PgPool,
    kind: CatalogKind,
    name: &str,
) -> Result<CatalogEntryRow, AppError> {
    let row = sqlx::query_as::<_, CatalogEntryRow>(&format!(
        "INSERT INTO {} (name) VALUES ($1) RETURNING id, name, created_at",
        kind.table()
    ))
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_error(kind, name, e))?;

    info!("Created {} entry {} ({name})", kind.table(), row.id);
    Ok(row)
}

pub async fn update_entry(
    pool: &PgPool,
    kind: CatalogKind,
    id: Uuid,
    name: &str,
) -> Result<CatalogEntryRow, AppError> {
    sqlx::query_as::<_, CatalogEntryRow>(&format!(
        "UPDATE {} SET name = $1 WHERE id = $2 RETURNING id, name, created_at",
        kind.table()
    ))
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| map_write_error(kind, name, e))?
    .ok_or_else(|| AppError::NotFound(format!("{} entry {id} not found", kind.table())))
}

pub async fn delete_entry(pool: &PgPool, kind: CatalogKind, id: Uuid) -> Result<(), AppError> {
    let affected = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.table()))
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(AppError::NotFound(format!(
            "{} entry {id} not found",
            kind.table()
        )));
    }
    info!("Deleted {} entry {id}", kind.table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pattern_wraps() {
        assert_eq!(search_pattern("rig"), "%rig%");
    }

    #[test]
    fn test_search_pattern_escapes_wildcards() {
        assert_eq!(search_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(search_pattern("a\\b"), "%a\\\\b%");
    }
}
