//! Classification of `sqlx` errors into [`StoreError`].

use crate::domain::repositories::StoreError;

/// Unique constraint on `url.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "url_short_code_key";

pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}

/// Errors raised while decoding a fetched row into a value.
fn is_row_decode_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. }
    )
}

/// Maps an error from a single-statement operation (insert, lookup, delete).
pub fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if is_unique_violation_on_code(&e) {
        return StoreError::UniqueViolation;
    }

    if matches!(e, sqlx::Error::PoolTimedOut) {
        return StoreError::Timeout;
    }

    if is_row_decode_error(&e) {
        return StoreError::Scan(e.to_string());
    }

    StoreError::Database(e.to_string())
}

/// Maps an error raised while running the list query and collecting its rows.
///
/// Errors reported by the server are query failures; anything else that
/// interrupts reading the result set is a row iteration failure.
pub fn map_list_error(e: sqlx::Error) -> StoreError {
    if matches!(e, sqlx::Error::PoolTimedOut) {
        return StoreError::Timeout;
    }

    if is_row_decode_error(&e) {
        return StoreError::Scan(e.to_string());
    }

    if e.as_database_error().is_some() {
        return StoreError::Query(e.to_string());
    }

    StoreError::Rows(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_timeout() {
        assert_eq!(map_sqlx_error(sqlx::Error::PoolTimedOut), StoreError::Timeout);
        assert_eq!(map_list_error(sqlx::Error::PoolTimedOut), StoreError::Timeout);
    }

    #[test]
    fn test_missing_column_maps_to_scan() {
        let err = sqlx::Error::ColumnNotFound("short_code".to_string());
        assert!(matches!(map_sqlx_error(err), StoreError::Scan(_)));

        let err = sqlx::Error::ColumnNotFound("short_code".to_string());
        assert!(matches!(map_list_error(err), StoreError::Scan(_)));
    }

    #[test]
    fn test_row_not_found_is_generic_database_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        ));
    }

    #[test]
    fn test_transport_failure_during_list_maps_to_rows() {
        let err = sqlx::Error::Protocol("unexpected message".to_string());
        assert!(matches!(map_list_error(err), StoreError::Rows(_)));
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation_on_code(&sqlx::Error::PoolClosed));
    }
}
