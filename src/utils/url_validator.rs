//! URL validation for links submitted to the shortener.
//!
//! Checks run in a fixed order and stop at the first failure, so a given
//! malformed input always reports the same reason.

use url::Url;

/// Longest URL accepted, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reason a raw string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("URL exceeds maximum length of {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("URL could not be parsed: {0}")]
    Parse(String),

    #[error("URL must include a scheme (http/https)")]
    EmptyScheme,

    #[error("URL must include a host")]
    EmptyHost,

    #[error("unsupported URL scheme '{0}': only http and https are allowed")]
    UnsupportedScheme(String),
}

/// Validates that `raw` is an absolute http(s) URL with a host.
///
/// # Order of checks
///
/// 1. Empty input
/// 2. Length above [`MAX_URL_LENGTH`]
/// 3. Control characters anywhere, or whitespace at either end
/// 4. Generic URL parsing
/// 5. Empty scheme
/// 6. Empty host
/// 7. Scheme other than `http`/`https` (case-insensitive)
///
/// The input is never trimmed or rewritten; what passes here is stored as-is.
///
/// # Examples
///
/// ```
/// use urlshortener::utils::url_validator::{validate_url, UrlValidationError};
///
/// assert!(validate_url("https://example.com/a?b=c&d=<e>").is_ok());
/// assert_eq!(validate_url(""), Err(UrlValidationError::EmptyUrl));
/// assert!(matches!(
///     validate_url("ftp://example.com"),
///     Err(UrlValidationError::UnsupportedScheme(_))
/// ));
/// ```
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    if raw.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let length = raw.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong {
            max: MAX_URL_LENGTH,
            actual: length,
        });
    }

    // `Url::parse` strips these before parsing; the raw string is what gets stored.
    if raw.chars().any(char::is_control) {
        return Err(UrlValidationError::Parse(
            "URL contains control characters".to_string(),
        ));
    }
    if raw.starts_with(char::is_whitespace) || raw.ends_with(char::is_whitespace) {
        return Err(UrlValidationError::Parse(
            "URL has leading or trailing whitespace".to_string(),
        ));
    }

    let url = Url::parse(raw).map_err(|e| UrlValidationError::Parse(e.to_string()))?;

    if url.scheme().is_empty() {
        return Err(UrlValidationError::EmptyScheme);
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::EmptyHost);
    }

    let scheme = url.scheme();
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(UrlValidationError::UnsupportedScheme(scheme.to_string()));
    }

    Ok(())
}
