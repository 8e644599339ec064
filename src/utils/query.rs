/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::{AppError, AppResult};
use url::form_urlencoded;

/// Appends form-urlencoded query parameters to an endpoint path
///
/// Parameters keep the order in which they are given. An empty slice leaves
/// the path untouched, so no dangling `?` is produced.
///
/// # Example
/// ```
/// use createsend_client::utils::query::with_query;
///
/// let path = with_query("clients/abc/listsforemail.json", &[("email", "a+b@example.com")]);
/// assert_eq!(path, "clients/abc/listsforemail.json?email=a%2Bb%40example.com");
/// ```
pub fn with_query<K, V>(path: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if pairs.is_empty() {
        return path.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish();

    format!("{path}?{query}")
}

/// Rejects blank identifiers and email addresses before they are placed in a
/// request path or query
///
/// # Arguments
/// * `value` - The caller supplied value
/// * `name` - Name used in the error message (e.g. `"list_id"`)
pub fn require<'a>(value: &'a str, name: &str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!("{name} must not be empty")));
    }
    Ok(trimmed)
}
