/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Serde helpers for the service's wire quirks.
//!
//! Subscriber timestamps arrive as `2010-10-25 10:28:00` (no zone, UTC) and
//! are exposed as `DateTime<Utc>`, rendered back as RFC3339.

use crate::constants::SUBSCRIBER_DATE_FORMAT;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parses a timestamp in the service format, accepting RFC3339 as well
///
/// # Example
/// ```
/// use createsend_client::presentation::serialization::parse_service_date;
///
/// let date = parse_service_date("2010-10-25 10:28:00").unwrap();
/// assert_eq!(date.to_rfc3339(), "2010-10-25T10:28:00+00:00");
/// ```
pub fn parse_service_date(value: &str) -> AppResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, SUBSCRIBER_DATE_FORMAT) {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| AppError::Deserialization(format!("invalid date {value:?}: {e}")))
}

/// Renders a timestamp as RFC3339 with second precision and a `Z` suffix
#[must_use]
pub fn format_rfc3339(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Deserializes an optional service timestamp; `null` and `""` become `None`
pub fn deserialize_service_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_service_date(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Serializes an optional timestamp as RFC3339
pub fn serialize_rfc3339<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&format_rfc3339(date)),
        None => serializer.serialize_none(),
    }
}

/// Treats an explicit `null` as the type's default value
pub fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Treats an explicit `null` array as empty
pub fn deserialize_null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
