//! Coercion of captured text into typed record fields.
//!
//! Plain text and integer fields are converted loosely for every format.
//! The richer types need a hook, and each format declares the hooks it
//! allows; the assembler asks for a hook by the field's target type.

use chrono::{DateTime, NaiveDateTime, Utc};
use http::Uri;
use thiserror::Error;
use tracing::debug;

use super::model::HttpRequest;

/// Request line HAProxy logs when the client sent something unparseable.
pub const BAD_REQUEST: &str = "<BADREQ>";

/// `%t` layout, e.g. `29/May/2015:10:36:47.766`
pub const ACCEPT_DATE_LAYOUT: &str = "%d/%b/%Y:%H:%M:%S%.3f";

/// Delimiter HAProxy places between captured header values.
pub const HEADER_DELIMITER: char = '|';

/// Target-type tag for the coercions that need an explicit hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// text → absolute time
    Timestamp,
    /// text → [`HttpRequest`]
    HttpRequest,
    /// `|`-joined text → ordered list
    HeaderList,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    #[error("cannot convert {value:?} to an integer")]
    InvalidInteger { value: String },

    #[error("expected \"METHOD TARGET VERSION\" or <BADREQ>, got {value:?}")]
    MalformedRequest { value: String },

    #[error("invalid timestamp {value:?}")]
    InvalidTimestamp { value: String },

    #[error("no {0:?} hook registered for this format")]
    MissingHook(Hook),
}

/// Fails with [`CoerceError::MissingHook`] unless `hook` is in `hooks`.
pub fn require(hooks: &[Hook], hook: Hook) -> Result<(), CoerceError> {
    if hooks.contains(&hook) {
        Ok(())
    } else {
        Err(CoerceError::MissingHook(hook))
    }
}

/// Loose integer conversion: signed and `+`-prefixed tokens are accepted and
/// the empty string reads as zero.
pub fn weak_integer(raw: &str) -> Result<i64, CoerceError> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<i64>().map_err(|_| CoerceError::InvalidInteger {
        value: raw.to_string(),
    })
}

pub fn timestamp(raw: &str) -> Result<DateTime<Utc>, CoerceError> {
    NaiveDateTime::parse_from_str(raw, ACCEPT_DATE_LAYOUT)
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
        .map_err(|_| CoerceError::InvalidTimestamp {
            value: raw.to_string(),
        })
}

/// Like [`timestamp`], but an unparseable date degrades to `None`.
pub fn lenient_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    match timestamp(raw) {
        Ok(ts) => Some(ts),
        Err(e) => {
            debug!("Ignoring unparseable accept date: {}", e);
            None
        }
    }
}

/// Split `METHOD TARGET VERSION` on single spaces.
///
/// The [`BAD_REQUEST`] sentinel yields an empty request. A target that is not
/// a valid URI still produces a request, with `uri` left as `None`.
pub fn http_request(raw: &str) -> Result<HttpRequest, CoerceError> {
    if raw == BAD_REQUEST {
        return Ok(HttpRequest::default());
    }

    let parts: Vec<&str> = raw.split(' ').collect();
    match parts.as_slice() {
        [method, target, version] => Ok(HttpRequest {
            method: method.to_string(),
            target: target.to_string(),
            uri: target.parse::<Uri>().ok(),
            version: version.to_string(),
        }),
        _ => Err(CoerceError::MalformedRequest {
            value: raw.to_string(),
        }),
    }
}

pub fn header_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(HEADER_DELIMITER).map(str::to_string).collect()
}
