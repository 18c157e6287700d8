use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use http::Uri;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coerce::CoerceError;
use super::serde_utils::serialize_uri;

/// The three line shapes HAProxy writes, plus the "could not tell" marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// `option httplog` transaction lines
    Http,
    /// `option tcplog` connection lines
    Tcp,
    /// Connection errors (SSL handshake failures and the like)
    Error,
    /// Never carried by a successfully parsed record
    #[default]
    Unknown,
}

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Http => "http",
            FormatKind::Tcp => "tcp",
            FormatKind::Error => "error",
            FormatKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown log format name: {0}")]
pub struct UnknownFormatName(pub String);

impl FromStr for FormatKind {
    type Err = UnknownFormatName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(FormatKind::Http),
            "tcp" => Ok(FormatKind::Tcp),
            "error" => Ok(FormatKind::Error),
            "unknown" => Ok(FormatKind::Unknown),
            _ => Err(UnknownFormatName(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unable to parse log message of unknown format")]
    UnidentifiedFormat,

    #[error("Unable to parse {format} log message: {raw}")]
    NoPatternMatch { format: FormatKind, raw: String },

    #[error("Failed to decode field `{field}`: {source}")]
    FieldDecode {
        field: &'static str,
        #[source]
        source: CoerceError,
    },

    #[error("Line too large: {0} bytes (max: {1} bytes)")]
    LineTooLarge(usize, usize),

    #[error("Non-UTF8 content")]
    NonUtf8,
}

/// The request line of an HTTP transaction, e.g. `POST /path/to/app HTTP/1.1`.
///
/// A `<BADREQ>` line decodes to `HttpRequest::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HttpRequest {
    pub method: String,
    /// Request target exactly as logged
    pub target: String,
    /// Parsed form of `target`; `None` when it is not a valid URI
    #[serde(serialize_with = "serialize_uri")]
    pub uri: Option<Uri>,
    pub version: String,
}

impl HttpRequest {
    pub fn path(&self) -> &str {
        self.uri.as_ref().map(|u| u.path()).unwrap_or("")
    }

    pub fn query(&self) -> Option<&str> {
        self.uri.as_ref().and_then(|u| u.query())
    }

    /// True for the empty value produced by a `<BADREQ>` line.
    pub fn is_bad_request(&self) -> bool {
        self.method.is_empty() && self.target.is_empty() && self.version.is_empty()
    }
}

/// One parsed HAProxy log line.
///
/// Holds the union of the HTTP, TCP and Error fields. Fields that do not
/// belong to `format()` stay at their zero value, so callers should branch on
/// the format before reading format-specific fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogRecord {
    raw: String,
    format: FormatKind,

    // Common fields
    pub client_ip: String,
    pub client_port: i64,
    /// `None` when absent, or when the date could not be parsed in lenient mode
    pub accept_date: Option<DateTime<Utc>>,
    pub frontend_name: String,

    // HTTP/TCP fields
    pub backend_name: String,
    pub server_name: String,
    pub tw: i64,
    pub tc: i64,
    pub tt: i64,
    pub bytes_read: i64,
    pub termination_state: String,
    pub act_conn: i64,
    pub fe_conn: i64,
    pub be_conn: i64,
    pub srv_conn: i64,
    pub retries: i64,
    pub server_queue: i64,
    pub backend_queue: i64,

    // HTTP fields
    pub tq: i64,
    pub tr: i64,
    pub http_status_code: i64,
    pub captured_request_cookie: String,
    pub captured_response_cookie: String,
    pub captured_request_headers: Vec<String>,
    pub captured_response_headers: Vec<String>,
    pub http_request: Option<HttpRequest>,
    pub ssl_cipher: String,
    pub ssl_version: String,

    // Error fields
    pub bind_name: String,
    pub message: String,
}

impl LogRecord {
    pub(crate) fn new(raw: &str, format: FormatKind) -> Self {
        Self {
            raw: raw.to_string(),
            format,
            ..Self::default()
        }
    }

    pub fn format(&self) -> FormatKind {
        self.format
    }

    /// The source line this record was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
