//! Parser for HAProxy's HTTP, TCP and error log lines.
//!
//! ```rust,ignore
//! let record = haproxy_log::parse_line(line)?;
//! if record.format() == haproxy_log::FormatKind::Http {
//!     println!("{} {}", record.http_status_code, record.client_ip);
//! }
//! ```

pub mod conf;
pub mod parser;

pub use conf::ParserConfig;
pub use parser::{
    parse_bytes, parse_line, FormatKind, HaproxyLogParser, HttpRequest, LogParser, LogRecord,
    ParseError, ParseMetrics,
};
