//! The fixed HAProxy line shapes: pattern, field table and allowed hooks

pub mod error_log;
pub mod http_log;
pub mod tcp_log;

use once_cell::sync::Lazy;

use super::assemble::Field;
use super::coerce::Hook;
use super::matcher::NamedPattern;
use super::model::FormatKind;

pub use error_log::ERROR_LOG;
pub use http_log::HTTP_LOG;
pub use tcp_log::TCP_LOG;

/// `%ci:%cp [%t] `: shared by every format. The client address may be IPv4
/// or an unbracketed IPv6 literal (at least two colons, optionally ending in
/// an embedded IPv4 address).
///
/// All classes are spelled out in ASCII: the default `\d` and `\w` also match
/// non-ASCII digits and letters.
pub(crate) const CLIENT_PREFIX: &str = concat!(
    r"^(?P<client_ip>(?:[0-9]{1,3}\.){3}[0-9]{1,3}",
    r"|(?:[[:xdigit:]]{0,4}:){2,7}(?:[[:xdigit:]]{1,4}|(?:[0-9]{1,3}\.){3}[0-9]{1,3})?)",
    r":(?P<client_port>[0-9]{1,5}) ",
    r"\[(?P<accept_date>[0-9]{2}/[A-Za-z]{3}/[0-9]{4}(?::[0-9]{2}){3}\.[0-9]{3})\] ",
);

/// `%b/%s`: shared by HTTP and TCP.
pub(crate) const BACKEND_SERVER: &str = r"(?P<backend_name>[A-Za-z0-9_.-]+)/(?P<server_name>\S+) ";

/// `%ac/%fc/%bc/%sc/%rc %sq/%bq`: shared by HTTP and TCP.
pub(crate) const CONNECTION_COUNTERS: &str = concat!(
    r"(?P<act_conn>[0-9]+)/(?P<fe_conn>[0-9]+)/(?P<be_conn>[0-9]+)/(?P<srv_conn>[0-9]+)/(?P<retries>\+?[0-9]+) ",
    r"(?P<server_queue>[0-9]+)/(?P<backend_queue>[0-9]+)",
);

/// One line shape HAProxy writes.
#[derive(Debug)]
pub struct FormatDefinition {
    pub kind: FormatKind,
    pub pattern: &'static Lazy<NamedPattern>,
    pub fields: &'static [Field],
    /// Coercions this format may use beyond text and integers
    pub hooks: &'static [Hook],
}

impl FormatDefinition {
    pub fn pattern(&self) -> &NamedPattern {
        self.pattern
    }
}

/// The definition for `kind`, or `None` for [`FormatKind::Unknown`].
pub fn definition(kind: FormatKind) -> Option<&'static FormatDefinition> {
    match kind {
        FormatKind::Http => Some(&HTTP_LOG),
        FormatKind::Tcp => Some(&TCP_LOG),
        FormatKind::Error => Some(&ERROR_LOG),
        FormatKind::Unknown => None,
    }
}

pub(crate) fn compile(parts: &[&str]) -> NamedPattern {
    NamedPattern::new(&parts.concat()).expect("built-in HAProxy log pattern must compile")
}
