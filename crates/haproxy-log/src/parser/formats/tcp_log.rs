use once_cell::sync::Lazy;

use super::{compile, FormatDefinition, BACKEND_SERVER, CLIENT_PREFIX, CONNECTION_COUNTERS};
use crate::parser::assemble::{field, Field};
use crate::parser::coerce::Hook;
use crate::parser::matcher::NamedPattern;
use crate::parser::model::FormatKind;

/// `option tcplog`:
///
/// ```text
/// %ci:%cp [%t] %ft %b/%s %Tw/%Tc/%Tt %B %ts %ac/%fc/%bc/%sc/%rc %sq/%bq
/// ```
pub(crate) static TCP_PATTERN: Lazy<NamedPattern> = Lazy::new(|| {
    compile(&[
        CLIENT_PREFIX,
        r"(?P<frontend_name>\S+) ",
        BACKEND_SERVER,
        r"(?P<tw>-1|[0-9]+)/(?P<tc>-1|[0-9]+)/(?P<tt>\+?[0-9]+) ",
        r"(?P<bytes_read>\+?[0-9]+) (?P<termination_state>[A-Za-z0-9_-]{2}) ",
        CONNECTION_COUNTERS,
        "$",
    ])
});

static TCP_FIELDS: &[Field] = &[
    field!(client_ip, Text),
    field!(client_port, Integer),
    field!(accept_date, Timestamp),
    field!(frontend_name, Text),
    field!(backend_name, Text),
    field!(server_name, Text),
    field!(tw, Integer),
    field!(tc, Integer),
    field!(tt, Integer),
    field!(bytes_read, Integer),
    field!(termination_state, Text),
    field!(act_conn, Integer),
    field!(fe_conn, Integer),
    field!(be_conn, Integer),
    field!(srv_conn, Integer),
    field!(retries, Integer),
    field!(server_queue, Integer),
    field!(backend_queue, Integer),
];

pub static TCP_LOG: FormatDefinition = FormatDefinition {
    kind: FormatKind::Tcp,
    pattern: &TCP_PATTERN,
    fields: TCP_FIELDS,
    hooks: &[Hook::Timestamp],
};
