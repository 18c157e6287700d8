use once_cell::sync::Lazy;

use super::{compile, FormatDefinition, BACKEND_SERVER, CLIENT_PREFIX, CONNECTION_COUNTERS};
use crate::parser::assemble::{field, Field};
use crate::parser::coerce::Hook;
use crate::parser::matcher::NamedPattern;
use crate::parser::model::FormatKind;

/// `option httplog`, optionally followed by `%sslc/%sslv`:
///
/// ```text
/// %ci:%cp [%t] %ft %b/%s %Tq/%Tw/%Tc/%Tr/%Tt %ST %B %CC %CS %tsc \
///     %ac/%fc/%bc/%sc/%rc %sq/%bq %hr %hs %{+Q}r %sslc/%sslv
/// ```
pub(crate) static HTTP_PATTERN: Lazy<NamedPattern> = Lazy::new(|| {
    compile(&[
        CLIENT_PREFIX,
        r"(?P<frontend_name>\S+) ",
        BACKEND_SERVER,
        r"(?P<tq>-1|[0-9]+)/(?P<tw>-1|[0-9]+)/(?P<tc>-1|[0-9]+)/(?P<tr>-1|[0-9]+)/(?P<tt>\+?[0-9]+) ",
        r"(?P<http_status_code>-1|[0-9]{3}) (?P<bytes_read>\+?[0-9]+) ",
        r"(?P<captured_request_cookie>\S+) (?P<captured_response_cookie>\S+) ",
        r"(?P<termination_state>[A-Za-z0-9_-]{4}) ",
        CONNECTION_COUNTERS,
        " ",
        r"(?:\{(?P<captured_request_headers>.*?)\} )?",
        r"(?:\{(?P<captured_response_headers>.*?)\} )?",
        r#""(?P<http_request>.+)""#,
        r"(?: (?P<ssl_cipher>[A-Za-z0-9_-]+)/(?P<ssl_version>[A-Za-z0-9_.]+))?$",
    ])
});

static HTTP_FIELDS: &[Field] = &[
    field!(client_ip, Text),
    field!(client_port, Integer),
    field!(accept_date, Timestamp),
    field!(frontend_name, Text),
    field!(backend_name, Text),
    field!(server_name, Text),
    field!(tq, Integer),
    field!(tw, Integer),
    field!(tc, Integer),
    field!(tr, Integer),
    field!(tt, Integer),
    field!(http_status_code, Integer),
    field!(bytes_read, Integer),
    field!(captured_request_cookie, Text),
    field!(captured_response_cookie, Text),
    field!(termination_state, Text),
    field!(act_conn, Integer),
    field!(fe_conn, Integer),
    field!(be_conn, Integer),
    field!(srv_conn, Integer),
    field!(retries, Integer),
    field!(server_queue, Integer),
    field!(backend_queue, Integer),
    field!(captured_request_headers, HeaderList),
    field!(captured_response_headers, HeaderList),
    field!(http_request, Request),
    field!(ssl_cipher, Text),
    field!(ssl_version, Text),
];

pub static HTTP_LOG: FormatDefinition = FormatDefinition {
    kind: FormatKind::Http,
    pattern: &HTTP_PATTERN,
    fields: HTTP_FIELDS,
    hooks: &[Hook::HttpRequest, Hook::Timestamp, Hook::HeaderList],
};
