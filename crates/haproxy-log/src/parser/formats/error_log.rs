use once_cell::sync::Lazy;

use super::{compile, FormatDefinition, CLIENT_PREFIX};
use crate::parser::assemble::{field, Field};
use crate::parser::coerce::Hook;
use crate::parser::matcher::NamedPattern;
use crate::parser::model::FormatKind;

/// Connection errors: `%ci:%cp [%t] %ft/%b: message`, where the name after
/// the slash is the listener (bind) that accepted the connection.
pub(crate) static ERROR_PATTERN: Lazy<NamedPattern> = Lazy::new(|| {
    compile(&[
        CLIENT_PREFIX,
        r"(?P<frontend_name>[A-Za-z0-9_.-]+)/(?P<bind_name>[A-Za-z0-9_.-]+): ",
        r"(?P<message>.*)$",
    ])
});

static ERROR_FIELDS: &[Field] = &[
    field!(client_ip, Text),
    field!(client_port, Integer),
    field!(accept_date, Timestamp),
    field!(frontend_name, Text),
    field!(bind_name, Text),
    field!(message, Text),
];

pub static ERROR_LOG: FormatDefinition = FormatDefinition {
    kind: FormatKind::Error,
    pattern: &ERROR_PATTERN,
    fields: ERROR_FIELDS,
    hooks: &[Hook::Timestamp],
};
