//! Record assembly: captured groups → [`LogRecord`].
//!
//! Every format lists its fields explicitly as capture-group name plus a typed
//! setter. The setter's variant decides which coercion runs, so there is no
//! run-time type inspection and every field can be exercised on its own.

use chrono::{DateTime, Utc};
use tracing::trace;

use super::coerce::{self, CoerceError, Hook};
use super::formats::FormatDefinition;
use super::matcher::NamedCaptures;
use super::model::{HttpRequest, LogRecord, ParseError};
use crate::conf::ParserConfig;

/// Typed write access to one [`LogRecord`] field.
#[derive(Clone, Copy)]
pub enum Setter {
    Text(fn(&mut LogRecord, String)),
    Integer(fn(&mut LogRecord, i64)),
    Timestamp(fn(&mut LogRecord, Option<DateTime<Utc>>)),
    Request(fn(&mut LogRecord, HttpRequest)),
    HeaderList(fn(&mut LogRecord, Vec<String>)),
}

/// A capture-group name bound to the record field it fills.
#[derive(Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub setter: Setter,
}

impl Field {
    /// Coerce `value` and store it on `record`.
    pub fn apply(
        &self,
        record: &mut LogRecord,
        value: &str,
        hooks: &[Hook],
        config: &ParserConfig,
    ) -> Result<(), CoerceError> {
        match self.setter {
            Setter::Text(set) => set(record, value.to_string()),
            Setter::Integer(set) => set(record, coerce::weak_integer(value)?),
            Setter::Timestamp(set) => {
                coerce::require(hooks, Hook::Timestamp)?;
                let ts = if config.strict_timestamps {
                    Some(coerce::timestamp(value)?)
                } else {
                    coerce::lenient_timestamp(value)
                };
                set(record, ts)
            }
            Setter::Request(set) => {
                coerce::require(hooks, Hook::HttpRequest)?;
                set(record, coerce::http_request(value)?)
            }
            Setter::HeaderList(set) => {
                coerce::require(hooks, Hook::HeaderList)?;
                set(record, coerce::header_list(value))
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.setter {
            Setter::Text(_) => "text",
            Setter::Integer(_) => "integer",
            Setter::Timestamp(_) => "timestamp",
            Setter::Request(_) => "request",
            Setter::HeaderList(_) => "header_list",
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

/// `field!(client_port, Integer)` binds the `client_port` group to
/// `LogRecord::client_port`.
macro_rules! field {
    ($name:ident, Request) => {
        $crate::parser::assemble::Field {
            name: stringify!($name),
            setter: $crate::parser::assemble::Setter::Request(|r, v| r.$name = Some(v)),
        }
    };
    ($name:ident, $kind:ident) => {
        $crate::parser::assemble::Field {
            name: stringify!($name),
            setter: $crate::parser::assemble::Setter::$kind(|r, v| r.$name = v),
        }
    };
}
pub(crate) use field;

/// Build a record from the groups `definition`'s pattern captured.
///
/// Fields without a captured group keep their zero value. Any coercion
/// failure aborts the whole record.
pub fn assemble(
    definition: &FormatDefinition,
    raw: &str,
    captures: &NamedCaptures<'_, '_>,
    config: &ParserConfig,
) -> Result<LogRecord, ParseError> {
    let mut record = LogRecord::new(raw, definition.kind);

    for field in definition.fields {
        let Some(value) = captures.get(field.name) else {
            trace!("{} field {} not captured", definition.kind, field.name);
            continue;
        };

        field
            .apply(&mut record, value, definition.hooks, config)
            .map_err(|source| ParseError::FieldDecode {
                field: field.name,
                source,
            })?;
    }

    Ok(record)
}
