//! HAProxy log line parsing
//!
//! Turns one raw line from HAProxy's HTTP, TCP or error log into a typed
//! [`LogRecord`].
//!
//! # Architecture
//!
//! - `detector.rs`: cheap token-layout guess at the format
//! - `matcher.rs`: named-capture pattern matching
//! - `formats/`: the pattern, field table and hooks of each format
//! - `coerce.rs`: captured text → typed values
//! - `assemble.rs`: typed values → record
//! - `metrics.rs`: caller-owned outcome counters
//!
//! Parsing is stateless. The compiled patterns are built once on first use
//! and only read afterwards, so a parser can be shared across threads.

pub mod assemble;
pub mod coerce;
pub mod detector;
pub mod formats;
pub mod matcher;
pub mod metrics;
pub mod model;
pub mod traits;
mod serde_utils;

use std::fmt;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::conf::ParserConfig;

// Re-export commonly used types
pub use detector::{identify_format, SignatureDetector};
pub use metrics::ParseMetrics;
pub use model::{FormatKind, HttpRequest, LogRecord, ParseError};
pub use traits::{FormatDetector, LogParser};

static DEFAULT_PARSER: Lazy<HaproxyLogParser> = Lazy::new(HaproxyLogParser::default);

/// Parse one line with the default configuration.
pub fn parse_line(raw: &str) -> Result<LogRecord, ParseError> {
    DEFAULT_PARSER.parse_line(raw)
}

/// Parse one line of bytes with the default configuration.
pub fn parse_bytes(raw: &[u8]) -> Result<LogRecord, ParseError> {
    DEFAULT_PARSER.parse(raw)
}

/// Identify → match → assemble.
pub struct HaproxyLogParser {
    config: ParserConfig,
    detector: Box<dyn FormatDetector>,
}

impl HaproxyLogParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            detector: Box::new(SignatureDetector),
        }
    }

    /// Replace the format guess. The guessed format's full pattern still has
    /// to match, so a bad detector can only cause rejections.
    pub fn with_detector(mut self, detector: impl FormatDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse_line(&self, raw: &str) -> Result<LogRecord, ParseError> {
        let line = self.prepare(raw)?;

        let format = self.detector.detect(line);
        debug!("Identified {} log line", format);

        self.parse_prepared(line, format)
    }

    /// Parse `raw` as `format`, skipping identification.
    pub fn parse_as(&self, raw: &str, format: FormatKind) -> Result<LogRecord, ParseError> {
        let line = self.prepare(raw)?;
        self.parse_prepared(line, format)
    }

    fn prepare<'a>(&self, raw: &'a str) -> Result<&'a str, ParseError> {
        let line = if self.config.trim_line_endings {
            raw.trim_end_matches(['\r', '\n'])
        } else {
            raw
        };

        if line.len() > self.config.max_line_size {
            return Err(ParseError::LineTooLarge(line.len(), self.config.max_line_size));
        }
        Ok(line)
    }

    fn parse_prepared(&self, line: &str, format: FormatKind) -> Result<LogRecord, ParseError> {
        let definition = formats::definition(format).ok_or(ParseError::UnidentifiedFormat)?;

        let captures = definition.pattern().match_named(line);
        if captures.is_empty() {
            debug!("{} pattern did not match line", format);
            return Err(ParseError::NoPatternMatch {
                format,
                raw: line.to_string(),
            });
        }

        assemble::assemble(definition, line, &captures, &self.config).inspect_err(|e| {
            debug!("Discarding {} log line: {}", format, e);
        })
    }
}

impl fmt::Debug for HaproxyLogParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HaproxyLogParser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for HaproxyLogParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl LogParser for HaproxyLogParser {
    fn parse(&self, raw: &[u8]) -> Result<LogRecord, ParseError> {
        let text = std::str::from_utf8(raw).map_err(|_| ParseError::NonUtf8)?;
        self.parse_line(text)
    }
}
