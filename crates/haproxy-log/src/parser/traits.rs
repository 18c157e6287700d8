pub use super::model::{FormatKind, HttpRequest, LogRecord, ParseError};

pub trait FormatDetector: Send + Sync {
    /// cheap guess at the format of one line
    fn detect(&self, line: &str) -> FormatKind;
}

pub trait LogParser: Send + Sync {
    /// parse one raw log line (line ending already stripped) into a record
    fn parse(&self, raw: &[u8]) -> Result<LogRecord, ParseError>;
}
