use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::model::{FormatKind, LogRecord, ParseError};

/// Forces the wrapped counters onto their own cache line so threads bumping
/// different groups do not contend.
#[repr(align(64))]
#[derive(Debug, Default)]
pub struct CacheAligned<T>(pub T);

/// Successfully parsed lines per format
#[derive(Debug, Default)]
pub struct FormatCounters {
    pub http: AtomicU64,
    pub tcp: AtomicU64,
    pub error: AtomicU64,
}

/// Rejected lines per failure kind
#[derive(Debug, Default)]
pub struct ErrorCounters {
    pub unidentified: AtomicU64,
    pub no_match: AtomicU64,
    pub field_decode: AtomicU64,
    pub too_large: AtomicU64,
    pub non_utf8: AtomicU64,
}

/// Outcome counters for a stream of parsed lines.
///
/// The parser never touches these; a line source that wants to count what it
/// fed in calls [`ParseMetrics::record`] with each result. All updates use
/// `Ordering::Relaxed`, so a snapshot taken while other threads are recording
/// may be off by the lines in flight.
#[derive(Debug, Default)]
pub struct ParseMetrics {
    pub formats: CacheAligned<FormatCounters>,
    pub errors: CacheAligned<ErrorCounters>,
}

impl ParseMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&self, result: &Result<LogRecord, ParseError>) {
        match result {
            Ok(record) => self.record_parse(record.format()),
            Err(e) => self.record_error(e),
        }
    }

    #[inline]
    pub fn record_parse(&self, format: FormatKind) {
        let counter = match format {
            FormatKind::Http => &self.formats.0.http,
            FormatKind::Tcp => &self.formats.0.tcp,
            FormatKind::Error => &self.formats.0.error,
            FormatKind::Unknown => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_error(&self, error: &ParseError) {
        let counter = match error {
            ParseError::UnidentifiedFormat => &self.errors.0.unidentified,
            ParseError::NoPatternMatch { .. } => &self.errors.0.no_match,
            ParseError::FieldDecode { .. } => &self.errors.0.field_decode,
            ParseError::LineTooLarge(..) => &self.errors.0.too_large,
            ParseError::NonUtf8 => &self.errors.0.non_utf8,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let formats = &self.formats.0;
        let errors = &self.errors.0;

        let http_lines = formats.http.load(Ordering::Relaxed);
        let tcp_lines = formats.tcp.load(Ordering::Relaxed);
        let error_lines = formats.error.load(Ordering::Relaxed);

        let unidentified = errors.unidentified.load(Ordering::Relaxed);
        let no_match = errors.no_match.load(Ordering::Relaxed);
        let field_decode = errors.field_decode.load(Ordering::Relaxed);
        let too_large = errors.too_large.load(Ordering::Relaxed);
        let non_utf8 = errors.non_utf8.load(Ordering::Relaxed);

        let total_parsed = http_lines + tcp_lines + error_lines;
        let total_rejected = unidentified + no_match + field_decode + too_large + non_utf8;
        let total = total_parsed + total_rejected;

        MetricsSnapshot {
            http_lines,
            tcp_lines,
            error_lines,
            unidentified,
            no_match,
            field_decode,
            too_large,
            non_utf8,
            total_parsed,
            total_rejected,
            rejection_rate: if total > 0 {
                total_rejected as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}

/// Point-in-time copy of [`ParseMetrics`].
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub http_lines: u64,
    pub tcp_lines: u64,
    pub error_lines: u64,
    pub unidentified: u64,
    pub no_match: u64,
    pub field_decode: u64,
    pub too_large: u64,
    pub non_utf8: u64,
    pub total_parsed: u64,
    pub total_rejected: u64,
    /// Rejected / all recorded lines (0.0 - 1.0)
    pub rejection_rate: f64,
}
