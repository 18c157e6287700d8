use super::model::FormatKind;
use super::traits::FormatDetector;

/// Guess the format from the line's token layout without running a pattern.
///
/// 1. 5th space-separated token splits into 5 on `/` → HTTP timers, 3 → TCP timers
/// 2. otherwise a `/` in the 3rd token → `frontend/bind:` of an Error line
/// 3. otherwise Unknown
///
/// A wrong guess is caught by the full pattern of the guessed format, so the
/// worst outcome is a rejected line, never a record built from the wrong shape.
pub fn identify_format(line: &str) -> FormatKind {
    let parts: Vec<&str> = line.split(' ').collect();

    if let Some(timers) = parts.get(4) {
        match timers.split('/').count() {
            5 => return FormatKind::Http,
            3 => return FormatKind::Tcp,
            _ => {}
        }
    }

    if parts.get(2).is_some_and(|part| part.contains('/')) {
        return FormatKind::Error;
    }

    FormatKind::Unknown
}

/// [`FormatDetector`] backed by [`identify_format`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureDetector;

impl FormatDetector for SignatureDetector {
    fn detect(&self, line: &str) -> FormatKind {
        identify_format(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_http() {
        let line = r#"192.168.9.185:56276 [29/May/2015:10:36:47.766] Service1~ Service1/host-1 2/0/0/10/12 200 423 - - ---- 282/36/0/0/0 0/0 "GET / HTTP/1.1""#;
        assert_eq!(identify_format(line), FormatKind::Http);
    }

    #[test]
    fn test_identify_tcp() {
        let line = "192.168.9.185:56276 [29/May/2015:10:36:47.766] Service1 Service1/host-1 2/0/0 423 -- 282/36/0/0/0 0/0";
        assert_eq!(identify_format(line), FormatKind::Tcp);
    }

    #[test]
    fn test_identify_error() {
        let line = "192.168.9.185:56276 [29/May/2015:10:36:47.766] Service1/bind-1: We have a problem here";
        assert_eq!(identify_format(line), FormatKind::Error);
    }

    #[test]
    fn test_identify_short_error() {
        let line = "10.0.0.1:443 [29/May/2015:10:36:47.766] fe/bind: oops";
        assert_eq!(identify_format(line), FormatKind::Error);
    }

    #[test]
    fn test_identify_unknown() {
        assert_eq!(identify_format("Not a proxy log message"), FormatKind::Unknown);
        assert_eq!(identify_format(""), FormatKind::Unknown);
        assert_eq!(identify_format("a b"), FormatKind::Unknown);
    }

    #[test]
    fn test_double_space_shifts_tokens() {
        // single-space split: the empty token moves the timers to index 5
        let line = "192.168.9.185:56276  [29/May/2015:10:36:47.766] Service1 Service1/host-1 2/0/0 423 -- 282/36/0/0/0 0/0";
        assert_eq!(identify_format(line), FormatKind::Error);
    }

    #[test]
    fn test_detector_trait() {
        let detector: &dyn FormatDetector = &SignatureDetector;
        assert_eq!(detector.detect("a b c/d"), FormatKind::Error);
    }
}
