use std::collections::HashMap;

use regex::Regex;

/// Capture-group name → matched text for one line.
pub type NamedCaptures<'p, 'l> = HashMap<&'p str, &'l str>;

/// A compiled pattern whose results are read back by group name.
#[derive(Debug, Clone)]
pub struct NamedPattern {
    regex: Regex,
}

impl NamedPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Match `line` and collect the named groups.
    ///
    /// Returns an empty map when the pattern does not match. Unnamed groups are
    /// never reported. A named group that did not take part in the match (for
    /// example inside an optional group that was skipped) is left out, while
    /// one that matched the empty string is reported as `""`.
    pub fn match_named<'p, 'l>(&'p self, line: &'l str) -> NamedCaptures<'p, 'l> {
        let Some(caps) = self.regex.captures(line) else {
            return HashMap::new();
        };

        self.regex
            .capture_names()
            .flatten()
            .filter_map(|name| caps.name(name).map(|m| (name, m.as_str())))
            .collect()
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all() {
        let re = NamedPattern::new(r"(?P<first_name>\w+) (?P<last_name>\w+)").unwrap();
        let matched = re.match_named("John Wayne");

        assert_eq!(matched.len(), 2);
        assert_eq!(matched["first_name"], "John");
        assert_eq!(matched["last_name"], "Wayne");
    }

    #[test]
    fn test_no_match_is_empty() {
        let re = NamedPattern::new(r"(?P<first_name>\w+) (?P<last_name>\w+)").unwrap();
        assert!(re.match_named("JohnWayne").is_empty());
        assert!(!re.is_match("JohnWayne"));
    }

    #[test]
    fn test_unnamed_groups_excluded() {
        let re = NamedPattern::new(r"((?P<first_name>\w+)(\s)(?P<last_name>\w+))").unwrap();
        let matched = re.match_named("John Wayne");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_empty_group_is_present() {
        let re = NamedPattern::new(r"(?P<first_name>\w+) ?(?P<last_name>\w*)").unwrap();
        let matched = re.match_named("John");

        assert_eq!(matched.len(), 2);
        assert_eq!(matched["first_name"], "John");
        assert_eq!(matched.get("last_name"), Some(&""));
    }

    #[test]
    fn test_skipped_optional_group_is_absent() {
        let re = NamedPattern::new(r"(?P<first_name>\w+)(?: (?P<last_name>\w+))?").unwrap();
        let matched = re.match_named("John");

        assert_eq!(matched.len(), 1);
        assert_eq!(matched["first_name"], "John");
        assert!(!matched.contains_key("last_name"));
    }

    #[test]
    fn test_matching_twice_is_identical() {
        let re = NamedPattern::new(r"(?P<first_name>\w+)(?: (?P<last_name>\w+))?").unwrap();
        let first = re.match_named("John Wayne");
        let second = re.match_named("John Wayne");
        assert_eq!(first, second);
    }
}
