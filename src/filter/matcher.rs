use crate::parser::{Level, Record, is_valid_level};
use tracing::warn;

/// Checks a record's level and service against the active filters.
///
/// `level` and `level_filter` are expected to be upper-cased already.
/// `None` filters are ignored; present filters are combined with AND.
pub fn matches(
    level: &str,
    service: &str,
    level_filter: Option<&str>,
    service_filter: Option<&str>,
) -> bool {
    if level_filter.is_some_and(|wanted| level != wanted) {
        return false;
    }
    if service_filter.is_some_and(|wanted| service != wanted) {
        return false;
    }
    true
}

/// The level and service filters chosen for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Desired level, upper-cased
    level: Option<String>,
    /// Desired service, matched exactly
    service: Option<String>,
}

impl FilterSpec {
    /// Create a filter; the level is upper-cased, the service is kept as given
    pub fn new(level: Option<&str>, service: Option<&str>) -> Self {
        Self {
            level: level.map(str::to_uppercase),
            service: service.map(str::to_string),
        }
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Level filter value if it can never match a valid record
    pub fn unknown_level(&self) -> Option<&str> {
        self.level().filter(|level| !is_valid_level(level))
    }

    /// Match a record whose level has already been parsed
    pub fn matches_record(&self, level: Level, record: &Record) -> bool {
        matches(level.as_str(), &record.service, self.level(), self.service())
    }
}

/// Warn about a level filter that no record can satisfy.
///
/// The run still proceeds and simply writes no lines.
pub fn warn_unknown_level(filter: &FilterSpec) {
    if let Some(level) = filter.unknown_level() {
        warn!(
            filter_level = level,
            "unknown log level filter, valid levels are INFO, WARN, ERROR; no lines will match"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_match_everything() {
        assert!(matches("INFO", "auth", None, None));
        assert!(matches("ERROR", "", None, None));
    }

    #[test]
    fn test_level_filter_excludes() {
        assert!(!matches("ERROR", "billing", Some("WARN"), None));
        assert!(matches("WARN", "billing", Some("WARN"), None));
    }

    #[test]
    fn test_service_filter_is_case_sensitive() {
        assert!(!matches("ERROR", "billing", None, Some("auth")));
        assert!(!matches("ERROR", "billing", None, Some("Billing")));
        assert!(matches("ERROR", "billing", None, Some("billing")));
    }

    #[test]
    fn test_both_filters_must_hold() {
        assert!(matches("ERROR", "billing", Some("ERROR"), Some("billing")));
        assert!(!matches("ERROR", "auth", Some("ERROR"), Some("billing")));
        assert!(!matches("INFO", "billing", Some("ERROR"), Some("billing")));
    }

    #[test]
    fn test_spec_upper_cases_level_only() {
        let filter = FilterSpec::new(Some("error"), Some("Billing"));
        assert_eq!(filter.level(), Some("ERROR"));
        assert_eq!(filter.service(), Some("Billing"));
    }

    #[test]
    fn test_empty_string_is_an_active_filter() {
        let filter = FilterSpec::new(None, Some(""));
        let named = Record::new("ts", "INFO", "auth", "m");
        let unnamed = Record::new("ts", "INFO", "", "m");
        assert!(!filter.matches_record(Level::Info, &named));
        assert!(filter.matches_record(Level::Info, &unnamed));
    }

    #[test]
    fn test_matches_record_uses_parsed_level() {
        let filter = FilterSpec::new(Some("warn"), None);
        let record = Record::new("ts", "Warn", "auth", "m");
        assert!(filter.matches_record(Level::Warn, &record));
        assert!(!filter.matches_record(Level::Info, &record));
    }

    #[test]
    fn test_unknown_level() {
        assert_eq!(
            FilterSpec::new(Some("debug"), None).unknown_level(),
            Some("DEBUG")
        );
        assert_eq!(FilterSpec::new(Some("info"), None).unknown_level(), None);
        assert_eq!(FilterSpec::default().unknown_level(), None);
    }
}
