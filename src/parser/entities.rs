use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Levels a record may carry to be counted and filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Upper-case name as written to the output file
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a level string is not one of INFO, WARN or ERROR
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level '{0}'. Valid levels are: INFO, WARN, ERROR")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Level::Info),
            "WARN" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// One `timestamp | level | service | message` line split into its fields.
///
/// Fields keep the case they had in the source line; only surrounding
/// whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Opaque timestamp text, not validated as a date
    pub timestamp: String,
    /// Level as written in the source (e.g. "info", "ERROR")
    pub level: String,
    /// Service name, compared case-sensitively
    pub service: String,
    /// Free-form message text
    pub message: String,
}

impl Record {
    pub fn new(
        timestamp: impl Into<String>,
        level: impl Into<String>,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            service: service.into(),
            message: message.into(),
        }
    }

    /// Re-serialize the record for the output file.
    ///
    /// `level` is the parsed form of `self.level` and is written upper-cased.
    pub fn to_output_line(&self, level: Level) -> String {
        format!(
            "{} | {} | {} | {}",
            self.timestamp, level, self.service, self.message
        )
    }
}

/// Result of parsing a single raw line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// The line had exactly four pipe-separated fields
    Record(Record),
    /// Empty or malformed line; callers skip it silently
    NotARecord,
}
