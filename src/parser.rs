mod entities;

pub use entities::{Level, ParsedLine, Record, UnknownLevel};

/// Character separating the four fields of a log line
pub const FIELD_SEPARATOR: char = '|';

/// Parses one raw line into a [`Record`].
///
/// The line is trimmed, split on `|`, and each field trimmed on its own.
/// Anything other than exactly four fields, or a blank line, yields
/// [`ParsedLine::NotARecord`].
pub fn parse_line(raw_line: &str) -> ParsedLine {
    let line = raw_line.trim();
    if line.is_empty() {
        return ParsedLine::NotARecord;
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    match fields.as_slice() {
        [timestamp, level, service, message] => {
            ParsedLine::Record(Record::new(*timestamp, *level, *service, *message))
        }
        _ => ParsedLine::NotARecord,
    }
}

/// Returns true if the level, upper-cased, is INFO, WARN or ERROR
pub fn is_valid_level(level: &str) -> bool {
    level.parse::<Level>().is_ok()
}
