use crate::error::FilterError;
use crate::filter::FilterSpec;
use crate::parser::{Level, ParsedLine, parse_line};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Counts and matching lines produced by one pass over a log file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Records with a valid level, whether or not they passed the filters
    pub valid_lines_scanned: usize,
    /// Records that also passed the filters
    pub lines_written: usize,
    /// Lines without exactly four fields, including blank lines
    pub malformed_lines: usize,
    /// Well-formed lines whose level is not INFO, WARN or ERROR
    pub invalid_level_lines: usize,
    /// Re-serialized matching records, in input order
    pub output_lines: Vec<String>,
}

/// Runs every line from `reader` through parsing, level validation and the
/// filters, collecting the matching records in order.
pub fn filter_lines<R: BufRead>(reader: R, filter: &FilterSpec) -> io::Result<FilterOutcome> {
    let mut outcome = FilterOutcome::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;

        let record = match parse_line(&line) {
            ParsedLine::Record(record) => record,
            ParsedLine::NotARecord => {
                debug!(line_number, "skipping line without four fields");
                outcome.malformed_lines += 1;
                continue;
            }
        };

        let level = match record.level.parse::<Level>() {
            Ok(level) => level,
            Err(err) => {
                debug!(line_number, %err, "skipping line with unknown level");
                outcome.invalid_level_lines += 1;
                continue;
            }
        };

        outcome.valid_lines_scanned += 1;

        if filter.matches_record(level, &record) {
            outcome.output_lines.push(record.to_output_line(level));
            outcome.lines_written += 1;
        }
    }

    Ok(outcome)
}

/// Writes each line followed by a newline, replacing any existing file
pub fn write_output(path: &Path, lines: &[String]) -> Result<(), FilterError> {
    let to_error = |source| FilterError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}").map_err(to_error)?;
    }
    writer.flush().map_err(to_error)
}

/// Filters `input` into `output`.
///
/// A missing input stops the run before the output file is touched.
pub fn run_filter(
    input: &Path,
    output: &Path,
    filter: &FilterSpec,
) -> Result<FilterOutcome, FilterError> {
    if !input.exists() {
        return Err(FilterError::MissingInput {
            path: input.to_path_buf(),
        });
    }

    let to_error = |source| FilterError::Read {
        path: input.to_path_buf(),
        source,
    };
    let file = File::open(input).map_err(to_error)?;
    let outcome = filter_lines(BufReader::new(file), filter).map_err(to_error)?;

    write_output(output, &outcome.output_lines)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        valid_lines_scanned = outcome.valid_lines_scanned,
        lines_written = outcome.lines_written,
        malformed_lines = outcome.malformed_lines,
        invalid_level_lines = outcome.invalid_level_lines,
        "filter run finished"
    );

    Ok(outcome)
}
