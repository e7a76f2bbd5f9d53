//! Parser for the delimited awards dataset.
//!
//! Expected layout (header row required, `;` by default):
//!
//! ```text
//! year;title;studios;producers;winner
//! 1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
//! 1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
//! ```
//!
//! Ingestion is best-effort: a row that cannot be turned into an
//! [`AwardRecord`] is skipped and listed in [`LoadReport::skipped`] instead
//! of failing the whole load.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Field delimiter used by the published dataset
pub const DEFAULT_DELIMITER: u8 = b';';

/// One row as it appears in the file, before validation.
///
/// Every column but `year` is optional; a trailing empty `winner` cell is
/// how the dataset marks a non-winner.
#[derive(Debug, Deserialize)]
struct RawAwardRow {
    year: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    studios: String,
    #[serde(default)]
    producers: String,
    #[serde(default)]
    winner: String,
}

/// A row the loader refused, with its 1-based line number in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Outcome of a load: the usable records plus every row that was skipped.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<AwardRecord>,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    /// True when no row had to be skipped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, line: u64, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::debug!(line, reason = %reason, "Skipping malformed row");
        self.skipped.push(SkippedRow { line, reason });
    }
}

/// Validate a user-supplied delimiter.
///
/// The reader works on bytes, so only single-byte ASCII characters that are
/// not line terminators or the quote character can delimit fields.
pub fn parse_delimiter(c: char) -> Result<u8> {
    match c {
        '\n' | '\r' | '"' => Err(DataLoadError::InvalidDelimiter(c)),
        c if c.is_ascii() => Ok(c as u8),
        _ => Err(DataLoadError::InvalidDelimiter(c)),
    }
}

/// Parse a year cell such as "1980"
pub fn parse_year(s: &str) -> Result<Year> {
    s.trim().parse().map_err(|_| DataLoadError::InvalidValue {
        field: "year".to_string(),
        value: s.to_string(),
    })
}

/// Parse the winner flag: "yes" in any case is a win, anything else is not
pub fn parse_winner(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("yes")
}

/// Parse an awards dataset from any reader.
///
/// ## Algorithm
/// 1. Read the header row, trimming and lowercasing each name so that
///    `Year` and ` year ` both bind to the `year` column
/// 2. For each following row:
///    a. Skip blank rows silently, pad short rows with empty cells
///    b. Decode the row by header name, skip it if that fails
///    c. Validate the year, skip the row if it is not a number
///    d. Convert the winner flag
/// 3. An I/O failure mid-stream ends the parse; what was read so far is kept
///
/// This never returns an error: all problems land in the report.
pub fn parse_awards<R: Read>(reader: R, delimiter: u8) -> LoadReport {
    let mut report = LoadReport::default();

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: StringRecord = match reader.headers() {
        Ok(headers) => headers
            .iter()
            .map(|h| h.trim().to_ascii_lowercase())
            .collect(),
        Err(e) => {
            report.skip(1, format!("Unreadable header row: {}", e));
            return report;
        }
    };

    for result in reader.records() {
        let mut record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                let fatal = e.is_io_error();
                report.skip(line, e.to_string());
                if fatal {
                    break;
                }
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        // Short rows are padded so missing trailing cells decode as empty
        while record.len() < headers.len() {
            record.push_field("");
        }

        let row: RawAwardRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                report.skip(line, format!("Undecodable row: {}", e));
                continue;
            }
        };

        let year = match parse_year(&row.year) {
            Ok(year) => year,
            Err(e) => {
                report.skip(line, e.to_string());
                continue;
            }
        };

        report.records.push(AwardRecord {
            year,
            title: row.title,
            studios: row.studios,
            producer: row.producers,
            winner: parse_winner(&row.winner),
        });
    }

    report
}

/// Parse an awards dataset file.
///
/// Opening the file is the only step that can fail; everything after that
/// follows [`parse_awards`].
pub fn parse_awards_file(path: &Path, delimiter: u8) -> Result<LoadReport> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    Ok(parse_awards(file, delimiter))
}
