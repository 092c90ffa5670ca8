//! Bulk load/save of certificate collections against the fixed CSV schema.
//!
//! UTF-8, comma-separated, one header row with the five [`COLUMNS`] labels,
//! one record per subsequent row. Cells containing a comma or a quote are
//! quoted, embedded quotes doubled. Any malformed row aborts the whole load;
//! no partial collection is ever returned.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::certificate::{COLUMNS, Certificate, ValidationError};
use crate::collection::CertificateCollection;

/// A load or save failed. Row-level variants carry the 1-based line number.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("missing header row")]
    MissingHeader,
    #[error("header mismatch: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("line {line}: expected 5 cells, found {found}")]
    WrongCellCount { line: usize, found: usize },
    #[error("line {line}: column '{column}': cannot parse '{value}'")]
    ParseCell {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("line {line}: unterminated quoted cell")]
    UnterminatedQuote { line: usize },
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

/// Load a collection from `path`. The header must match the schema exactly;
/// one malformed row fails the entire load.
pub fn load(path: &Path) -> Result<CertificateCollection, StoreError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut lines = contents.lines().enumerate();

    let Some((_, header)) = lines.next() else {
        return Err(StoreError::MissingHeader);
    };
    let found = split_row(header, 1)?;
    let expected: Vec<String> = COLUMNS.iter().map(|label| (*label).to_string()).collect();
    if found != expected {
        return Err(StoreError::HeaderMismatch { expected, found });
    }

    let mut collection = CertificateCollection::new();
    for (index, line) in lines {
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;
        let cells = split_row(line, line_number)?;
        if cells.len() != COLUMNS.len() {
            return Err(StoreError::WrongCellCount {
                line: line_number,
                found: cells.len(),
            });
        }
        let number: i64 = cells[0].parse().map_err(|_| StoreError::ParseCell {
            line: line_number,
            column: COLUMNS[0],
            value: cells[0].clone(),
        })?;
        let stipend: f64 = cells[3].parse().map_err(|_| StoreError::ParseCell {
            line: line_number,
            column: COLUMNS[3],
            value: cells[3].clone(),
        })?;
        let certificate = Certificate::new(number, &cells[1], &cells[2], stipend, &cells[4])
            .map_err(|source| StoreError::Invalid {
                line: line_number,
                source,
            })?;
        collection.add(certificate);
    }

    debug!(records = collection.len(), path = %path.display(), "collection loaded");
    Ok(collection)
}

/// Save a collection to `path`, overwriting any existing file: header row
/// plus one row per record in collection order.
pub fn save(path: &Path, collection: &CertificateCollection) -> Result<(), StoreError> {
    let mut buf = render_row(&COLUMNS.map(String::from));
    buf.push('\n');
    for certificate in collection {
        buf.push_str(&render_row(&certificate.to_row()));
        buf.push('\n');
    }
    fs::write(path, buf).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(records = collection.len(), path = %path.display(), "collection saved");
    Ok(())
}

/// Split one CSV line into cells, honoring quoted cells with doubled quotes.
fn split_row(line: &str, line_number: usize) -> Result<Vec<String>, StoreError> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => cells.push(std::mem::take(&mut cell)),
                _ => cell.push(ch),
            }
        }
    }
    if in_quotes {
        return Err(StoreError::UnterminatedQuote { line: line_number });
    }
    cells.push(cell);
    Ok(cells)
}

fn render_row(cells: &[String; 5]) -> String {
    cells
        .iter()
        .map(|cell| quote_cell(cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a cell when it contains a delimiter, quote, or line break.
fn quote_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
