//! The certificate record and its field-level validation.
//!
//! Every field is validated on construction and on every setter through the
//! same per-field validator, so a record can never be observed in an invalid
//! state: a failed set leaves the field untouched.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// On-disk column labels, in schema order. The labels come from the original
/// data files and are a fixed schema, not translatable UI text.
pub const COLUMNS: [&str; 5] = [
    "№",
    "дата",
    "ФИО студента",
    "размер стипендии",
    "куда выдается справка",
];

/// Date rendering used everywhere: in files, in summaries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A field violated its invariant. The record (or the file row) that carried
/// the value is rejected; nothing is partially updated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("number must be a positive integer (got {0})")]
    NonPositiveNumber(i64),
    #[error("date must be a valid YYYY-MM-DD date (got '{0}')")]
    InvalidDate(String),
    #[error("full name must be non-empty")]
    EmptyFullName,
    #[error("full name must not contain line breaks")]
    LineBreakInFullName,
    #[error("stipend must be a non-negative amount (got {0})")]
    NegativeStipend(f64),
    #[error("issue destination must be non-empty")]
    EmptyDestination,
    #[error("issue destination must not contain line breaks")]
    LineBreakInDestination,
}

/// An issued stipend certificate.
///
/// Fields are private: reads go through getters, writes through validating
/// setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    number: i64,
    date: NaiveDate,
    full_name: String,
    stipend: f64,
    destination: String,
}

impl Certificate {
    /// Build a record, validating every field. The date is accepted as text
    /// in `YYYY-MM-DD` form.
    pub fn new(
        number: i64,
        date: &str,
        full_name: &str,
        stipend: f64,
        destination: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            number: validate_number(number)?,
            date: validate_date(date)?,
            full_name: validate_full_name(full_name)?,
            stipend: validate_stipend(stipend)?,
            destination: validate_destination(destination)?,
        })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn stipend(&self) -> f64 {
        self.stipend
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn set_number(&mut self, number: i64) -> Result<(), ValidationError> {
        self.number = validate_number(number)?;
        Ok(())
    }

    pub fn set_date(&mut self, date: &str) -> Result<(), ValidationError> {
        self.date = validate_date(date)?;
        Ok(())
    }

    pub fn set_full_name(&mut self, full_name: &str) -> Result<(), ValidationError> {
        self.full_name = validate_full_name(full_name)?;
        Ok(())
    }

    pub fn set_stipend(&mut self, stipend: f64) -> Result<(), ValidationError> {
        self.stipend = validate_stipend(stipend)?;
        Ok(())
    }

    pub fn set_destination(&mut self, destination: &str) -> Result<(), ValidationError> {
        self.destination = validate_destination(destination)?;
        Ok(())
    }

    /// Whether the stipend strictly exceeds `threshold`.
    pub fn has_high_stipend(&self, threshold: f64) -> bool {
        self.stipend > threshold
    }

    /// Render the record as CSV cells in schema order ([`COLUMNS`]).
    pub fn to_row(&self) -> [String; 5] {
        [
            self.number.to_string(),
            self.date.format(DATE_FORMAT).to_string(),
            self.full_name.clone(),
            self.stipend.to_string(),
            self.destination.clone(),
        ]
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "certificate № {} dated {}: '{}', stipend {}, issued to '{}'",
            self.number,
            self.date.format(DATE_FORMAT),
            self.full_name,
            self.stipend,
            self.destination
        )
    }
}

fn validate_number(number: i64) -> Result<i64, ValidationError> {
    if number <= 0 {
        return Err(ValidationError::NonPositiveNumber(number));
    }
    Ok(number)
}

fn validate_date(date: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(date.to_string()))
}

fn validate_full_name(full_name: &str) -> Result<String, ValidationError> {
    if full_name.trim().is_empty() {
        return Err(ValidationError::EmptyFullName);
    }
    // Text fields are single-line: the store writes one record per row, and
    // an embedded line break would make the saved file unloadable.
    if full_name.contains(['\n', '\r']) {
        return Err(ValidationError::LineBreakInFullName);
    }
    Ok(full_name.to_string())
}

fn validate_stipend(stipend: f64) -> Result<f64, ValidationError> {
    if !stipend.is_finite() || stipend < 0.0 {
        return Err(ValidationError::NegativeStipend(stipend));
    }
    Ok(stipend)
}

fn validate_destination(destination: &str) -> Result<String, ValidationError> {
    if destination.trim().is_empty() {
        return Err(ValidationError::EmptyDestination);
    }
    if destination.contains(['\n', '\r']) {
        return Err(ValidationError::LineBreakInDestination);
    }
    Ok(destination.to_string())
}

/// A sortable field of [`Certificate`], resolved from its textual name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Number,
    Date,
    FullName,
    Stipend,
    Destination,
}

/// A textual field name did not match any certificate field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown field '{0}'; expected one of number, date, full_name, stipend, destination")]
pub struct UnknownFieldError(pub String);

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "number" => Ok(Field::Number),
            "date" => Ok(Field::Date),
            "full_name" => Ok(Field::FullName),
            "stipend" | "stipend_amount" => Ok(Field::Stipend),
            "destination" | "issue_destination" => Ok(Field::Destination),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}
