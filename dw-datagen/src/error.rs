use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::date::SUPPORTED_YEARS;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Error reading lookup file: {0}")]
    WorkbookError(#[from] calamine::Error),
    #[error("The file '{}' does not exist.", .0.display())]
    LookupNotFound(PathBuf),
    #[error("Required column '{column}' missing in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },
    #[error("Column '{column}' in sheet '{sheet}' has no values to sample from")]
    EmptyColumn { sheet: String, column: String },
    #[error("Invalid date '{0}': {1}, expected YYYY-MM-DD")]
    InvalidDate(String, chrono::ParseError),
    #[error("Date {0} is outside years {} through {}", SUPPORTED_YEARS.start(), SUPPORTED_YEARS.end())]
    DateOutOfRange(NaiveDate),
    #[error("Unable to produce a unique {0} after {1} attempts")]
    UniqueExhausted(&'static str, usize),
}
