use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Instant;

use chrono::{Datelike, NaiveDate};
use log::info;
use serde::{Serialize, Serializer};

use crate::error::GenError;
use crate::report::GenerationReport;
use crate::sink::{CsvSink, Record};

/// One row of the date dimension. Every field is a pure function of `date`.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateRecord {
    #[serde(rename = "DateID")]
    pub date_id: u32,
    pub date: NaiveDate,
    /// Monday is 0
    pub day_of_week: u32,
    pub day_name: String,
    pub month: u32,
    pub month_name: String,
    pub quarter: u32,
    pub year: i32,
    #[serde(serialize_with = "title_case_bool")]
    pub is_weekend: bool,
}

impl Record for DateRecord {
    const HEADERS: &'static [&'static str] = &[
        "DateID",
        "Date",
        "DayOfWeek",
        "DayName",
        "Month",
        "MonthName",
        "Quarter",
        "Year",
        "IsWeekend",
    ];
}

/// Years whose `DateID` is exactly eight digits
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1000..=9999;

/// `YYYYMMDD` as an integer. Only eight digits for years in [`SUPPORTED_YEARS`].
#[must_use]
pub fn date_id(date: NaiveDate) -> u32 {
    date.year().unsigned_abs() * 10_000 + date.month() * 100 + date.day()
}

/// Parses a `YYYY-MM-DD` date argument
///
/// # Errors
/// Errors when `input` is not a calendar date or its year is outside [`SUPPORTED_YEARS`]
pub fn parse_date(input: &str) -> Result<NaiveDate, GenError> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|err| GenError::InvalidDate(input.to_owned(), err))?;
    check_year(date)
}

fn check_year(date: NaiveDate) -> Result<NaiveDate, GenError> {
    if SUPPORTED_YEARS.contains(&date.year()) {
        Ok(date)
    } else {
        Err(GenError::DateOutOfRange(date))
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn title_case_bool<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

impl From<NaiveDate> for DateRecord {
    fn from(date: NaiveDate) -> Self {
        let day_of_week = date.weekday().num_days_from_monday();
        DateRecord {
            date_id: date_id(date),
            date,
            day_of_week,
            day_name: date.format("%A").to_string(),
            month: date.month(),
            month_name: date.format("%B").to_string(),
            quarter: (date.month() - 1) / 3 + 1,
            year: date.year(),
            is_weekend: day_of_week >= 5,
        }
    }
}

/// Every day from `start` through `end`, inclusive. Empty when `start > end`.
#[must_use]
pub fn days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}

/// Writes one row per day in `[start_date, end_date]` to `output_file`
///
/// # Errors
/// Errors when either bound is outside [`SUPPORTED_YEARS`], in which case no
/// file is created, or when the file cannot be written
pub fn generate_date_dimension(
    start_date: NaiveDate,
    end_date: NaiveDate,
    output_file: impl AsRef<Path>,
) -> Result<GenerationReport, GenError> {
    let started = Instant::now();
    let output_file = output_file.as_ref();
    check_year(start_date)?;
    check_year(end_date)?;

    let mut sink = CsvSink::create(output_file)?;
    for date in days(start_date, end_date) {
        sink.write(&DateRecord::from(date))?;
    }
    let (rows, _) = sink.finish()?;

    info!(
        "Wrote {} days ({} to {}) to {}",
        rows,
        start_date,
        end_date,
        output_file.display()
    );
    Ok(GenerationReport::new("Date Dimension", rows, output_file, started))
}
