use std::path::Path;
use std::time::Instant;

use chrono::{Duration, Local, Months, NaiveDate};
use fake::faker::address::en::{BuildingNumber, CountryName, StateName, StreetName};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use log::info;
use rand::Rng;
use serde::Serialize;

use crate::context::GenContext;
use crate::error::GenError;
use crate::report::GenerationReport;
use crate::sink::{CsvSink, Record};

pub const GENDERS: [&str; 4] = ["Male", "Female", "Other", "Not Specified"];
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 90;

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Gender")]
    pub gender: &'static str,
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone Number")]
    pub phone_number: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Postal Code")]
    pub postal_code: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "LoyaltyProgramID")]
    pub loyalty_program_id: u8,
}

impl Record for CustomerRecord {
    const HEADERS: &'static [&'static str] = &[
        "First Name",
        "Last Name",
        "Gender",
        "DateOfBirth",
        "Email",
        "Phone Number",
        "Address",
        "City",
        "State",
        "Postal Code",
        "Country",
        "LoyaltyProgramID",
    ];
}

/// Inclusive birth-date bounds for someone aged `MIN_AGE..=MAX_AGE` on `today`
#[must_use]
pub fn birth_date_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let latest = today
        .checked_sub_months(Months::new(12 * MIN_AGE))
        .unwrap_or(NaiveDate::MIN);
    let earliest = today
        .checked_sub_months(Months::new(12 * (MAX_AGE + 1)))
        .map_or(NaiveDate::MIN, |date| date + Duration::days(1));
    (earliest, latest)
}

impl CustomerRecord {
    /// # Errors
    /// Errors when the run has exhausted unique emails
    pub fn generate(ctx: &mut GenContext, today: NaiveDate) -> Result<Self, GenError> {
        let (earliest, latest) = birth_date_bounds(today);
        let first_name = FirstName().fake_with_rng(ctx.rng());
        let last_name = LastName().fake_with_rng(ctx.rng());
        let gender = ctx.choose(&GENDERS);
        let date_of_birth = ctx.date_between(earliest, latest);
        let email = ctx.unique_email()?;
        let phone_number = ctx.phone_number();
        let building: String = BuildingNumber().fake_with_rng(ctx.rng());
        let street: String = StreetName().fake_with_rng(ctx.rng());

        Ok(CustomerRecord {
            first_name,
            last_name,
            gender,
            date_of_birth,
            email,
            phone_number,
            address: format!("{building} {street}"),
            city: ctx.city(),
            state: StateName().fake_with_rng(ctx.rng()),
            postal_code: NumberWithFormat("#####").fake_with_rng(ctx.rng()),
            country: CountryName().fake_with_rng(ctx.rng()),
            loyalty_program_id: ctx.rng().gen_range(1..=5),
        })
    }
}

/// Writes `num_rows` fake customers to `csv_file`
///
/// # Errors
/// Errors when the file cannot be written or unique emails run out
pub fn generate_customers(
    ctx: &mut GenContext,
    num_rows: usize,
    csv_file: impl AsRef<Path>,
) -> Result<GenerationReport, GenError> {
    let started = Instant::now();
    let csv_file = csv_file.as_ref();
    let today = Local::now().date_naive();

    let mut sink = CsvSink::create(csv_file)?;
    for _ in 0..num_rows {
        sink.write(&CustomerRecord::generate(ctx, today)?)?;
    }
    let (rows, _) = sink.finish()?;

    info!("Wrote {} customers to {}", rows, csv_file.display());
    Ok(GenerationReport::new("customer", rows, csv_file, started))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_date_bounds() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();
        let (earliest, latest) = birth_date_bounds(today);
        assert_eq!(latest, NaiveDate::from_ymd_opt(2006, 7, 28).unwrap());
        assert_eq!(earliest, NaiveDate::from_ymd_opt(1933, 7, 29).unwrap());

        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let (_, latest) = birth_date_bounds(leap_day);
        assert_eq!(latest, NaiveDate::from_ymd_opt(2006, 2, 28).unwrap());
    }

    #[test]
    fn test_generate_customer() {
        let mut ctx = GenContext::seeded(5);
        let today = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();
        let (earliest, latest) = birth_date_bounds(today);
        for _ in 0..50 {
            let customer = CustomerRecord::generate(&mut ctx, today).unwrap();
            assert!(GENDERS.contains(&customer.gender));
            assert!(customer.date_of_birth >= earliest && customer.date_of_birth <= latest);
            assert!((1..=5).contains(&customer.loyalty_program_id));
            assert!(customer.phone_number.starts_with("+1"));
            assert!(!customer.first_name.is_empty());
            assert!(customer.address.contains(' '));
            assert_eq!(customer.postal_code.len(), 5);
        }
    }
}
