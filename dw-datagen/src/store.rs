use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, NaiveDate};
use fake::faker::address::en::{BuildingNumber, CountryName, StateName, StreetName};
use fake::faker::name::en::FirstName;
use fake::Fake;
use log::info;
use serde::Serialize;

use crate::context::GenContext;
use crate::error::GenError;
use crate::lookup::{LookupColumn, LookupTable};
use crate::report::GenerationReport;
use crate::sink::{CsvSink, Record};

pub const STORE_TYPES: [&str; 4] = ["Exclusive", "MBO", "SMB", "Outlet Stores"];
pub const REGIONS: [&str; 4] = ["North", "South", "East", "West"];

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoreRecord {
    pub store_name: String,
    pub store_type: &'static str,
    pub store_opening_date: NaiveDate,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub region: &'static str,
    #[serde(rename = "Manager Name")]
    pub manager_name: String,
}

impl Record for StoreRecord {
    const HEADERS: &'static [&'static str] = &[
        "StoreName",
        "StoreType",
        "StoreOpeningDate",
        "Address",
        "City",
        "State",
        "Country",
        "Region",
        "Manager Name",
    ];
}

/// Where the adjectives and nouns making up store names are read from
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLookup {
    pub workbook: PathBuf,
    pub sheet: String,
    pub adjective_column: String,
    pub noun_column: String,
}

/// Earliest possible opening date
#[must_use]
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl StoreRecord {
    pub fn generate(
        ctx: &mut GenContext,
        adjectives: &LookupColumn,
        nouns: &LookupColumn,
        today: NaiveDate,
    ) -> Self {
        let adjective = adjectives.sample(ctx.rng());
        let noun = nouns.sample(ctx.rng());
        let store_type = ctx.choose(&STORE_TYPES);
        let store_opening_date = ctx.date_between(epoch(), today);
        let building: String = BuildingNumber().fake_with_rng(ctx.rng());
        let street: String = StreetName().fake_with_rng(ctx.rng());

        StoreRecord {
            store_name: format!("The {adjective} {noun}"),
            store_type,
            store_opening_date,
            address: format!("{building} {street}"),
            city: ctx.city(),
            state: StateName().fake_with_rng(ctx.rng()),
            country: CountryName().fake_with_rng(ctx.rng()),
            region: ctx.choose(&REGIONS),
            manager_name: FirstName().fake_with_rng(ctx.rng()),
        }
    }
}

/// Writes `num_rows` stores to `csv_file`, naming each from a sampled
/// adjective and noun. Nothing is written if the lookup fails.
///
/// # Errors
/// Errors when the lookup cannot be loaded or the output cannot be written
pub fn generate_stores(
    ctx: &mut GenContext,
    num_rows: usize,
    csv_file: impl AsRef<Path>,
    lookup: &StoreLookup,
) -> Result<GenerationReport, GenError> {
    let started = Instant::now();
    let csv_file = csv_file.as_ref();
    let today = Local::now().date_naive();

    let table = LookupTable::load(
        &lookup.workbook,
        &lookup.sheet,
        &[lookup.adjective_column.as_str(), lookup.noun_column.as_str()],
    )?;
    let adjectives = table.require(&lookup.adjective_column)?;
    let nouns = table.require(&lookup.noun_column)?;

    let mut sink = CsvSink::create(csv_file)?;
    for _ in 0..num_rows {
        sink.write(&StoreRecord::generate(ctx, adjectives, nouns, today))?;
    }
    let (rows, _) = sink.finish()?;

    info!("Wrote {} stores to {}", rows, csv_file.display());
    Ok(GenerationReport::new("store", rows, csv_file, started))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_store() {
        let rows = vec![
            vec!["Adjectives".to_owned(), "Nouns".to_owned()],
            vec!["Golden".to_owned(), "Oak".to_owned()],
            vec!["Quiet".to_owned(), "Harbor".to_owned()],
        ];
        let table = LookupTable::from_rows("Store Name Data", rows, &["Adjectives", "Nouns"]).unwrap();
        let adjectives = table.require("Adjectives").unwrap();
        let nouns = table.require("Nouns").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();

        let mut ctx = GenContext::seeded(21);
        for _ in 0..100 {
            let store = StoreRecord::generate(&mut ctx, adjectives, nouns, today);
            let mut words = store.store_name.split(' ');
            assert_eq!(words.next(), Some("The"));
            assert!(["Golden", "Quiet"].contains(&words.next().unwrap()));
            assert!(["Oak", "Harbor"].contains(&words.next().unwrap()));
            assert!(STORE_TYPES.contains(&store.store_type));
            assert!(REGIONS.contains(&store.region));
            assert!(store.store_opening_date >= epoch() && store.store_opening_date <= today);
            assert!(!store.manager_name.is_empty());
        }
    }
}
