use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use rand::Rng;
use serde::Serialize;

use crate::context::GenContext;
use crate::error::GenError;
use crate::lookup::{LookupColumn, LookupTable};
use crate::report::GenerationReport;
use crate::sink::{CsvSink, Record};

pub const BRANDS: [&str; 5] = [
    "FakeLuxeAura",
    "FakeUrbanGlow",
    "FakeEtherealEdge",
    "FakeVelvetVista",
    "FakeZenithStyle",
];

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRecord {
    pub product_name: String,
    pub category: String,
    pub brand: &'static str,
    pub unit_price: u32,
}

impl Record for ProductRecord {
    const HEADERS: &'static [&'static str] = &["ProductName", "Category", "Brand", "UnitPrice"];
}

/// Where product names and categories are read from
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLookup {
    pub workbook: PathBuf,
    pub product_sheet: String,
    pub product_column: String,
    pub category_sheet: String,
    pub category_column: String,
}

impl ProductRecord {
    pub fn generate(ctx: &mut GenContext, names: &LookupColumn, categories: &LookupColumn) -> Self {
        ProductRecord {
            product_name: names.sample(ctx.rng()).to_owned(),
            category: categories.sample(ctx.rng()).to_owned(),
            brand: ctx.choose(&BRANDS),
            unit_price: ctx.rng().gen_range(100..=1000),
        }
    }
}

/// Writes `num_rows` products to `csv_file`, sampling names and categories
/// from the lookup workbook. Nothing is written if the lookup fails.
///
/// # Errors
/// Errors when the lookup cannot be loaded or the output cannot be written
pub fn generate_products(
    ctx: &mut GenContext,
    num_rows: usize,
    csv_file: impl AsRef<Path>,
    lookup: &ProductLookup,
) -> Result<GenerationReport, GenError> {
    let started = Instant::now();
    let csv_file = csv_file.as_ref();

    let names = LookupTable::load(
        &lookup.workbook,
        &lookup.product_sheet,
        &[lookup.product_column.as_str()],
    )?;
    let categories = LookupTable::load(
        &lookup.workbook,
        &lookup.category_sheet,
        &[lookup.category_column.as_str()],
    )?;
    let names = names.require(&lookup.product_column)?;
    let categories = categories.require(&lookup.category_column)?;

    let mut sink = CsvSink::create(csv_file)?;
    for _ in 0..num_rows {
        sink.write(&ProductRecord::generate(ctx, names, categories))?;
    }
    let (rows, _) = sink.finish()?;

    info!("Wrote {} products to {}", rows, csv_file.display());
    Ok(GenerationReport::new("product", rows, csv_file, started))
}
