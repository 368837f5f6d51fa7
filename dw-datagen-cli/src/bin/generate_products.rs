use std::io;
use std::path::PathBuf;

use clap::Parser;

use dw_datagen::{generate_products, GenContext, ProductLookup};

/// Generate fake product data as CSV from an Excel lookup file
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of rows to generate
    pub(crate) num_rows: usize,
    /// Output CSV file name
    pub(crate) csv_file: PathBuf,
    /// Path to the Excel lookup file
    pub(crate) excel_file_path: PathBuf,
    /// Sheet name for product names
    pub(crate) sheet_product: String,
    /// Column name for product names
    pub(crate) product_column: String,
    /// Sheet name for product categories
    pub(crate) sheet_category: String,
    /// Column name for product categories
    pub(crate) category_column: String,
    /// Seed for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lookup = ProductLookup {
        workbook: cli.excel_file_path,
        product_sheet: cli.sheet_product,
        product_column: cli.product_column,
        category_sheet: cli.sheet_category,
        category_column: cli.category_column,
    };
    let mut ctx = GenContext::new(cli.seed);
    dw_datagen_cli::report(
        &mut io::stdout(),
        generate_products(&mut ctx, cli.num_rows, &cli.csv_file, &lookup),
        false,
    )
}
