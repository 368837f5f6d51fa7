use std::io;
use std::path::PathBuf;

use clap::Parser;

use dw_datagen::{generate_stores, GenContext, StoreLookup};

/// Generate fake store data as CSV from an Excel lookup file
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of rows to generate
    pub(crate) num_rows: usize,
    /// Output CSV file name
    pub(crate) csv_file: PathBuf,
    /// Path to the Excel lookup file
    pub(crate) excel_file_path: PathBuf,
    /// Sheet name in the Excel file
    pub(crate) sheet_name: String,
    /// Column name for adjectives
    pub(crate) adjective_col: String,
    /// Column name for nouns
    pub(crate) noun_col: String,
    /// Seed for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lookup = StoreLookup {
        workbook: cli.excel_file_path,
        sheet: cli.sheet_name,
        adjective_column: cli.adjective_col,
        noun_column: cli.noun_col,
    };
    let mut ctx = GenContext::new(cli.seed);
    dw_datagen_cli::report(
        &mut io::stdout(),
        generate_stores(&mut ctx, cli.num_rows, &cli.csv_file, &lookup),
        false,
    )
}
