use std::io;
use std::path::PathBuf;

use clap::Parser;

use dw_datagen::{generate_customers, GenContext};

/// Generate fake customer data as CSV
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of rows to generate
    pub(crate) num_rows: usize,
    /// Output CSV file name
    pub(crate) csv_file: PathBuf,
    /// Seed for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut ctx = GenContext::new(cli.seed);
    dw_datagen_cli::report(
        &mut io::stdout(),
        generate_customers(&mut ctx, cli.num_rows, &cli.csv_file),
        true,
    )
}
