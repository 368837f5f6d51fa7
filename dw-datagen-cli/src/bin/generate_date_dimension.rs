use std::io;
use std::path::PathBuf;

use clap::Parser;

use dw_datagen::date::parse_date;
use dw_datagen::{generate_date_dimension, GenError, GenerationReport};

/// Generate a date dimension CSV file for data warehousing
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Start date (YYYY-MM-DD)
    pub(crate) start_date: String,
    /// End date (YYYY-MM-DD), inclusive
    pub(crate) end_date: String,
    /// Output CSV file name
    pub(crate) output_file: PathBuf,
}

fn run(cli: &Cli) -> Result<GenerationReport, GenError> {
    let start_date = parse_date(&cli.start_date)?;
    let end_date = parse_date(&cli.end_date)?;
    generate_date_dimension(start_date, end_date, &cli.output_file)
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    dw_datagen_cli::report(&mut io::stdout(), run(&cli), false)
}
