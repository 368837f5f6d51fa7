use std::io::{self, Write};

use log::debug;

use dw_datagen::{GenError, GenerationReport};

/// Prints the outcome of a run to `out`.
///
/// A failed run is reported as an `Error: ...` line only; the process still
/// exits normally.
///
/// # Errors
/// Errors when `out` cannot be written
pub fn report<W: Write>(
    out: &mut W,
    result: Result<GenerationReport, GenError>,
    show_timing: bool,
) -> io::Result<()> {
    match result {
        Ok(report) => {
            writeln!(out, "\n{report}")?;
            if show_timing {
                writeln!(out, "{}\n", report.timing())?;
            }
        }
        Err(e) => {
            debug!("Generation failed: {:?}", e);
            writeln!(out, "\nError: {e}\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;

    fn render(result: Result<GenerationReport, GenError>, show_timing: bool) -> String {
        let mut out = Vec::new();
        report(&mut out, result, show_timing).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn customers() -> GenerationReport {
        GenerationReport {
            kind: "customer",
            rows: 100,
            path: PathBuf::from("customers.csv"),
            elapsed: Duration::from_millis(123),
        }
    }

    #[test]
    fn test_success() {
        assert_eq!(
            render(Ok(customers()), false),
            "\nSuccessfully generated 100 customer records in 'customers.csv'.\n"
        );
    }

    #[test]
    fn test_success_with_timing() {
        assert_eq!(
            render(Ok(customers()), true),
            "\nSuccessfully generated 100 customer records in 'customers.csv'.\n\
             Execution Time: 0.12 seconds\n\n"
        );
    }

    #[test]
    fn test_error() {
        let err = GenError::MissingColumn {
            sheet: "Raw Product Names".to_owned(),
            column: "Nope".to_owned(),
        };
        let out = render(Err(err), true);
        assert_eq!(
            out,
            "\nError: Required column 'Nope' missing in sheet 'Raw Product Names'\n\n"
        );
        assert!(out.trim_start().starts_with("Error"));
        assert!(!out.contains("Successfully"));
        assert!(!out.contains("Execution Time"));
    }
}
