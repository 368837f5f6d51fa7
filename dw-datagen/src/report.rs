use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of a successful generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// What was generated, e.g. `customer` or `FactOrders`
    pub kind: &'static str,
    pub rows: usize,
    pub path: PathBuf,
    pub elapsed: Duration,
}

impl GenerationReport {
    pub(crate) fn new(kind: &'static str, rows: usize, path: &Path, started: Instant) -> Self {
        GenerationReport {
            kind,
            rows,
            path: path.to_path_buf(),
            elapsed: started.elapsed(),
        }
    }

    /// Wall-clock seconds, rounded to two decimals
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        (self.elapsed.as_secs_f64() * 100.0).round() / 100.0
    }

    /// The `Execution Time: ...` line printed after a run
    #[must_use]
    pub fn timing(&self) -> String {
        format!("Execution Time: {:.2} seconds", self.elapsed_secs())
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully generated {} {} records in '{}'.",
            self.rows,
            self.kind,
            self.path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let report = GenerationReport {
            kind: "customer",
            rows: 100,
            path: PathBuf::from("customers.csv"),
            elapsed: Duration::from_millis(1234),
        };
        assert_eq!(
            report.to_string(),
            "Successfully generated 100 customer records in 'customers.csv'."
        );
        assert!((report.elapsed_secs() - 1.23).abs() < f64::EPSILON);
        assert_eq!(report.timing(), "Execution Time: 1.23 seconds");
    }
}
