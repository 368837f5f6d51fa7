//! Raw values read from a lookup workbook and sampled into generated records.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use csv::{ReaderBuilder, Trim};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenError;

/// One named column of string values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupColumn {
    name: String,
    values: Vec<String>,
}

/// The requested columns of a single sheet, in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    sheet: String,
    columns: Vec<LookupColumn>,
}

impl LookupColumn {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub(crate) fn values(&self) -> &[String] {
        &self.values
    }

    /// Draws one value uniformly, with replacement.
    ///
    /// # Panics
    /// Never for a column produced by [`LookupTable::load`], which rejects empty columns.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.values
            .choose(rng)
            .map(String::as_str)
            .expect("lookup columns are never empty")
    }
}

impl LookupTable {
    /// Reads `columns` from `sheet` of the workbook at `path`.
    ///
    /// A `.csv` path is read as a single-sheet table and `sheet` is only used in
    /// error messages. Anything else goes through the spreadsheet reader, which
    /// detects the format from the extension.
    ///
    /// # Errors
    /// 1. `path` does not exist
    /// 2. the workbook or sheet cannot be read
    /// 3. one of `columns` is not in the header row, or has no values
    pub fn load(
        path: impl AsRef<Path>,
        sheet: &str,
        columns: &[&str],
    ) -> Result<LookupTable, GenError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GenError::LookupNotFound(path.to_path_buf()));
        }

        let rows = if is_csv(path) {
            read_csv_rows(path)?
        } else {
            read_sheet_rows(path, sheet)?
        };
        let table = LookupTable::from_rows(sheet, rows, columns)?;
        for column in &table.columns {
            debug!(
                "Loaded {} values for '{}' from sheet '{}'",
                column.values.len(),
                column.name,
                sheet
            );
        }
        Ok(table)
    }

    /// Builds a table from raw rows, the first non-empty row being the header
    ///
    /// # Errors
    /// Errors when a requested column is absent from the header or has no values
    pub fn from_rows(
        sheet: &str,
        rows: impl IntoIterator<Item = Vec<String>>,
        columns: &[&str],
    ) -> Result<LookupTable, GenError> {
        let mut rows = rows
            .into_iter()
            .skip_while(|row| row.iter().all(|cell| cell.trim().is_empty()));
        let header = rows.next().unwrap_or_default();

        let indices = columns
            .iter()
            .map(|&column| {
                header
                    .iter()
                    .position(|name| name.trim() == column)
                    .ok_or_else(|| GenError::MissingColumn {
                        sheet: sheet.to_owned(),
                        column: column.to_owned(),
                    })
            })
            .collect::<Result<Vec<usize>, GenError>>()?;

        let mut values: Vec<Vec<String>> = vec![Vec::new(); columns.len()];
        for row in rows {
            for (slot, &idx) in values.iter_mut().zip(&indices) {
                if let Some(cell) = row.get(idx).filter(|cell| !cell.trim().is_empty()) {
                    slot.push(cell.clone());
                }
            }
        }

        let columns = columns
            .iter()
            .zip(values)
            .map(|(&name, values)| {
                if values.is_empty() {
                    Err(GenError::EmptyColumn {
                        sheet: sheet.to_owned(),
                        column: name.to_owned(),
                    })
                } else {
                    Ok(LookupColumn {
                        name: name.to_owned(),
                        values,
                    })
                }
            })
            .collect::<Result<Vec<LookupColumn>, GenError>>()?;

        Ok(LookupTable {
            sheet: sheet.to_owned(),
            columns,
        })
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&LookupColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Like [`LookupTable::column`], reporting an absent column as an error
    ///
    /// # Errors
    /// Errors when `name` was not loaded into this table
    pub fn require(&self, name: &str) -> Result<&LookupColumn, GenError> {
        self.column(name).ok_or_else(|| GenError::MissingColumn {
            sheet: self.sheet.clone(),
            column: name.to_owned(),
        })
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>, GenError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

fn read_sheet_rows(path: &Path, sheet: &str) -> Result<Vec<Vec<String>>, GenError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range(sheet)?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(value) => value.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
