use std::fs::File;
use std::io;
use std::marker::PhantomData;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use serde::Serialize;

use crate::error::GenError;

/// A flat row type with a fixed column order.
///
/// `HEADERS` must list the serialized fields in declaration order; it is
/// written up front so that an empty run still produces a header line.
pub trait Record: Serialize {
    const HEADERS: &'static [&'static str];
}

/// Writes records of one type as CSV, header first
#[derive(Debug)]
pub struct CsvSink<R, W: io::Write = File> {
    writer: Writer<W>,
    rows: usize,
    _record: PhantomData<R>,
}

impl<R: Record> CsvSink<R> {
    /// Creates (or truncates) `path` and writes the header row
    ///
    /// # Errors
    /// Errors when the file cannot be created or the header cannot be written
    pub fn create(path: impl AsRef<Path>) -> Result<Self, GenError> {
        let file = File::create(path)?;
        CsvSink::from_writer(file)
    }
}

impl<R: Record, W: io::Write> CsvSink<R, W> {
    /// # Errors
    /// Errors when the header cannot be written
    pub fn from_writer(inner: W) -> Result<Self, GenError> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(R::HEADERS)?;
        Ok(CsvSink {
            writer,
            rows: 0,
            _record: PhantomData,
        })
    }

    /// # Errors
    /// Errors when the record cannot be serialized or written
    pub fn write(&mut self, record: &R) -> Result<(), GenError> {
        self.writer.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes buffered rows and hands back the underlying writer along with
    /// the number of rows written.
    ///
    /// # Errors
    /// Errors when the buffered rows cannot be flushed
    pub fn finish(self) -> Result<(usize, W), GenError> {
        let rows = self.rows;
        let inner = self.writer.into_inner().map_err(|err| err.into_error())?;
        Ok((rows, inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        #[serde(rename = "Left Side")]
        left: u8,
        #[serde(rename = "Right")]
        right: &'static str,
    }

    impl Record for Pair {
        const HEADERS: &'static [&'static str] = &["Left Side", "Right"];
    }

    fn render(pairs: &[Pair]) -> String {
        let mut sink: CsvSink<Pair, Vec<u8>> = CsvSink::from_writer(Vec::new()).unwrap();
        for pair in pairs {
            sink.write(pair).unwrap();
        }
        let (rows, bytes) = sink.finish().unwrap();
        assert_eq!(rows, pairs.len());
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(render(&[]), "Left Side,Right\n");
    }

    #[test]
    fn test_rows_follow_header() {
        let out = render(&[
            Pair { left: 1, right: "a" },
            Pair { left: 2, right: "b, c" },
        ]);
        assert_eq!(out, "Left Side,Right\n1,a\n2,\"b, c\"\n");
    }
}
