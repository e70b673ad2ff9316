use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::Result;
use crate::models::ProductRecord;

pub const HEADER: &str = "Item Description,Item No.,List Price";

/// Append-only CSV output: a bare header line, then one fully quoted row per
/// product.
pub struct CsvArchive {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl CsvArchive {
    pub fn create(dir: &Path, file_name: &str) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(file_name);

        let mut file = File::create(&path)?;
        writeln!(file, "{HEADER}")?;

        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        debug!(path = %path.display(), "output table opened");
        Ok(Self { path, writer })
    }

    pub fn append(&mut self, record: &ProductRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    /// Flushes buffered rows and returns the file's location.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(title: &str, item: &str, price: &str) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            item_number: item.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn header_only_when_nothing_appended() {
        let tmp = TempDir::new().unwrap();
        let archive = CsvArchive::create(tmp.path(), "out.csv").unwrap();
        let path = archive.finish().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), format!("{HEADER}\n"));
    }

    #[test]
    fn rows_are_quoted_and_newline_terminated() {
        let tmp = TempDir::new().unwrap();
        let mut archive = CsvArchive::create(tmp.path(), "out.csv").unwrap();
        archive.append(&record("Silicone Mold", "999", "$5.00")).unwrap();
        archive.append(&record("Mat, large", "N/A", "N/A")).unwrap();
        let path = archive.finish().unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Item Description,Item No.,List Price\n\
             \"Silicone Mold\",\"999\",\"$5.00\"\n\
             \"Mat, large\",\"N/A\",\"N/A\"\n"
        );
    }

    #[test]
    fn missing_directory_is_created() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("results").join("nested");
        let archive = CsvArchive::create(&dir, "out.csv").unwrap();
        assert_eq!(archive.finish().unwrap(), dir.join("out.csv"));
        assert!(dir.is_dir());
    }

    #[test]
    fn existing_file_is_replaced() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("out.csv"), "stale\n").unwrap();
        let archive = CsvArchive::create(tmp.path(), "out.csv").unwrap();
        let path = archive.finish().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), format!("{HEADER}\n"));
    }
}
