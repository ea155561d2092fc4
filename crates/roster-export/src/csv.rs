//! CSV export of student records.
//!
//! Output is UTF-8 with the fixed header `Student ID,Name,Age,Grade`, one
//! row per record in the order the caller supplies them, and standard
//! quoting for embedded commas and quotes.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use roster_core::model::StudentRecord;

/// CSV column headers in deterministic order.
pub const CSV_HEADERS: &[&str] = &["Student ID", "Name", "Age", "Grade"];

/// Write records as CSV to any writer.
pub fn write_csv<'a, W, I>(records: I, writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .context("failed to write CSV header")?;

    for record in records {
        let age = record.age.to_string();
        csv_writer
            .write_record([
                record.id.as_str(),
                record.name.as_str(),
                age.as_str(),
                record.grade.as_str(),
            ])
            .with_context(|| format!("failed to write CSV row for '{}'", record.id))?;
    }

    csv_writer.flush().context("failed to flush CSV writer")?;
    Ok(())
}

/// Render records as a CSV string.
pub fn csv_string<'a, I>(records: I) -> Result<String>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).context("CSV output was not valid UTF-8")
}

/// Write records to a CSV file, creating missing parent directories.
pub fn write_csv_file<'a, I>(records: I, path: &Path) -> Result<()>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(records, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::store::RecordStore;

    #[test]
    fn single_record_exact_output() {
        let mut store = RecordStore::new();
        store.add("S1", "Alice", 20, "A").unwrap();

        let out = csv_string(store.list()).unwrap();
        assert_eq!(out, "Student ID,Name,Age,Grade\nS1,Alice,20,A\n");
    }

    #[test]
    fn empty_store_yields_header_only() {
        let store = RecordStore::new();
        let out = csv_string(store.list()).unwrap();
        assert_eq!(out, "Student ID,Name,Age,Grade\n");
    }

    #[test]
    fn rows_follow_list_order() {
        let mut store = RecordStore::new();
        store.add("S2", "Bob", 22, "B").unwrap();
        store.add("S1", "Alice", 20, "A").unwrap();

        let out = csv_string(store.list()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "S1,Alice,20,A");
        assert_eq!(lines[2], "S2,Bob,22,B");
    }

    #[test]
    fn embedded_comma_and_quote_are_escaped() {
        let mut store = RecordStore::new();
        store.add("S1", "Riley, Jr.", 20, "A").unwrap();
        store.add("S2", "Quinn \"Q\"", 21, "B").unwrap();

        let out = csv_string(store.list()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "S1,\"Riley, Jr.\",20,A");
        assert_eq!(lines[2], "S2,\"Quinn \"\"Q\"\"\",21,B");
    }

    #[test]
    fn file_export_creates_parent_dirs() {
        let mut store = RecordStore::new();
        store.add("S1", "Alice", 20, "A").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");
        write_csv_file(store.list(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Student ID,Name,Age,Grade\nS1,Alice,20,A\n");
    }
}
