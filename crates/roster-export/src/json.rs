//! JSON export of student records.
//!
//! Pretty-printed array of records in the order the caller supplies them.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use roster_core::model::StudentRecord;

/// Write records as a pretty-printed JSON array to any writer.
pub fn write_json<'a, W, I>(records: I, writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let records: Vec<&StudentRecord> = records.into_iter().collect();
    serde_json::to_writer_pretty(writer, &records).context("failed to serialize records")?;
    Ok(())
}

/// Render records as a pretty-printed JSON string.
pub fn json_string<'a, I>(records: I) -> Result<String>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let records: Vec<&StudentRecord> = records.into_iter().collect();
    serde_json::to_string_pretty(&records).context("failed to serialize records")
}

/// Write records to a JSON file, creating missing parent directories.
pub fn write_json_file<'a, I>(records: I, path: &Path) -> Result<()>
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
    write_json(records, file)
}
