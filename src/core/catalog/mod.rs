use std::path::Path;

use tracing::{debug, info};

use crate::models::{Category, Record};
use crate::utils::RecommendarrResult;

/// Column order of the catalog file.
pub const COLUMNS: [&str; 10] = [
    "title", "Type", "Year", "genres", "keywords", "tagline", "cast", "director", "Country", "index",
];

/// Write the whole catalog, header first. The file is closed before returning.
pub fn write_records(path: &Path, records: &[Record]) -> RecommendarrResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    // header written by hand so an empty catalog still has one
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = records.len(), "Catalog written");
    Ok(())
}

/// Read the whole catalog. Columns absent from the header and empty cells both
/// come back as empty strings.
pub fn read_records(path: &Path) -> RecommendarrResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h.trim() == *c))
        .collect();
    if !missing.is_empty() {
        debug!(path = %path.display(), ?missing, "Defaulting missing catalog columns to empty");
    }

    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;

    info!(path = %path.display(), rows = records.len(), "Catalog loaded");
    Ok(records)
}

/// Records whose `Type` equals `category`, ignoring case, in file order.
pub fn filter_by_category(records: &[Record], category: Category) -> Vec<Record> {
    records
        .iter()
        .filter(|r| category.matches(&r.kind))
        .cloned()
        .collect()
}
