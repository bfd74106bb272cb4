use crate::models::FlatCountry;
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save flattened records as CSV. The header row is the `FlatCountry`
/// field names in declaration order.
pub fn save_csv<P: AsRef<Path>>(records: &[FlatCountry], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save any serializable value as pretty-printed JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
