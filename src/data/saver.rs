use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::error::DatasetError;
use super::model::Table;

/// Write `table` as CSV to `dir/file_name`, creating `dir` and any
/// missing ancestors first. An existing file at that path is overwritten;
/// an empty table still produces a file with the header row.
///
/// Returns the path written.
pub fn save(table: &Table, dir: &Path, file_name: &str) -> Result<PathBuf, DatasetError> {
    fs::create_dir_all(dir).map_err(|source| DatasetError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let write_err = |source: csv::Error| DatasetError::Write {
        path: path.clone(),
        source,
    };

    let mut writer = csv::Writer::from_path(&path).map_err(write_err)?;
    writer.write_record(&table.columns).map_err(write_err)?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;

    debug!("wrote {} rows to {}", table.len(), path.display());
    Ok(path)
}
