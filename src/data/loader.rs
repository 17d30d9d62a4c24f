use std::path::Path;

use log::debug;

use super::error::DatasetError;
use super::model::{CellValue, Table};

/// Load a CSV file with a header row into a [`Table`].
///
/// Every data row must carry exactly as many fields as the header;
/// ragged rows are a parse error. Cell text is type-inferred
/// (empty → null, then integer, float, bool, else string).
pub fn load(path: &Path) -> Result<Table, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::FileNotFound(path.to_path_buf()));
    }

    let parse_err = |source: csv::Error| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(parse_err)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(columns);
    for result in reader.records() {
        let record = result.map_err(parse_err)?;
        table.rows.push(record.iter().map(infer_cell).collect());
    }

    debug!(
        "parsed {} rows x {} columns from {}",
        table.len(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

/// Guess the dtype of a raw CSV field.
fn infer_cell(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}
