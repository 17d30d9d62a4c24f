use std::collections::BTreeMap;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::DatasetError;
use super::model::{CellValue, Table};

/// Draw up to `k` rows uniformly at random, without replacement, for each
/// distinct value of `column`, and concatenate the picks into a new table.
///
/// Selection is non-deterministic (backed by [`rand::thread_rng`]); use
/// [`sample_with`] to supply a seeded generator.
pub fn sample(table: &Table, column: &str, k: usize) -> Result<Table, DatasetError> {
    sample_with(table, column, k, &mut rand::thread_rng())
}

/// Like [`sample`], with a caller-supplied random number generator.
///
/// Each group contributes exactly `min(k, group size)` of its own rows,
/// with no row picked twice. Groups are visited in cell-value order, so
/// for a fixed RNG the output is fully determined.
pub fn sample_with<R: Rng + ?Sized>(
    table: &Table,
    column: &str,
    k: usize,
    rng: &mut R,
) -> Result<Table, DatasetError> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| DatasetError::ColumnNotFound(column.to_string()))?;

    // Partition row indices by the cell value in `column`.
    let mut groups: BTreeMap<&CellValue, Vec<usize>> = BTreeMap::new();
    for (row_no, row) in table.rows.iter().enumerate() {
        groups.entry(&row[idx]).or_default().push(row_no);
    }

    let mut sampled = Table::new(table.columns.clone());
    for (value, members) in &groups {
        debug!(
            "group {value}: sampling {} of {} rows",
            k.min(members.len()),
            members.len()
        );
        for &row_no in members.choose_multiple(rng, k) {
            sampled.rows.push(table.rows[row_no].clone());
        }
    }
    Ok(sampled)
}
