use std::fmt;

use super::error::DatasetError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a table
// ---------------------------------------------------------------------------

/// A dynamically-typed CSV cell mirroring common dataframe dtypes.
/// Group keys live in `BTreeMap` downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Empty field.
    Null,
}

// -- Manual Eq/Ord so we can key BTreeMap by CellValue --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

/// Renders the cell back to CSV text; `Null` becomes an empty field.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// In-memory tabular data: ordered named columns, rows aligned by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names from the header row, in file order.
    pub columns: Vec<String>,
    /// One cell vector per data row, aligned with `columns`.
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// An empty table with the given column set.
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A copy of the table with rows ordered by the values in `column`.
    /// The sort is stable, so equal keys keep their relative order.
    pub fn sorted_by(&self, column: &str) -> Result<Table, DatasetError> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| DatasetError::ColumnNotFound(column.to_string()))?;
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a[idx].cmp(&b[idx]));
        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> CellValue {
        CellValue::String(s.to_string())
    }

    #[test]
    fn cell_ordering_within_and_across_types() {
        assert!(CellValue::Integer(1) < CellValue::Integer(2));
        assert!(CellValue::Float(1.0) < CellValue::Float(1.5));
        assert!(CellValue::Null < CellValue::Bool(false));
        assert!(CellValue::Integer(99) < CellValue::Float(0.0));
        assert_eq!(cell("a").cmp(&cell("a")), std::cmp::Ordering::Equal);
    }

    #[test]
    fn cell_display_round_trips_text() {
        assert_eq!(CellValue::Integer(-7).to_string(), "-7");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(cell("mutant").to_string(), "mutant");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn sorted_by_orders_rows_and_is_stable() {
        let mut table = Table::new(vec!["id".into(), "label".into()]);
        table.rows = vec![
            vec![CellValue::Integer(3), cell("c")],
            vec![CellValue::Integer(1), cell("a")],
            vec![CellValue::Integer(1), cell("b")],
            vec![CellValue::Integer(2), cell("z")],
        ];

        let sorted = table.sorted_by("id").unwrap();
        assert_eq!(sorted.columns, table.columns);
        let ids: Vec<&CellValue> = sorted.rows.iter().map(|r| &r[0]).collect();
        assert_eq!(
            ids,
            vec![
                &CellValue::Integer(1),
                &CellValue::Integer(1),
                &CellValue::Integer(2),
                &CellValue::Integer(3),
            ]
        );
        // Ties keep input order: "a" before "b".
        assert_eq!(sorted.rows[0][1], cell("a"));
        assert_eq!(sorted.rows[1][1], cell("b"));
    }

    #[test]
    fn sorted_by_unknown_column_fails() {
        let table = Table::new(vec!["id".into()]);
        let err = table.sorted_by("missing").unwrap_err();
        assert!(matches!(err, DatasetError::ColumnNotFound(ref c) if c == "missing"));
    }

    #[test]
    fn column_index_finds_only_existing_columns() {
        let table = Table::new(vec!["Type".into(), "mutantId".into()]);
        assert_eq!(table.column_index("mutantId"), Some(1));
        assert_eq!(table.column_index("type"), None);
    }
}
