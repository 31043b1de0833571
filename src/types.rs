//! Core data model types.
//!
//! An uploaded file is loaded into an in-memory [`DataSet`]: an ordered
//! [`Schema`] of typed [`Field`]s plus row-major [`Value`] storage. The
//! dataset is created once per upload and treated as immutable afterwards —
//! every analysis borrows it read-only.

use chrono::NaiveDateTime;

use crate::error::{ReportError, ReportResult};

/// Logical data type declared for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
    /// Calendar date-time (no timezone).
    Datetime,
}

impl DataType {
    /// Returns `true` for the numeric declared types ([`Int64`](Self::Int64)
    /// and [`Float64`](Self::Float64)).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int64 => write!(f, "int64"),
            Self::Float64 => write!(f, "float64"),
            Self::Bool => write!(f, "bool"),
            Self::Utf8 => write!(f, "utf8"),
            Self::Datetime => write!(f, "datetime"),
        }
    }
}

/// A single named, typed column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Declared data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// The ordered list of columns of a [`DataSet`].
///
/// Column names are unique; the loader rejects duplicate headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single typed cell value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Calendar date-time.
    Datetime(NaiveDateTime),
}

impl Value {
    /// Returns `true` for the missing marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the stored variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int64(_) => "int64",
            Self::Float64(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Utf8(_) => "utf8",
            Self::Datetime(_) => "datetime",
        }
    }

    /// Renders the value for display in tables and category labels.
    ///
    /// Returns `None` for [`Value::Null`].
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Int64(v) => Some(v.to_string()),
            Self::Float64(v) => Some(v.to_string()),
            Self::Bool(v) => Some(v.to_string()),
            Self::Utf8(v) => Some(v.clone()),
            Self::Datetime(v) => Some(v.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`]
/// fields. Every row has exactly `schema.fields.len()` values; the loader
/// upholds this, and [`DataSet::new`] asserts it.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the schema field count.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        let expected = schema.fields.len();
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == expected,
                "row {i} has {} values, schema has {expected} fields",
                row.len()
            );
        }
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.schema.fields.len()
    }

    /// Number of [`Value::Null`] entries in the column at `idx`.
    pub fn null_count(&self, idx: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| row.get(idx).is_some_and(Value::is_null))
            .count()
    }

    /// Extracts the column at `idx` as `Option<f64>` per row, `None` marking
    /// missing entries. `Int64` values are widened to `f64`.
    ///
    /// Returns [`ReportError::DataIntegrity`] when the column holds a value
    /// that is neither null nor numeric — the declared type has disagreed
    /// with the stored data, which is reported distinctly from "no columns
    /// apply" so the presentation layer can surface it inline.
    pub fn numeric_column(&self, idx: usize) -> ReportResult<Vec<Option<f64>>> {
        let field = &self.schema.fields[idx];
        let mut out = Vec::with_capacity(self.rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            out.push(match &row[idx] {
                Value::Null => None,
                Value::Int64(v) => Some(*v as f64),
                Value::Float64(v) => Some(*v),
                other => {
                    return Err(ReportError::DataIntegrity {
                        column: field.name.clone(),
                        declared: field.data_type,
                        found: other.type_name(),
                        // 1-based, matching the loader's user-facing rows.
                        row: row_idx + 1,
                    });
                }
            });
        }
        Ok(out)
    }

    /// Extracts the column at `idx` rendered for display, `None` marking
    /// missing entries. Used for category counting and table cells.
    pub fn display_column(&self, idx: usize) -> Vec<Option<String>> {
        self.rows.iter().map(|row| row[idx].display()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("score", DataType::Float64),
            Field::new("city", DataType::Utf8),
        ]);

        let rows = vec![
            vec![
                Value::Int64(1),
                Value::Float64(10.0),
                Value::Utf8("Oslo".to_string()),
            ],
            vec![Value::Int64(2), Value::Null, Value::Null],
            vec![
                Value::Int64(3),
                Value::Float64(5.5),
                Value::Utf8("Lima".to_string()),
            ],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn schema_index_of_works() {
        let ds = sample_dataset();
        assert_eq!(ds.schema.index_of("id"), Some(0));
        assert_eq!(ds.schema.index_of("city"), Some(2));
        assert_eq!(ds.schema.index_of("missing"), None);
    }

    #[test]
    fn null_count_counts_only_nulls() {
        let ds = sample_dataset();
        assert_eq!(ds.null_count(0), 0);
        assert_eq!(ds.null_count(1), 1);
        assert_eq!(ds.null_count(2), 1);
    }

    #[test]
    fn numeric_column_widens_ints_and_maps_nulls() {
        let ds = sample_dataset();
        assert_eq!(
            ds.numeric_column(0).unwrap(),
            vec![Some(1.0), Some(2.0), Some(3.0)]
        );
        assert_eq!(
            ds.numeric_column(1).unwrap(),
            vec![Some(10.0), None, Some(5.5)]
        );
    }

    #[test]
    fn numeric_column_rejects_text_values() {
        let ds = sample_dataset();
        let err = ds.numeric_column(2).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("column 'city'"));
        assert!(msg.contains("utf8"));
        assert!(!err.is_selection_error());
    }

    #[test]
    fn display_column_renders_all_variants() {
        let ds = sample_dataset();
        assert_eq!(
            ds.display_column(2),
            vec![Some("Oslo".to_string()), None, Some("Lima".to_string())]
        );
        assert_eq!(ds.display_column(0)[0], Some("1".to_string()));
    }

    #[test]
    #[should_panic(expected = "schema has")]
    fn dataset_rejects_ragged_rows() {
        let schema = Schema::new(vec![Field::new("id", DataType::Int64)]);
        DataSet::new(schema, vec![vec![Value::Int64(1), Value::Int64(2)]]);
    }
}
