//! Semantic column classification.
//!
//! Every report routes columns through one shared classifier instead of
//! re-deriving types ad hoc: a column is either [`SemanticClass::Numeric`]
//! (histogram/correlation/outlier material) or [`SemanticClass::Categorical`]
//! (count-plot material). Declared non-numeric columns are always
//! categorical; declared numeric columns are demoted to categorical when
//! their distinct-value cardinality is small enough that they behave like
//! labels (a 0/1 flag, a 1–5 rating).
//!
//! # Example
//!
//! ```
//! use eda_core::classify::{SemanticClass, classify};
//! use eda_core::ingestion::{LoadOptions, load_csv};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ds = load_csv(b"age,city\n34,Oslo\n41,Lima\n58,Oslo\n", &LoadOptions::default())?;
//! let classes = classify(&ds, &["age", "city"])?;
//! assert_eq!(classes.class_of("age"), Some(SemanticClass::Numeric));
//! assert_eq!(classes.class_of("city"), Some(SemanticClass::Categorical));
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use crate::error::{ReportError, ReportResult};
use crate::types::{DataSet, Value};

/// A declared-numeric column is demoted to categorical only when its distinct
/// non-null value count is at most this many...
pub const CATEGORICAL_MAX_DISTINCT: usize = 20;

/// ...and at most this fraction of the row count. Both bounds are fixed
/// policy, not runtime configuration.
pub const CATEGORICAL_MAX_RATIO: f64 = 0.05;

/// Semantic class assigned to a selected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticClass {
    /// Continuous numeric data: histograms, correlations, outlier plots.
    Numeric,
    /// Label-like data: frequency counts.
    Categorical,
}

/// Result of classifying a column selection, preserving selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    entries: Vec<(String, SemanticClass)>,
}

impl Classification {
    /// The class assigned to `name`, or `None` if it was not selected.
    pub fn class_of(&self, name: &str) -> Option<SemanticClass> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, class)| *class)
    }

    /// Selected columns classified numeric, in selection order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns_of(SemanticClass::Numeric)
    }

    /// Selected columns classified categorical, in selection order.
    pub fn categorical_columns(&self) -> Vec<&str> {
        self.columns_of(SemanticClass::Categorical)
    }

    fn columns_of(&self, class: SemanticClass) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, c)| *c == class)
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// Iterate `(column, class)` pairs in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SemanticClass)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    /// Number of classified columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the selection was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classify each selected column as numeric or categorical.
///
/// Deterministic and pure: the same `(dataset, selection)` always yields the
/// same classification. An empty selection yields an empty classification —
/// downstream reports answer it with zero artifacts, not a failure.
///
/// Returns [`ReportError::UnknownColumn`] when the selection names a column
/// the dataset does not have. Mismatched stored values (a text value inside
/// a declared-numeric column) do not fail classification; they surface as
/// data-integrity errors from the report that extracts the values.
pub fn classify(dataset: &DataSet, selection: &[&str]) -> ReportResult<Classification> {
    let mut entries = Vec::with_capacity(selection.len());
    for &name in selection {
        let idx = dataset
            .schema
            .index_of(name)
            .ok_or_else(|| ReportError::UnknownColumn {
                column: name.to_string(),
            })?;

        let field = &dataset.schema.fields[idx];
        let class = if !field.data_type.is_numeric() {
            SemanticClass::Categorical
        } else if is_low_cardinality(dataset, idx) {
            SemanticClass::Categorical
        } else {
            SemanticClass::Numeric
        };
        entries.push((name.to_string(), class));
    }
    Ok(Classification { entries })
}

/// Distinct-value check for declared-numeric columns.
///
/// Distinctness compares exact bit patterns of the stored numbers (ints are
/// widened to `f64` first, matching the extraction the reports use).
fn is_low_cardinality(dataset: &DataSet, idx: usize) -> bool {
    let row_count = dataset.row_count();
    if row_count == 0 {
        return false;
    }

    let max_by_ratio = (row_count as f64 * CATEGORICAL_MAX_RATIO).floor() as usize;
    let limit = CATEGORICAL_MAX_DISTINCT.min(max_by_ratio);

    let mut distinct: HashSet<u64> = HashSet::new();
    for row in &dataset.rows {
        let v = match &row[idx] {
            Value::Int64(v) => *v as f64,
            Value::Float64(v) => *v,
            _ => continue,
        };
        distinct.insert(v.to_bits());
        if distinct.len() > limit {
            return false;
        }
    }
    !distinct.is_empty()
}

#[cfg(test)]
mod tests {
    use super::{SemanticClass, classify};
    use crate::ingestion::{LoadOptions, load_csv};
    use crate::types::DataSet;

    fn flags_dataset() -> DataSet {
        // 100 rows of a 0/1 flag next to a running measurement.
        let mut csv = String::from("flag,measure\n");
        for i in 0..100 {
            csv.push_str(&format!("{},{}.5\n", i % 2, i));
        }
        load_csv(csv.as_bytes(), &LoadOptions::default()).unwrap()
    }

    #[test]
    fn low_cardinality_numeric_is_categorical() {
        let ds = flags_dataset();
        let classes = classify(&ds, &["flag", "measure"]).unwrap();
        assert_eq!(classes.class_of("flag"), Some(SemanticClass::Categorical));
        assert_eq!(classes.class_of("measure"), Some(SemanticClass::Numeric));
    }

    #[test]
    fn small_table_keeps_numeric_columns_numeric() {
        // 4 distinct values in 4 rows: cardinality is high relative to size.
        let ds = load_csv(b"x\n1\n2\n3\n4\n", &LoadOptions::default()).unwrap();
        let classes = classify(&ds, &["x"]).unwrap();
        assert_eq!(classes.class_of("x"), Some(SemanticClass::Numeric));
    }

    #[test]
    fn declared_text_is_always_categorical() {
        let ds = load_csv(b"name\nAda\nGrace\n", &LoadOptions::default()).unwrap();
        let classes = classify(&ds, &["name"]).unwrap();
        assert_eq!(classes.class_of("name"), Some(SemanticClass::Categorical));
    }

    #[test]
    fn classification_is_deterministic() {
        let ds = flags_dataset();
        let a = classify(&ds, &["flag", "measure"]).unwrap();
        let b = classify(&ds, &["flag", "measure"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_selection_yields_empty_classification() {
        let ds = flags_dataset();
        let classes = classify(&ds, &[]).unwrap();
        assert!(classes.is_empty());
        assert!(classes.numeric_columns().is_empty());
    }

    #[test]
    fn unknown_column_is_a_selection_error() {
        let ds = flags_dataset();
        let err = classify(&ds, &["flag", "nope"]).unwrap_err();
        assert!(err.is_selection_error());
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn selection_order_is_preserved() {
        let ds = flags_dataset();
        let classes = classify(&ds, &["measure", "flag"]).unwrap();
        let names: Vec<&str> = classes.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["measure", "flag"]);
    }
}
