use thiserror::Error;

use crate::types::DataType;

/// Convenience result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned when an uploaded file cannot be turned into a
/// [`crate::types::DataSet`].
///
/// Load errors are fatal for the upload: no partial dataset is ever produced,
/// and the caller must provide a new file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error while reading the input.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not valid delimited text.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The file parsed but contains zero data rows.
    #[error("uploaded file contains no data rows")]
    Empty,

    /// No column names could be inferred from the header row.
    #[error("no columns could be inferred from the header row")]
    NoColumns,

    /// Two header cells carry the same column name.
    #[error("duplicate column name '{column}' in header")]
    DuplicateColumn { column: String },
}

/// Error type returned by the classifier and the report dispatch functions.
///
/// "No applicable columns" is deliberately *not* an error: every report
/// returns an empty artifact sequence in that case.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The selection names a column that does not exist in the dataset.
    ///
    /// This is a caller error: a selection UI built from the dataset's own
    /// column names can never produce it.
    #[error("column '{column}' is not present in the dataset")]
    UnknownColumn { column: String },

    /// A column's declared type disagrees with a value actually stored in it.
    ///
    /// Reported per report; other reports over the same dataset still run.
    #[error(
        "column '{column}' is declared {declared} but holds a {found} value at row {row}"
    )]
    DataIntegrity {
        column: String,
        declared: DataType,
        found: &'static str,
        row: usize,
    },
}

impl ReportError {
    /// Returns `true` for selection-shape errors (as opposed to data
    /// integrity failures inside an individual report).
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::UnknownColumn { .. })
    }
}
