//! CSV loading with per-column type inference.
//!
//! The upload surface is CSV-only: raw bytes arrive from the presentation
//! layer and are parsed into a typed [`DataSet`]. Column types are inferred
//! from content with priority `Int64 → Float64 → Bool → Datetime → Utf8`;
//! a column gets a type only if every non-null cell parses as it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{LoadError, LoadResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Cell contents recognized as missing values.
const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "na", "n/a", "null", "NULL", "None", "none", "NaN", "nan",
];

/// Options controlling CSV loading behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter. Defaults to a comma.
    pub delimiter: u8,
    /// Label for the upload used in observer events (e.g. the original file
    /// name). Defaults to `"upload"`.
    pub source: String,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &self.delimiter)
            .field("source", &self.source)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            source: "upload".to_string(),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load CSV bytes into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first record is the header; blank header cells are renamed
///   `column_{index}`, duplicate names are rejected.
/// - Each column's type is inferred from its non-null cells.
/// - Null markers (empty cell, `NA`, `null`, `NaN`, ...) become
///   [`Value::Null`].
///
/// Failures never produce a partial dataset. When an observer is configured,
/// this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```
/// use eda_core::ingestion::{load_csv, LoadOptions};
/// use eda_core::types::DataType;
///
/// # fn main() -> Result<(), eda_core::LoadError> {
/// let ds = load_csv(b"age,city\n34,Oslo\n41,Lima\n", &LoadOptions::default())?;
/// assert_eq!(ds.row_count(), 2);
/// assert_eq!(ds.schema.fields[0].data_type, DataType::Int64);
/// assert_eq!(ds.schema.fields[1].data_type, DataType::Utf8);
/// # Ok(())
/// # }
/// ```
pub fn load_csv(bytes: &[u8], options: &LoadOptions) -> LoadResult<DataSet> {
    let ctx = LoadContext {
        source: options.source.clone(),
        bytes: bytes.len(),
    };

    let result = load_csv_inner(bytes, options.delimiter);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: ds.row_count(),
                    columns: ds.column_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Convenience wrapper: read a file from disk and pass its bytes to
/// [`load_csv`]. I/O failures are reported through the same observer path.
pub fn load_csv_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<DataSet> {
    match std::fs::read(path) {
        Ok(bytes) => load_csv(&bytes, options),
        Err(e) => {
            let err = LoadError::Io(e);
            if let Some(obs) = options.observer.as_ref() {
                let ctx = LoadContext {
                    source: options.source.clone(),
                    bytes: 0,
                };
                let sev = severity_for_error(&err);
                obs.on_failure(&ctx, sev, &err);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, &err);
                }
            }
            Err(err)
        }
    }
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        LoadError::Empty | LoadError::NoColumns | LoadError::DuplicateColumn { .. } => {
            LoadSeverity::Error
        }
    }
}

fn load_csv_inner(bytes: &[u8], delimiter: u8) -> LoadResult<DataSet> {
    if bytes.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(bytes);

    let headers = header_names(rdr.headers()?)?;
    let n_cols = headers.len();

    // Collect raw string cells column-major for inference.
    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); n_cols];
    for result in rdr.records() {
        let record = result?;
        for (col_idx, raw) in record.iter().enumerate() {
            raw_columns[col_idx].push(raw.trim().to_string());
        }
    }

    if raw_columns[0].is_empty() {
        return Err(LoadError::Empty);
    }

    let mut fields = Vec::with_capacity(n_cols);
    let mut typed_columns = Vec::with_capacity(n_cols);
    for (name, raw_col) in headers.into_iter().zip(&raw_columns) {
        let (data_type, values) = infer_column(raw_col);
        fields.push(Field::new(name, data_type));
        typed_columns.push(values);
    }

    // Transpose to the row-major layout of DataSet.
    let n_rows = typed_columns[0].len();
    let mut rows = Vec::with_capacity(n_rows);
    for row_idx in 0..n_rows {
        let row: Vec<Value> = typed_columns
            .iter_mut()
            .map(|col| std::mem::replace(&mut col[row_idx], Value::Null))
            .collect();
        rows.push(row);
    }

    Ok(DataSet::new(Schema::new(fields), rows))
}

fn header_names(headers: &csv::StringRecord) -> LoadResult<Vec<String>> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    for (idx, raw) in headers.iter().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            names.push(format!("column_{idx}"));
        } else {
            names.push(trimmed.to_string());
        }
    }

    if names.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::NoColumns);
    }

    for (idx, name) in names.iter().enumerate() {
        if names[..idx].contains(name) {
            return Err(LoadError::DuplicateColumn {
                column: name.clone(),
            });
        }
    }

    Ok(names)
}

/// Infers a column's type and converts its cells in one pass per candidate.
///
/// A column with no non-null cells falls through to `Utf8`.
fn infer_column(raw: &[String]) -> (DataType, Vec<Value>) {
    if let Some(values) = convert_column(raw, parse_int) {
        return (DataType::Int64, values);
    }
    if let Some(values) = convert_column(raw, parse_float) {
        return (DataType::Float64, values);
    }
    if let Some(values) = convert_column(raw, parse_bool) {
        return (DataType::Bool, values);
    }
    if let Some(values) = convert_column(raw, parse_datetime) {
        return (DataType::Datetime, values);
    }

    let values = raw
        .iter()
        .map(|cell| {
            if is_null(cell) {
                Value::Null
            } else {
                Value::Utf8(cell.clone())
            }
        })
        .collect();
    (DataType::Utf8, values)
}

/// Converts every cell with `parse`, or returns `None` on the first cell the
/// candidate type cannot represent.
fn convert_column(raw: &[String], parse: impl Fn(&str) -> Option<Value>) -> Option<Vec<Value>> {
    let mut values = Vec::with_capacity(raw.len());
    for cell in raw {
        if is_null(cell) {
            values.push(Value::Null);
        } else {
            values.push(parse(cell)?);
        }
    }
    Some(values)
}

fn is_null(cell: &str) -> bool {
    NULL_MARKERS.contains(&cell)
}

fn parse_int(s: &str) -> Option<Value> {
    s.parse::<i64>().ok().map(Value::Int64)
}

fn parse_float(s: &str) -> Option<Value> {
    s.parse::<f64>().ok().filter(|v| v.is_finite()).map(Value::Float64)
}

fn parse_bool(s: &str) -> Option<Value> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Some(Value::Bool(true)),
        "false" | "f" | "no" | "n" => Some(Value::Bool(false)),
        _ => None,
    }
}

fn parse_datetime(s: &str) -> Option<Value> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Value::Datetime(dt));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Value::Datetime)
}
