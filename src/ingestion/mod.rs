//! Loading uploaded data into an in-memory [`crate::types::DataSet`].
//!
//! The upload surface is CSV-only. [`load_csv`] takes the raw uploaded bytes
//! and:
//!
//! - parses them with headers via the `csv` crate
//! - infers each column's [`crate::types::DataType`] from its content
//! - maps null markers to [`crate::types::Value::Null`]
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Load errors are fatal for the upload: no partial dataset is produced.

pub mod csv;
pub mod observability;

pub use csv::{LoadOptions, load_csv, load_csv_from_path};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};
