//! `eda-core` is the reproducible core of an exploratory data analysis
//! dashboard: it loads an uploaded CSV into an in-memory [`types::DataSet`],
//! classifies a selected column subset into semantic classes, and produces
//! renderable report artifacts — value tables and declarative figure specs —
//! for a presentation layer to display.
//!
//! The crate owns no UI and no persistence. A dataset lives for one
//! interactive session, is immutable after load, and every report is
//! recomputed from scratch on each `(dataset, selection)` call.
//!
//! ## Pipeline
//!
//! 1. [`ingestion::load_csv`]: raw uploaded bytes → typed [`types::DataSet`]
//!    (column types inferred from content) or a fatal [`LoadError`].
//! 2. [`classify::classify`]: `(dataset, selection)` → per-column
//!    [`classify::SemanticClass`] routing columns to the right plots.
//! 3. [`report::run_report`] / [`report::run_all`]: compute one report or
//!    the whole dashboard bundle of [`report::ReportArtifact`]s.
//!
//! ## Quick example
//!
//! ```
//! use eda_core::ingestion::{LoadOptions, load_csv};
//! use eda_core::report::{ReportKind, run_all};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let csv = b"age,city,income\n34,Oslo,52000\n41,Lima,48000\n58,Oslo,61000\n";
//! let ds = load_csv(csv, &LoadOptions::default())?;
//!
//! let bundle = run_all(&ds, &["age", "city", "income"])?;
//! let summary = bundle.section(ReportKind::Summary).unwrap();
//! assert!(summary.error.is_none());
//!
//! // Hand the whole bundle to a JSON-consuming front end.
//! let json = bundle.to_json()?;
//! assert!(json.contains("\"Dataset Info\""));
//! # Ok(())
//! # }
//! ```
//!
//! ## Selections and failure semantics
//!
//! - A selection naming a column the dataset lacks is a caller error
//!   ([`ReportError::UnknownColumn`]); selection UIs built from
//!   `dataset.schema.field_names()` cannot produce it.
//! - "No applicable columns" is never an error: the report returns an empty
//!   artifact sequence and the section renders empty.
//! - A stored value contradicting its column's declared type is a
//!   data-integrity error isolated to the report that touched it; the other
//!   sections still render.
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading, type inference, load observability
//! - [`types`]: schema + in-memory dataset types
//! - [`classify`]: semantic column classification (numeric vs categorical)
//! - [`stats`]: descriptive statistics shared by the reports
//! - [`report`]: per-report dispatch and dashboard bundle assembly
//! - [`error`]: load and report error types

pub mod classify;
pub mod error;
pub mod ingestion;
pub mod report;
pub mod stats;
pub mod types;

pub use error::{LoadError, LoadResult, ReportError, ReportResult};
