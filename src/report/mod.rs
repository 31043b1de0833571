//! Analysis dispatch and report assembly.
//!
//! One operation per report type, each taking `(dataset, selection)` and
//! returning a sequence of [`ReportArtifact`]s — possibly empty when no
//! selected column applies. [`run_report`] dispatches a single
//! [`ReportKind`]; [`run_all`] produces the fixed dashboard section set with
//! per-section error isolation.
//!
//! Every call is independent and idempotent: the same `(dataset, selection)`
//! always produces structurally identical artifacts, and nothing is cached
//! between calls.
//!
//! ## Example
//!
//! ```
//! use eda_core::ingestion::{LoadOptions, load_csv};
//! use eda_core::report::{ReportKind, run_all, run_report};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ds = load_csv(b"age,city\n34,Oslo\n41,Lima\n58,Oslo\n", &LoadOptions::default())?;
//!
//! // A single report...
//! let artifacts = run_report(ReportKind::Summary, &ds, &["age", "city"])?;
//! assert_eq!(artifacts.len(), 1);
//!
//! // ...or the whole dashboard bundle.
//! let bundle = run_all(&ds, &["age", "city"])?;
//! assert_eq!(bundle.sections.len(), 8);
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod categorical;
pub mod correlation;
pub mod density;
pub mod distributions;
pub mod missing;
pub mod outliers;
pub mod relationships;
pub mod summary;

pub use artifact::{FigureData, FigureSpec, ReportArtifact, ScatterPanel, TableArtifact};
pub use categorical::{TOP_N_CATEGORIES, categorical_counts};
pub use correlation::correlations;
pub use density::{KDE_GRID_POINTS, density};
pub use distributions::{HISTOGRAM_BINS, distributions};
pub use missing::missing_values;
pub use outliers::outliers;
pub use relationships::relationships;
pub use summary::summary;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::types::DataSet;

/// The fixed set of report types offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Dataset overview table.
    Summary,
    /// Missing-value counts.
    MissingValues,
    /// Per-column histograms.
    Distributions,
    /// Pearson correlation heatmap.
    Correlations,
    /// Category frequency bars.
    CategoricalCounts,
    /// Box and violin figures.
    Outliers,
    /// Scatter-matrix composite.
    Relationships,
    /// Kernel density curves.
    Density,
}

impl ReportKind {
    /// All report kinds in dashboard tab order.
    pub const ALL: [ReportKind; 8] = [
        Self::Summary,
        Self::MissingValues,
        Self::Distributions,
        Self::Correlations,
        Self::CategoricalCounts,
        Self::Outliers,
        Self::Relationships,
        Self::Density,
    ];

    /// The section title shown for this report.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Summary => "Dataset Info",
            Self::MissingValues => "Missing Values",
            Self::Distributions => "Distributions",
            Self::Correlations => "Correlations",
            Self::CategoricalCounts => "Categorical",
            Self::Outliers => "Outliers",
            Self::Relationships => "Relationships",
            Self::Density => "KDE Plots",
        }
    }
}

/// Run a single report over `(dataset, selection)`.
///
/// Returns an empty artifact sequence when no selected column applies to
/// `kind`; returns [`ReportError::UnknownColumn`] for a selection naming a
/// column the dataset lacks, and [`ReportError::DataIntegrity`] when stored
/// values contradict a column's declared type.
pub fn run_report(
    kind: ReportKind,
    dataset: &DataSet,
    selection: &[&str],
) -> ReportResult<Vec<ReportArtifact>> {
    match kind {
        ReportKind::Summary => summary(dataset, selection),
        ReportKind::MissingValues => missing_values(dataset, selection),
        ReportKind::Distributions => distributions(dataset, selection),
        ReportKind::Correlations => correlations(dataset, selection),
        ReportKind::CategoricalCounts => categorical_counts(dataset, selection),
        ReportKind::Outliers => outliers(dataset, selection),
        ReportKind::Relationships => relationships(dataset, selection),
        ReportKind::Density => density(dataset, selection),
    }
}

/// One named dashboard section: the artifacts of one report, or the inline
/// error message that replaced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Which report produced this section.
    pub kind: ReportKind,
    /// Fixed display title.
    pub title: String,
    /// Artifacts to render; empty when no column applied or `error` is set.
    pub artifacts: Vec<ReportArtifact>,
    /// Inline failure message for this section only.
    pub error: Option<String>,
}

/// The full dashboard: one section per [`ReportKind`], in tab order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBundle {
    /// Sections in display order.
    pub sections: Vec<ReportSection>,
}

impl ReportBundle {
    /// The section for `kind`.
    pub fn section(&self, kind: ReportKind) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Serializes the bundle for a JSON-consuming presentation layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Run every report and assemble the dashboard bundle.
///
/// An invalid selection is rejected up front with
/// [`ReportError::UnknownColumn`] before any report runs. Data-integrity
/// failures are isolated to their own section — the section carries the
/// error message and no artifacts while every other section still computes.
pub fn run_all(dataset: &DataSet, selection: &[&str]) -> ReportResult<ReportBundle> {
    // Validate the selection once; after this, any UnknownColumn from a
    // report would be an internal bug rather than caller input.
    crate::classify::classify(dataset, selection)?;

    let mut sections = Vec::with_capacity(ReportKind::ALL.len());
    for kind in ReportKind::ALL {
        let section = match run_report(kind, dataset, selection) {
            Ok(artifacts) => ReportSection {
                kind,
                title: kind.title().to_string(),
                artifacts,
                error: None,
            },
            Err(e) if e.is_selection_error() => return Err(e),
            Err(e) => ReportSection {
                kind,
                title: kind.title().to_string(),
                artifacts: Vec::new(),
                error: Some(e.to_string()),
            },
        };
        sections.push(section);
    }
    Ok(ReportBundle { sections })
}

/// Schema lookup for a name the classifier has already validated.
pub(crate) fn column_index(dataset: &DataSet, name: &str) -> ReportResult<usize> {
    dataset
        .schema
        .index_of(name)
        .ok_or_else(|| ReportError::UnknownColumn {
            column: name.to_string(),
        })
}
