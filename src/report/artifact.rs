//! Renderable report artifacts.
//!
//! The analysis layer never draws. Each report returns [`ReportArtifact`]s:
//! either a [`TableArtifact`] (a rendered grid of values) or a [`FigureSpec`]
//! (a declarative description of a plot). The presentation layer renders
//! them; everything here derives serde so a browser front end can consume
//! the artifacts as JSON.

use serde::{Deserialize, Serialize};

/// The output unit of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportArtifact {
    /// A tabular summary.
    Table(TableArtifact),
    /// A declarative plot description.
    Figure(FigureSpec),
}

impl ReportArtifact {
    /// The artifact's display title.
    pub fn title(&self) -> &str {
        match self {
            Self::Table(t) => &t.title,
            Self::Figure(f) => &f.title,
        }
    }
}

/// Rows × columns of computed values, already rendered to display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableArtifact {
    /// Display title.
    pub title: String,
    /// Column headers.
    pub columns: Vec<String>,
    /// Row-major cell values; empty string marks a non-applicable cell.
    pub rows: Vec<Vec<String>>,
}

/// A declarative plot specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    /// Display title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// The plot's kind and data series.
    pub data: FigureData,
}

/// Plot kind plus the data series it draws.
///
/// Missing matrix cells (e.g. an undefined correlation) are `None`, which
/// serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FigureData {
    /// Labeled vertical bars.
    Bar {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    /// Equal-width histogram; `edges.len() == counts.len() + 1`.
    Histogram { edges: Vec<f64>, counts: Vec<u64> },
    /// Matrix heatmap with row/column labels.
    Heatmap {
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        values: Vec<Vec<Option<f64>>>,
    },
    /// Box plot from a five-number summary.
    BoxPlot {
        min: f64,
        q1: f64,
        median: f64,
        q3: f64,
        max: f64,
    },
    /// Violin plot: a density profile plus the median marker.
    Violin {
        positions: Vec<f64>,
        densities: Vec<f64>,
        median: f64,
    },
    /// Composite scatter matrix over the named columns.
    ScatterMatrix {
        columns: Vec<String>,
        panels: Vec<ScatterPanel>,
    },
    /// A single continuous curve (density estimates).
    Curve { x: Vec<f64>, y: Vec<f64> },
}

/// One panel of a [`FigureData::ScatterMatrix`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPanel {
    /// Column plotted on the x axis.
    pub x_column: String,
    /// Column plotted on the y axis.
    pub y_column: String,
    /// Point x coordinates (pairwise-complete with `y`).
    pub x: Vec<f64>,
    /// Point y coordinates.
    pub y: Vec<f64>,
}
