//! Pairwise scatter-matrix relationships.

use crate::classify::classify;
use crate::error::ReportResult;
use crate::types::DataSet;

use super::artifact::{FigureData, FigureSpec, ReportArtifact, ScatterPanel};
use super::column_index;

/// One composite scatter-matrix figure across the numeric-class columns.
///
/// Each off-diagonal ordered pair gets a panel of pairwise-complete points
/// (diagonal histograms are the Distributions report's job). Fewer than two
/// numeric columns yield an empty artifact sequence.
pub fn relationships(dataset: &DataSet, selection: &[&str]) -> ReportResult<Vec<ReportArtifact>> {
    let classes = classify(dataset, selection)?;
    let numeric = classes.numeric_columns();
    if numeric.len() < 2 {
        return Ok(Vec::new());
    }

    let mut columns = Vec::with_capacity(numeric.len());
    for name in &numeric {
        let idx = column_index(dataset, name)?;
        columns.push(dataset.numeric_column(idx)?);
    }

    let mut panels = Vec::with_capacity(numeric.len() * (numeric.len() - 1));
    for (i, x_name) in numeric.iter().enumerate() {
        for (j, y_name) in numeric.iter().enumerate() {
            if i == j {
                continue;
            }
            let (x, y): (Vec<f64>, Vec<f64>) = columns[i]
                .iter()
                .zip(&columns[j])
                .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
                .unzip();
            panels.push(ScatterPanel {
                x_column: x_name.to_string(),
                y_column: y_name.to_string(),
                x,
                y,
            });
        }
    }

    Ok(vec![ReportArtifact::Figure(FigureSpec {
        title: "Pairwise relationships".to_string(),
        x_label: String::new(),
        y_label: String::new(),
        data: FigureData::ScatterMatrix {
            columns: numeric.iter().map(|n| n.to_string()).collect(),
            panels,
        },
    })])
}
