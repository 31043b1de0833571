//! Category frequency counts.

use std::collections::HashMap;

use crate::classify::classify;
use crate::error::ReportResult;
use crate::types::DataSet;

use super::artifact::{FigureData, FigureSpec, ReportArtifact};
use super::column_index;

/// Plots are capped to this many most-frequent categories per column so a
/// high-cardinality text column cannot explode the figure.
pub const TOP_N_CATEGORIES: usize = 20;

/// One bar figure of value frequencies per categorical-class column.
///
/// Categories are ordered by descending count, ties broken by label, and
/// truncated to [`TOP_N_CATEGORIES`]. Columns with no non-null values
/// produce no figure; a selection with no categorical columns yields an
/// empty artifact sequence.
pub fn categorical_counts(
    dataset: &DataSet,
    selection: &[&str],
) -> ReportResult<Vec<ReportArtifact>> {
    let classes = classify(dataset, selection)?;

    let mut artifacts = Vec::new();
    for name in classes.categorical_columns() {
        let idx = column_index(dataset, name)?;

        let mut freq: HashMap<String, u64> = HashMap::new();
        for label in dataset.display_column(idx).into_iter().flatten() {
            *freq.entry(label).or_insert(0) += 1;
        }
        if freq.is_empty() {
            continue;
        }

        let mut pairs: Vec<(String, u64)> = freq.into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        pairs.truncate(TOP_N_CATEGORIES);

        let (labels, values): (Vec<String>, Vec<f64>) =
            pairs.into_iter().map(|(l, c)| (l, c as f64)).unzip();

        artifacts.push(ReportArtifact::Figure(FigureSpec {
            title: format!("Value counts for {name}"),
            x_label: name.to_string(),
            y_label: "count".to_string(),
            data: FigureData::Bar { labels, values },
        }));
    }
    Ok(artifacts)
}
