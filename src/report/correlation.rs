//! Pairwise Pearson correlation heatmap.

use crate::classify::classify;
use crate::error::ReportResult;
use crate::stats;
use crate::types::DataSet;

use super::artifact::{FigureData, FigureSpec, ReportArtifact};
use super::column_index;

/// One heatmap of pairwise Pearson r over the numeric-class columns.
///
/// Correlations use pairwise-complete observations: a row is dropped for a
/// pair only when either side is missing. Fewer than two numeric columns
/// yield an empty artifact sequence. Undefined cells (constant column,
/// fewer than two complete pairs) are `None` in the matrix.
pub fn correlations(dataset: &DataSet, selection: &[&str]) -> ReportResult<Vec<ReportArtifact>> {
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

    let labels: Vec<String> = numeric.iter().map(|n| n.to_string()).collect();
    let mut values = Vec::with_capacity(columns.len());
    for (i, xi) in columns.iter().enumerate() {
        let mut row = Vec::with_capacity(columns.len());
        for (j, xj) in columns.iter().enumerate() {
            row.push(if i == j {
                Some(1.0)
            } else {
                stats::pearson(xi, xj)
            });
        }
        values.push(row);
    }

    Ok(vec![ReportArtifact::Figure(FigureSpec {
        title: "Correlation matrix".to_string(),
        x_label: String::new(),
        y_label: String::new(),
        data: FigureData::Heatmap {
            row_labels: labels.clone(),
            col_labels: labels,
            values,
        },
    })])
}

#[cfg(test)]
mod tests {
    use super::correlations;
    use crate::ingestion::{LoadOptions, load_csv};
    use crate::report::artifact::{FigureData, ReportArtifact};

    fn two_column_dataset() -> crate::types::DataSet {
        let mut csv = String::from("x,y\n");
        for i in 0..30 {
            csv.push_str(&format!("{i},{}\n", 2 * i));
        }
        load_csv(csv.as_bytes(), &LoadOptions::default()).unwrap()
    }

    #[test]
    fn perfectly_linear_columns_correlate_at_one() {
        let ds = two_column_dataset();
        let artifacts = correlations(&ds, &["x", "y"]).unwrap();
        assert_eq!(artifacts.len(), 1);

        let ReportArtifact::Figure(fig) = &artifacts[0] else {
            panic!("expected a figure");
        };
        let FigureData::Heatmap { values, .. } = &fig.data else {
            panic!("expected a heatmap");
        };
        assert_eq!(values[0][0], Some(1.0));
        assert!((values[0][1].unwrap() - 1.0).abs() < 1e-12);
        assert!((values[1][0].unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_numeric_column_yields_empty_sequence() {
        let ds = two_column_dataset();
        assert!(correlations(&ds, &["x"]).unwrap().is_empty());
    }

    #[test]
    fn categorical_columns_do_not_count_toward_the_minimum() {
        let ds = load_csv(
            b"x,city\n1,Oslo\n2,Lima\n3,Oslo\n",
            &LoadOptions::default(),
        )
        .unwrap();
        assert!(correlations(&ds, &["x", "city"]).unwrap().is_empty());
    }
}
