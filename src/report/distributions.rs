//! Per-column distribution histograms.

use crate::classify::classify;
use crate::error::ReportResult;
use crate::stats;
use crate::types::DataSet;

use super::artifact::{FigureData, FigureSpec, ReportArtifact};
use super::column_index;

/// Number of equal-width bins per histogram.
pub const HISTOGRAM_BINS: usize = 30;

/// One histogram figure per numeric-class column.
///
/// Columns with no valid values produce no figure. A selection with no
/// numeric columns yields an empty artifact sequence.
pub fn distributions(dataset: &DataSet, selection: &[&str]) -> ReportResult<Vec<ReportArtifact>> {
    let classes = classify(dataset, selection)?;

    let mut artifacts = Vec::new();
    for name in classes.numeric_columns() {
        let idx = column_index(dataset, name)?;
        let values = dataset.numeric_column(idx)?;
        let valid = stats::valid(&values);
        if let Some((edges, counts)) = stats::histogram(&valid, HISTOGRAM_BINS) {
            artifacts.push(ReportArtifact::Figure(FigureSpec {
                title: format!("Distribution of {name}"),
                x_label: name.to_string(),
                y_label: "count".to_string(),
                data: FigureData::Histogram { edges, counts },
            }));
        }
    }
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::{HISTOGRAM_BINS, distributions};
    use crate::ingestion::{LoadOptions, load_csv};
    use crate::report::artifact::{FigureData, ReportArtifact};

    #[test]
    fn one_histogram_per_numeric_column() {
        let mut csv = String::from("a,b,city\n");
        for i in 0..50 {
            csv.push_str(&format!("{i},{}.5,Oslo\n", 50 - i));
        }
        let ds = load_csv(csv.as_bytes(), &LoadOptions::default()).unwrap();
        let artifacts = distributions(&ds, &["a", "b", "city"]).unwrap();
        assert_eq!(artifacts.len(), 2);

        let ReportArtifact::Figure(fig) = &artifacts[0] else {
            panic!("expected a figure");
        };
        let FigureData::Histogram { edges, counts } = &fig.data else {
            panic!("expected a histogram");
        };
        assert_eq!(edges.len(), HISTOGRAM_BINS + 1);
        assert_eq!(counts.iter().sum::<u64>(), 50);
    }

    #[test]
    fn no_numeric_columns_yields_empty_sequence() {
        let ds = load_csv(b"city\nOslo\nLima\n", &LoadOptions::default()).unwrap();
        assert!(distributions(&ds, &["city"]).unwrap().is_empty());
    }
}
