//! Box and violin outlier figures.

use crate::classify::classify;
use crate::error::ReportResult;
use crate::stats;
use crate::types::DataSet;

use super::artifact::{FigureData, FigureSpec, ReportArtifact};
use super::column_index;
use super::density::KDE_GRID_POINTS;

/// Per numeric-class column: a box plot from the five-number summary and a
/// violin figure carrying the full distribution as a density profile.
///
/// A degenerate column (constant, or fewer than two valid values) has no
/// density profile and yields only its box plot. Columns with no valid
/// values yield nothing, and a selection with no numeric columns yields an
/// empty artifact sequence.
pub fn outliers(dataset: &DataSet, selection: &[&str]) -> ReportResult<Vec<ReportArtifact>> {
    let classes = classify(dataset, selection)?;

    let mut artifacts = Vec::new();
    for name in classes.numeric_columns() {
        let idx = column_index(dataset, name)?;
        let values = dataset.numeric_column(idx)?;
        let valid = stats::valid(&values);

        let Some(summary) = stats::five_number_summary(&valid) else {
            continue;
        };
        artifacts.push(ReportArtifact::Figure(FigureSpec {
            title: format!("Box plot of {name}"),
            x_label: name.to_string(),
            y_label: String::new(),
            data: FigureData::BoxPlot {
                min: summary.min,
                q1: summary.q1,
                median: summary.median,
                q3: summary.q3,
                max: summary.max,
            },
        }));

        if let Some((positions, densities)) = stats::gaussian_kde(&valid, KDE_GRID_POINTS) {
            artifacts.push(ReportArtifact::Figure(FigureSpec {
                title: format!("Violin plot of {name}"),
                x_label: name.to_string(),
                y_label: String::new(),
                data: FigureData::Violin {
                    positions,
                    densities,
                    median: summary.median,
                },
            }));
        }
    }
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::outliers;
    use crate::ingestion::{LoadOptions, load_csv};
    use crate::report::artifact::{FigureData, ReportArtifact};

    fn measurements() -> crate::types::DataSet {
        let mut csv = String::from("v\n");
        for i in 0..40 {
            csv.push_str(&format!("{}.0\n", i % 10));
        }
        load_csv(csv.as_bytes(), &LoadOptions::default()).unwrap()
    }

    #[test]
    fn box_and_violin_per_numeric_column() {
        let ds = measurements();
        let artifacts = outliers(&ds, &["v"]).unwrap();
        assert_eq!(artifacts.len(), 2);

        let ReportArtifact::Figure(box_fig) = &artifacts[0] else {
            panic!("expected a figure");
        };
        let FigureData::BoxPlot { min, median, max, .. } = box_fig.data else {
            panic!("expected a box plot");
        };
        assert_eq!(min, 0.0);
        assert_eq!(median, 4.5);
        assert_eq!(max, 9.0);

        let ReportArtifact::Figure(violin_fig) = &artifacts[1] else {
            panic!("expected a figure");
        };
        assert!(matches!(violin_fig.data, FigureData::Violin { .. }));
    }

    #[test]
    fn constant_column_yields_box_only() {
        let ds = load_csv(b"v\n3.5\n3.5\n3.5\n", &LoadOptions::default()).unwrap();
        let artifacts = outliers(&ds, &["v"]).unwrap();
        assert_eq!(artifacts.len(), 1);
        let ReportArtifact::Figure(fig) = &artifacts[0] else {
            panic!("expected a figure");
        };
        assert!(matches!(fig.data, FigureData::BoxPlot { .. }));
    }

    #[test]
    fn categorical_selection_yields_empty_sequence() {
        let ds = load_csv(b"city\nOslo\nLima\n", &LoadOptions::default()).unwrap();
        assert!(outliers(&ds, &["city"]).unwrap().is_empty());
    }
}
