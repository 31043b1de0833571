//! Kernel density estimate curves.

use crate::classify::classify;
use crate::error::ReportResult;
use crate::stats;
use crate::types::DataSet;

use super::artifact::{FigureData, FigureSpec, ReportArtifact};
use super::column_index;

/// Grid resolution of every density curve.
pub const KDE_GRID_POINTS: usize = 200;

/// One Gaussian-KDE curve figure per numeric-class column.
///
/// Bandwidth follows Scott's rule. Columns without enough spread for a
/// density estimate (constant, or fewer than two valid values) produce no
/// figure; a selection with no numeric columns yields an empty sequence.
pub fn density(dataset: &DataSet, selection: &[&str]) -> ReportResult<Vec<ReportArtifact>> {
    let classes = classify(dataset, selection)?;

    let mut artifacts = Vec::new();
    for name in classes.numeric_columns() {
        let idx = column_index(dataset, name)?;
        let values = dataset.numeric_column(idx)?;
        let valid = stats::valid(&values);
        if let Some((x, y)) = stats::gaussian_kde(&valid, KDE_GRID_POINTS) {
            artifacts.push(ReportArtifact::Figure(FigureSpec {
                title: format!("Density of {name}"),
                x_label: name.to_string(),
                y_label: "density".to_string(),
                data: FigureData::Curve { x, y },
            }));
        }
    }
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::{KDE_GRID_POINTS, density};
    use crate::ingestion::{LoadOptions, load_csv};
    use crate::report::artifact::{FigureData, ReportArtifact};

    #[test]
    fn one_curve_per_numeric_column() {
        let mut csv = String::from("v\n");
        for i in 0..60 {
            csv.push_str(&format!("{}.25\n", i % 12));
        }
        let ds = load_csv(csv.as_bytes(), &LoadOptions::default()).unwrap();
        let artifacts = density(&ds, &["v"]).unwrap();
        assert_eq!(artifacts.len(), 1);

        let ReportArtifact::Figure(fig) = &artifacts[0] else {
            panic!("expected a figure");
        };
        let FigureData::Curve { x, y } = &fig.data else {
            panic!("expected a curve");
        };
        assert_eq!(x.len(), KDE_GRID_POINTS);
        assert_eq!(y.len(), KDE_GRID_POINTS);
        assert!(y.iter().all(|d| *d >= 0.0));
    }

    #[test]
    fn constant_column_produces_no_curve() {
        let ds = load_csv(b"v\n1.5\n1.5\n1.5\n", &LoadOptions::default()).unwrap();
        assert!(density(&ds, &["v"]).unwrap().is_empty());
    }

    #[test]
    fn categorical_selection_yields_empty_sequence() {
        let ds = load_csv(b"city\nOslo\nLima\n", &LoadOptions::default()).unwrap();
        assert!(density(&ds, &["city"]).unwrap().is_empty());
    }
}
