//! Missing-value report.

use crate::classify::classify;
use crate::error::ReportResult;
use crate::types::DataSet;

use super::artifact::{FigureData, FigureSpec, ReportArtifact, TableArtifact};
use super::column_index;

/// Per-column missing counts: one table plus one bar figure of the counts.
///
/// Applies to every selected column regardless of class; an empty selection
/// yields no artifacts.
pub fn missing_values(dataset: &DataSet, selection: &[&str]) -> ReportResult<Vec<ReportArtifact>> {
    let classes = classify(dataset, selection)?;
    if classes.is_empty() {
        return Ok(Vec::new());
    }

    let row_count = dataset.row_count();
    let mut labels = Vec::with_capacity(classes.len());
    let mut counts = Vec::with_capacity(classes.len());
    let mut rows = Vec::with_capacity(classes.len());

    for (name, _) in classes.iter() {
        let idx = column_index(dataset, name)?;
        let missing = dataset.null_count(idx);
        let missing_pct = if row_count > 0 {
            missing as f64 / row_count as f64 * 100.0
        } else {
            0.0
        };
        labels.push(name.to_string());
        counts.push(missing as f64);
        rows.push(vec![
            name.to_string(),
            missing.to_string(),
            format!("{missing_pct:.2}"),
        ]);
    }

    Ok(vec![
        ReportArtifact::Table(TableArtifact {
            title: "Missing values per column".to_string(),
            columns: vec![
                "column".to_string(),
                "missing".to_string(),
                "missing %".to_string(),
            ],
            rows,
        }),
        ReportArtifact::Figure(FigureSpec {
            title: "Missing values per column".to_string(),
            x_label: "column".to_string(),
            y_label: "missing".to_string(),
            data: FigureData::Bar {
                labels,
                values: counts,
            },
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::missing_values;
    use crate::ingestion::{LoadOptions, load_csv};
    use crate::report::artifact::{FigureData, ReportArtifact};

    #[test]
    fn table_and_bar_figure_carry_the_same_counts() {
        let ds = load_csv(
            b"x,y\n1,a\nNA,b\n3,\n",
            &LoadOptions::default(),
        )
        .unwrap();
        let artifacts = missing_values(&ds, &["x", "y"]).unwrap();
        assert_eq!(artifacts.len(), 2);

        let ReportArtifact::Table(table) = &artifacts[0] else {
            panic!("first artifact must be the table");
        };
        assert_eq!(table.rows[0], vec!["x", "1", "33.33"]);
        assert_eq!(table.rows[1], vec!["y", "1", "33.33"]);

        let ReportArtifact::Figure(fig) = &artifacts[1] else {
            panic!("second artifact must be the figure");
        };
        let FigureData::Bar { labels, values } = &fig.data else {
            panic!("figure must be a bar plot");
        };
        assert_eq!(labels, &["x", "y"]);
        assert_eq!(values, &[1.0, 1.0]);
    }

    #[test]
    fn empty_selection_yields_no_artifacts() {
        let ds = load_csv(b"a\n1\n", &LoadOptions::default()).unwrap();
        assert!(missing_values(&ds, &[]).unwrap().is_empty());
    }
}
