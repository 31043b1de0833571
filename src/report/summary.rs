//! Dataset summary report.

use crate::classify::{SemanticClass, classify};
use crate::error::ReportResult;
use crate::stats;
use crate::types::DataSet;

use super::artifact::{ReportArtifact, TableArtifact};
use super::column_index;

/// One table over all selected columns: declared type, missing counts, and
/// descriptive statistics (count/mean/std/min/quartiles/max) for columns the
/// classifier labels numeric. The title carries the dataset shape and the
/// overall missing percentage across the selection.
pub fn summary(dataset: &DataSet, selection: &[&str]) -> ReportResult<Vec<ReportArtifact>> {
    let classes = classify(dataset, selection)?;
    if classes.is_empty() {
        return Ok(Vec::new());
    }

    let row_count = dataset.row_count();
    let mut total_missing = 0usize;
    let mut rows = Vec::with_capacity(classes.len());

    for (name, class) in classes.iter() {
        let idx = column_index(dataset, name)?;
        let field = &dataset.schema.fields[idx];
        let missing = dataset.null_count(idx);
        total_missing += missing;
        let missing_pct = if row_count > 0 {
            missing as f64 / row_count as f64 * 100.0
        } else {
            0.0
        };

        let mut cells = vec![
            name.to_string(),
            field.data_type.to_string(),
            missing.to_string(),
            format!("{missing_pct:.2}"),
        ];

        if class == SemanticClass::Numeric {
            let values = dataset.numeric_column(idx)?;
            let valid = stats::valid(&values);
            cells.push(valid.len().to_string());
            cells.push(fmt_stat(stats::mean(&valid)));
            cells.push(fmt_stat(stats::std_dev(&valid)));
            match stats::five_number_summary(&valid) {
                Some(s) => {
                    cells.push(fmt_stat(Some(s.min)));
                    cells.push(fmt_stat(Some(s.q1)));
                    cells.push(fmt_stat(Some(s.median)));
                    cells.push(fmt_stat(Some(s.q3)));
                    cells.push(fmt_stat(Some(s.max)));
                }
                None => cells.extend(std::iter::repeat_n(String::new(), 5)),
            }
        } else {
            cells.extend(std::iter::repeat_n(String::new(), 8));
        }
        rows.push(cells);
    }

    let cell_count = row_count * classes.len();
    let overall_missing_pct = if cell_count > 0 {
        total_missing as f64 / cell_count as f64 * 100.0
    } else {
        0.0
    };

    Ok(vec![ReportArtifact::Table(TableArtifact {
        title: format!(
            "{row_count} rows × {} columns selected, {overall_missing_pct:.2}% missing",
            classes.len()
        ),
        columns: [
            "column", "type", "missing", "missing %", "count", "mean", "std", "min", "25%",
            "50%", "75%", "max",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        rows,
    })])
}

/// Renders a statistic with four decimals, trimming trailing zeros. Missing
/// statistics (empty column, single value for std) render as empty cells.
fn fmt_stat(v: Option<f64>) -> String {
    match v {
        Some(v) => {
            let s = format!("{v:.4}");
            let s = s.trim_end_matches('0').trim_end_matches('.');
            s.to_string()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::summary;
    use crate::ingestion::{LoadOptions, load_csv};
    use crate::report::artifact::ReportArtifact;

    #[test]
    fn summary_is_one_table_with_describe_for_numeric() {
        let ds = load_csv(
            b"age,city\n20,Oslo\n30,Lima\n40,Oslo\nNA,Lima\n",
            &LoadOptions::default(),
        )
        .unwrap();
        let artifacts = summary(&ds, &["age", "city"]).unwrap();
        assert_eq!(artifacts.len(), 1);

        let ReportArtifact::Table(table) = &artifacts[0] else {
            panic!("summary must produce a table");
        };
        assert_eq!(table.rows.len(), 2);
        // age: 1 of 4 missing, mean of {20,30,40} = 30.
        assert_eq!(table.rows[0][2], "1");
        assert_eq!(table.rows[0][3], "25.00");
        assert_eq!(table.rows[0][5], "30");
        // city: categorical, describe cells are empty.
        assert_eq!(table.rows[1][1], "utf8");
        assert_eq!(table.rows[1][5], "");
        // Overall missing: 1 null out of 8 cells.
        assert!(table.title.contains("12.50% missing"));
    }

    #[test]
    fn empty_selection_yields_no_artifacts() {
        let ds = load_csv(b"a\n1\n", &LoadOptions::default()).unwrap();
        assert!(summary(&ds, &[]).unwrap().is_empty());
    }
}
