//! Full upload-to-bundle scenario over a realistic mixed dataset.

use eda_core::classify::{SemanticClass, classify};
use eda_core::ingestion::{LoadOptions, load_csv};
use eda_core::report::{FigureData, ReportArtifact, ReportKind, run_all};

const CITIES: [&str; 5] = ["Oslo", "Lima", "Quito", "Cairo", "Perth"];

/// 1000 rows: `age` 20–80 with no missing, `city` with 5 distinct values,
/// `income` with exactly 2% missing.
fn survey_csv() -> String {
    let mut csv = String::from("age,city,income\n");
    for i in 0..1000 {
        let age = 20 + (i % 61);
        let city = CITIES[i % 5];
        if i % 50 == 0 {
            csv.push_str(&format!("{age},{city},\n"));
        } else {
            let income = 30000 + (i * 37) % 400 * 100;
            csv.push_str(&format!("{age},{city},{income}\n"));
        }
    }
    csv
}

#[test]
fn survey_dashboard_end_to_end() {
    let ds = load_csv(survey_csv().as_bytes(), &LoadOptions::default()).unwrap();
    assert_eq!(ds.row_count(), 1000);
    assert_eq!(ds.column_count(), 3);

    let sel = ["age", "city", "income"];

    // Classifier routes age/income to numeric and city to categorical.
    let classes = classify(&ds, &sel).unwrap();
    assert_eq!(classes.class_of("age"), Some(SemanticClass::Numeric));
    assert_eq!(classes.class_of("city"), Some(SemanticClass::Categorical));
    assert_eq!(classes.class_of("income"), Some(SemanticClass::Numeric));

    let bundle = run_all(&ds, &sel).unwrap();
    assert!(bundle.sections.iter().all(|s| s.error.is_none()));

    // Summary: one table, 3 column rows, 20 missing cells out of 3000 -> 0.67%.
    let summary = bundle.section(ReportKind::Summary).unwrap();
    assert_eq!(summary.artifacts.len(), 1);
    let ReportArtifact::Table(table) = &summary.artifacts[0] else {
        panic!("summary must be a table");
    };
    assert_eq!(table.rows.len(), 3);
    assert!(table.title.contains("0.67% missing"));

    // Missing values: income has 20, the others 0.
    let missing = bundle.section(ReportKind::MissingValues).unwrap();
    let ReportArtifact::Table(missing_table) = &missing.artifacts[0] else {
        panic!("missing-values report must start with a table");
    };
    assert_eq!(missing_table.rows[0], vec!["age", "0", "0.00"]);
    assert_eq!(missing_table.rows[1], vec!["city", "0", "0.00"]);
    assert_eq!(missing_table.rows[2], vec!["income", "20", "2.00"]);

    // Distributions: one histogram each for age and income.
    let distributions = bundle.section(ReportKind::Distributions).unwrap();
    assert_eq!(distributions.artifacts.len(), 2);

    // Correlations: one heatmap over {age, income}.
    let correlations = bundle.section(ReportKind::Correlations).unwrap();
    assert_eq!(correlations.artifacts.len(), 1);
    let ReportArtifact::Figure(heatmap) = &correlations.artifacts[0] else {
        panic!("correlations must be a figure");
    };
    let FigureData::Heatmap {
        row_labels, values, ..
    } = &heatmap.data
    else {
        panic!("correlations must be a heatmap");
    };
    assert_eq!(row_labels, &["age", "income"]);
    assert_eq!(values[0][0], Some(1.0));
    assert!(values[0][1].is_some());

    // Categorical counts: one figure for city with at most 5 bars.
    let categorical = bundle.section(ReportKind::CategoricalCounts).unwrap();
    assert_eq!(categorical.artifacts.len(), 1);
    let ReportArtifact::Figure(counts) = &categorical.artifacts[0] else {
        panic!("categorical counts must be a figure");
    };
    let FigureData::Bar { labels, values } = &counts.data else {
        panic!("categorical counts must be bars");
    };
    assert!(labels.len() <= 5);
    assert_eq!(values.iter().sum::<f64>(), 1000.0);

    // Outliers: box + violin for each of the two numeric columns.
    let outliers = bundle.section(ReportKind::Outliers).unwrap();
    assert_eq!(outliers.artifacts.len(), 4);

    // Relationships: one composite scatter matrix with 2 ordered pairs.
    let relationships = bundle.section(ReportKind::Relationships).unwrap();
    assert_eq!(relationships.artifacts.len(), 1);
    let ReportArtifact::Figure(matrix) = &relationships.artifacts[0] else {
        panic!("relationships must be a figure");
    };
    let FigureData::ScatterMatrix { panels, .. } = &matrix.data else {
        panic!("relationships must be a scatter matrix");
    };
    assert_eq!(panels.len(), 2);
    // Pairwise-complete points: 980 rows have both age and income.
    assert!(panels.iter().all(|p| p.x.len() == 980));

    // Density: one KDE curve per numeric column.
    let density = bundle.section(ReportKind::Density).unwrap();
    assert_eq!(density.artifacts.len(), 2);
}

#[test]
fn reselection_recomputes_the_same_bundle() {
    let ds = load_csv(survey_csv().as_bytes(), &LoadOptions::default()).unwrap();
    let first = run_all(&ds, &["age", "income"]).unwrap();
    let second = run_all(&ds, &["age", "income"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn narrowing_the_selection_drops_sections_content() {
    let ds = load_csv(survey_csv().as_bytes(), &LoadOptions::default()).unwrap();
    let bundle = run_all(&ds, &["city"]).unwrap();

    // Only categorical material remains.
    assert!(bundle.section(ReportKind::Distributions).unwrap().artifacts.is_empty());
    assert!(bundle.section(ReportKind::Correlations).unwrap().artifacts.is_empty());
    assert!(bundle.section(ReportKind::Outliers).unwrap().artifacts.is_empty());
    assert!(bundle.section(ReportKind::Density).unwrap().artifacts.is_empty());
    assert_eq!(
        bundle
            .section(ReportKind::CategoricalCounts)
            .unwrap()
            .artifacts
            .len(),
        1
    );
}
