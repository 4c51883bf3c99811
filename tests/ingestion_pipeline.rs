use std::fs;
use std::path::Path;

use chrono::{Local, TimeZone};
use serde_json::json;
use tempfile::tempdir;

use netsentry::types::RawDocument;
use netsentry::{
    ArtifactPlan, DataIngestion, DocumentSource, IngestionConfig, IngestionError, IngestionStage,
};

struct VecSource {
    documents: Vec<RawDocument>,
}

impl DocumentSource for VecSource {
    fn id(&self) -> &str {
        "vec_source"
    }

    fn export_all(&self) -> Result<Vec<RawDocument>, IngestionError> {
        Ok(self.documents.clone())
    }
}

/// Documents shaped like the phishing collection: a store id field, a url,
/// a categorical status carrying the "na" sentinel on every tenth row, and
/// a numeric score.
fn phishing_documents(rows: usize) -> Vec<RawDocument> {
    (0..rows)
        .map(|idx| {
            let mut document = RawDocument::new();
            document.insert("_id".to_string(), json!(format!("object_id_{idx}")));
            document.insert("url".to_string(), json!(format!("http://site-{idx}.test")));
            document.insert(
                "status".to_string(),
                if idx % 10 == 0 {
                    json!("na")
                } else {
                    json!("verified")
                },
            );
            document.insert("score".to_string(), json!(idx as i64 % 7));
            document
        })
        .collect()
}

fn config_at(root: &Path, second: u32) -> IngestionConfig {
    let now = Local.with_ymd_and_hms(2025, 5, 11, 15, 32, second).unwrap();
    IngestionConfig::new(&ArtifactPlan::rooted_at(root, now))
}

fn csv_records(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let records = reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, records)
}

#[test]
fn end_to_end_run_produces_consistent_artifact_pair() {
    let temp = tempdir().unwrap();
    let config = config_at(temp.path(), 45);
    let feature_store = config.feature_store_file_path.clone();

    let source = VecSource {
        documents: phishing_documents(1000),
    };
    let mut ingestion = DataIngestion::new(config, &source);
    let artifact = ingestion.run().unwrap();
    assert_eq!(ingestion.stage(), IngestionStage::Completed);

    let (raw_headers, raw_rows) = csv_records(&feature_store);
    let (train_headers, train_rows) = csv_records(&artifact.train_file_path);
    let (test_headers, test_rows) = csv_records(&artifact.test_file_path);

    // Identifier column never reaches any output; remaining schema is the
    // union of observed fields in first-seen order.
    assert_eq!(raw_headers, ["url", "status", "score"]);
    assert_eq!(train_headers, raw_headers);
    assert_eq!(test_headers, raw_headers);

    assert_eq!(raw_rows.len(), 1000);
    assert_eq!(train_rows.len(), 800);
    assert_eq!(test_rows.len(), 200);
}

#[test]
fn na_sentinel_never_reaches_output_files() {
    let temp = tempdir().unwrap();
    let config = config_at(temp.path(), 45);
    let feature_store = config.feature_store_file_path.clone();

    let source = VecSource {
        documents: phishing_documents(50),
    };
    let artifact = DataIngestion::new(config, &source).run().unwrap();

    for path in [
        &feature_store,
        &artifact.train_file_path,
        &artifact.test_file_path,
    ] {
        let (_, rows) = csv_records(path);
        for row in &rows {
            assert!(
                row.iter().all(|field| field != "na"),
                "literal na leaked into {}",
                path.display()
            );
        }
    }

    // Sentinel rows survive as empty fields instead.
    let (_, raw_rows) = csv_records(&feature_store);
    assert!(raw_rows.iter().any(|row| row[1].is_empty()));
}

#[test]
fn reruns_land_in_distinct_directories_without_overwriting() {
    let temp = tempdir().unwrap();
    let source = VecSource {
        documents: phishing_documents(20),
    };

    let first = DataIngestion::new(config_at(temp.path(), 45), &source)
        .run()
        .unwrap();
    let first_contents = fs::read_to_string(&first.train_file_path).unwrap();

    let second = DataIngestion::new(config_at(temp.path(), 46), &source)
        .run()
        .unwrap();

    assert_ne!(first.train_file_path, second.train_file_path);
    assert_ne!(first.test_file_path, second.test_file_path);
    assert!(first.train_file_path.exists());
    assert!(second.train_file_path.exists());
    assert_eq!(
        fs::read_to_string(&first.train_file_path).unwrap(),
        first_contents
    );
}

#[test]
fn write_failure_after_train_file_still_reports_failed() {
    let temp = tempdir().unwrap();
    let config = config_at(temp.path(), 45);
    let train_path = config.training_file_path.clone();
    let test_path = config.test_file_path.clone();

    // Occupy the test-file path with a directory so its write fails after
    // the train file has already been written.
    fs::create_dir_all(&test_path).unwrap();

    let source = VecSource {
        documents: phishing_documents(20),
    };
    let mut ingestion = DataIngestion::new(config, &source);
    let err = ingestion.run().unwrap_err();

    assert!(matches!(err, IngestionError::Write { .. }));
    assert_eq!(ingestion.stage(), IngestionStage::Failed);
    // The train file may exist on disk, but the run never claims success.
    assert!(train_path.exists());
}

#[test]
fn zero_document_export_leaves_no_files() {
    let temp = tempdir().unwrap();
    let config = config_at(temp.path(), 45);
    let ingestion_dir = config.data_ingestion_dir.clone();

    let source = VecSource {
        documents: Vec::new(),
    };
    let mut ingestion = DataIngestion::new(config, &source);
    let err = ingestion.run().unwrap_err();

    assert!(matches!(err, IngestionError::EmptyExport { .. }));
    assert_eq!(ingestion.stage(), IngestionStage::Failed);
    assert!(!ingestion_dir.exists());
}
