//! Ingestion orchestration: export, snapshot, split, artifact.
//!
//! One run is a single linear sequence of blocking calls. Any failure is
//! terminal: the orchestrator parks in the `Failed` stage, returns the
//! wrapped error, and never publishes a partial artifact. Re-invoking the
//! whole pipeline is the caller's decision.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::IngestionConfig;
use crate::constants::ingestion::SPLIT_SEED;
use crate::errors::IngestionError;
use crate::source::DocumentSource;
use crate::splits::{split_table, SplitRatio};
use crate::table::Table;

/// Pipeline stages in execution order, with a terminal failure stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IngestionStage {
    /// Run constructed, nothing started.
    Idle,
    /// Reading the source collection.
    Exporting,
    /// Table materialized; raw snapshot being persisted.
    Exported,
    /// Partitioning and writing train/test files.
    Splitting,
    /// Artifact published.
    Completed,
    /// Absorbing failure stage, reachable from any step.
    Failed,
}

/// Published output handle of one successful pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionArtifact {
    /// Path of the written training partition.
    pub train_file_path: PathBuf,
    /// Path of the written test partition.
    pub test_file_path: PathBuf,
}

/// Single-shot orchestrator sequencing export, feature-store write, and
/// train/test split.
///
/// Owns the run configuration and the in-memory table for the duration of
/// the run; the source is an external collaborator borrowed for export.
pub struct DataIngestion<'a> {
    config: IngestionConfig,
    source: &'a dyn DocumentSource,
    stage: IngestionStage,
}

impl<'a> DataIngestion<'a> {
    /// Build an orchestrator for one run.
    pub fn new(config: IngestionConfig, source: &'a dyn DocumentSource) -> Self {
        Self {
            config,
            source,
            stage: IngestionStage::Idle,
        }
    }

    /// Current pipeline stage.
    pub fn stage(&self) -> IngestionStage {
        self.stage
    }

    /// Run the full pipeline once and return the artifact pair.
    pub fn run(&mut self) -> Result<IngestionArtifact, IngestionError> {
        match self.run_pipeline() {
            Ok(artifact) => Ok(artifact),
            Err(err) => {
                self.stage = IngestionStage::Failed;
                Err(err)
            }
        }
    }

    fn run_pipeline(&mut self) -> Result<IngestionArtifact, IngestionError> {
        self.stage = IngestionStage::Exporting;
        let table = self.export_collection()?;

        self.stage = IngestionStage::Exported;
        self.write_feature_store(&table)?;

        self.stage = IngestionStage::Splitting;
        self.split_train_test(&table)?;

        self.stage = IngestionStage::Completed;
        let artifact = IngestionArtifact {
            train_file_path: self.config.training_file_path.clone(),
            test_file_path: self.config.test_file_path.clone(),
        };
        info!(
            train = %artifact.train_file_path.display(),
            test = %artifact.test_file_path.display(),
            "data ingestion completed"
        );
        Ok(artifact)
    }

    /// Export the whole source collection and normalize it into a table.
    ///
    /// A zero-row export is a data-quality fatal condition; ingestion must
    /// not silently proceed on it.
    fn export_collection(&self) -> Result<Table, IngestionError> {
        info!(
            source_id = %self.source.id(),
            database = %self.config.database_name,
            collection = %self.config.collection_name,
            "exporting collection"
        );
        let documents = self.source.export_all()?;
        let table = Table::from_documents(documents);
        if table.is_empty() {
            return Err(IngestionError::EmptyExport {
                source_id: self.source.id().to_string(),
            });
        }
        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "collection export normalized"
        );
        Ok(table)
    }

    fn write_feature_store(&self, table: &Table) -> Result<(), IngestionError> {
        table.write_csv(&self.config.feature_store_file_path)?;
        info!(
            path = %self.config.feature_store_file_path.display(),
            "feature store snapshot written"
        );
        Ok(())
    }

    fn split_train_test(&self, table: &Table) -> Result<(), IngestionError> {
        let ratio = SplitRatio::new(self.config.train_test_split_ratio)?;
        let split = split_table(table, ratio, SPLIT_SEED);
        info!(
            train_rows = split.train.row_count(),
            test_rows = split.test.row_count(),
            "table split into train/test"
        );
        split.train.write_csv(&self.config.training_file_path)?;
        split.test.write_csv(&self.config.test_file_path)?;
        Ok(())
    }
}
