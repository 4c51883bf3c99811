#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Run planning, ingestion configuration, and source credentials.
pub mod config;
/// Centralized constants for pipeline identity, layout, and split policy.
pub mod constants;
/// Ingestion orchestration and the published artifact type.
pub mod ingestion;
/// Document source interfaces and the MongoDB exporter.
pub mod source;
/// Deterministic train/test partitioning.
pub mod splits;
/// In-memory tabular structure and CSV persistence.
pub mod table;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{ArtifactPlan, IngestionConfig, SourceCredentials};
pub use errors::IngestionError;
pub use ingestion::{DataIngestion, IngestionArtifact, IngestionStage};
pub use source::{DocumentSource, MongoSource};
pub use splits::{split_table, SplitRatio, TrainTestSplit};
pub use table::{Cell, Table};
pub use types::{ColumnName, FieldName, RawDocument, SourceId};
