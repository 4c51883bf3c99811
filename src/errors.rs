use thiserror::Error;

use crate::types::SourceId;

/// Error type for pipeline configuration, export, and persistence failures.
///
/// Every failure inside a run is wrapped into this enum with its origin
/// context (source id, path) so failure paths stay inspectable by callers
/// and tests. No variant is retried; the caller re-invokes the whole run.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("data source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error("data source '{source_id}' exported zero documents")]
    EmptyExport { source_id: SourceId },
    #[error("failed writing '{path}': {reason}")]
    Write { path: String, reason: String },
    #[error("train/test split ratio {0} is outside (0, 1)")]
    InvalidRatio(f32),
}
