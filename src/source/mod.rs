//! Document source interfaces and the MongoDB exporter.
//!
//! `DocumentSource` is the pipeline-facing seam: one call exports the entire
//! collection as schemaless documents. Sources own their connection
//! lifecycle and must release it on every exit path.

use crate::errors::IngestionError;
use crate::types::RawDocument;

/// MongoDB-backed source implementation.
pub mod mongo;
pub use mongo::MongoSource;

/// Pipeline-facing document source interface.
pub trait DocumentSource {
    /// Stable source identifier used in errors and logs.
    fn id(&self) -> &str;

    /// Fetch every document in the collection.
    ///
    /// Whole-collection reads are materialized in memory; there is no row
    /// cap. Implementations must release any acquired connection before
    /// returning, on success and failure alike.
    fn export_all(&self) -> Result<Vec<RawDocument>, IngestionError>;
}
