use std::fmt::Display;

use mongodb::bson::{Bson, Document};
use mongodb::sync::Client;
use tracing::{debug, info};

use crate::config::SourceCredentials;
use crate::errors::IngestionError;
use crate::source::DocumentSource;
use crate::types::{RawDocument, SourceId};

/// MongoDB-backed `DocumentSource` covering one database/collection pair.
///
/// Each `export_all` call opens its own client and drops it before
/// returning, so the connection is released on every exit path.
pub struct MongoSource {
    source_id: SourceId,
    uri: String,
    database_name: String,
    collection_name: String,
}

impl MongoSource {
    /// Build a source for `database_name.collection_name` using the given
    /// credentials.
    pub fn new(
        credentials: &SourceCredentials,
        database_name: impl Into<String>,
        collection_name: impl Into<String>,
    ) -> Self {
        let database_name = database_name.into();
        let collection_name = collection_name.into();
        Self {
            source_id: format!("mongo::{database_name}::{collection_name}"),
            uri: credentials.connection_uri(),
            database_name,
            collection_name,
        }
    }

    fn unavailable(&self, reason: impl Display) -> IngestionError {
        IngestionError::SourceUnavailable {
            source_id: self.source_id.clone(),
            reason: reason.to_string(),
        }
    }
}

impl DocumentSource for MongoSource {
    fn id(&self) -> &str {
        &self.source_id
    }

    fn export_all(&self) -> Result<Vec<RawDocument>, IngestionError> {
        info!(
            source_id = %self.source_id,
            database = %self.database_name,
            collection = %self.collection_name,
            "connecting to document store"
        );
        // The client is scoped to this call; dropping it closes the
        // connection on both success and error paths.
        let client = Client::with_uri_str(&self.uri).map_err(|err| self.unavailable(err))?;
        let collection = client
            .database(&self.database_name)
            .collection::<Document>(&self.collection_name);

        let cursor = collection
            .find(None, None)
            .map_err(|err| self.unavailable(err))?;
        let mut documents = Vec::new();
        for entry in cursor {
            let document = entry.map_err(|err| self.unavailable(err))?;
            documents.push(flatten_document(document));
        }
        debug!(
            source_id = %self.source_id,
            count = documents.len(),
            "collection export finished"
        );
        Ok(documents)
    }
}

/// Convert a BSON document into the pipeline's schemaless JSON form.
fn flatten_document(document: Document) -> RawDocument {
    document
        .into_iter()
        .map(|(field, value)| (field, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> serde_json::Value {
    value.into_relaxed_extjson()
}
