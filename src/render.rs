//! JSON rendering of a finished schema tree.

use crate::avro::Schema;
use crate::error::RenderError;

/// Compact single-line JSON.
pub fn encode(schema: &Schema) -> Result<String, RenderError> {
    serde_json::to_string(schema).map_err(|source| failure(schema, source))
}

/// Indented JSON, as written to `.avsc` files.
pub fn encode_pretty(schema: &Schema) -> Result<String, RenderError> {
    serde_json::to_string_pretty(schema).map_err(|source| failure(schema, source))
}

fn failure(schema: &Schema, source: serde_json::Error) -> RenderError {
    tracing::warn!("rendering schema failed: {source}");
    RenderError {
        source,
        tree: format!("{schema:?}"),
    }
}
