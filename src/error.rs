use thiserror::Error;

/// Errors raised while walking a type description.
#[derive(Debug, Error)]
pub enum ReflectError {
    #[error("type `{name}` is not a record and cannot be reflected as one")]
    NotARecord { name: String },

    #[error("type `{name}` contains itself (expanding {})", .chain.join(" -> "))]
    CyclicType { name: String, chain: Vec<String> },
}

/// The renderer failed to turn a finished schema tree into JSON.
#[derive(Debug, Error)]
#[error("failed to render schema: {source}")]
pub struct RenderError {
    #[source]
    pub source: serde_json::Error,
    /// Debug rendering of the tree that failed to encode.
    pub tree: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Reflect(#[from] ReflectError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
