//! Lookup error types.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no addresses found for {query}")]
    NotFound { query: String },

    #[error("lookup service failed: {0}")]
    Provider(String),
}
