use thiserror::Error;

/// Failure surfaced by the query service.
///
/// Every storage error is wrapped into `QueryFailed` at the service boundary,
/// so callers see a single error shape regardless of backend.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Failed to {operation}.")]
    QueryFailed {
        operation: &'static str,
        #[source]
        cause: anyhow::Error,
    },

    #[error("Legacy SQL database is not configured")]
    LegacyUnavailable,
}

impl QueryError {
    pub fn failed(operation: &'static str) -> impl FnOnce(anyhow::Error) -> QueryError {
        move |cause| QueryError::QueryFailed { operation, cause }
    }

    /// Name of the failed operation, if any.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            QueryError::QueryFailed { operation, .. } => Some(operation),
            QueryError::LegacyUnavailable => None,
        }
    }
}
