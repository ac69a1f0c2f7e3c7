pub mod http;

use std::future::Future;

use crate::core::task::RemoteTask;

/// The single error kind a remote call can produce.
///
/// Callers treat every variant the same way; the variants only exist so the
/// log line says what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Remote store of task records.
///
/// No retries and no timeouts beyond whatever the transport does by default.
pub trait TaskStore {
    fn list(&self) -> impl Future<Output = Result<Vec<RemoteTask>, NetworkError>> + Send;

    /// `description` is already trimmed and non-empty.
    fn create(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<RemoteTask, NetworkError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), NetworkError>> + Send;
}
