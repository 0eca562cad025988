//! Helper for running synchronous store calls from async services.

use answerdesk_storage::StorageError;

use crate::ServiceError;

/// Runs a blocking store closure on the tokio blocking pool.
pub(crate) async fn blocking<F, T>(f: F) -> Result<T, ServiceError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServiceError::Join(e.to_string()))?
        .map_err(ServiceError::from)
}
