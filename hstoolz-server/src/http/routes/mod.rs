//! Route handlers organized by resource

pub mod index;
pub mod catalog;
pub mod downloads;
pub mod verify;

use super::error::ApiError;

/// Run a filesystem-bound core operation on the blocking pool.
pub(crate) async fn blocking<T, F>(op: F) -> Result<T, ApiError>
where
    F: FnOnce() -> hstoolz_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(op).await??)
}
