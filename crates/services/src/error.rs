//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by the workbook services.
///
/// Loads never produce these: missing or malformed persisted state falls
/// open to empty defaults. Saves surface them so callers can log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WorkbookServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
