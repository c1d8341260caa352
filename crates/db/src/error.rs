use smartplanning_core::error::CoreError;

/// Error type for store operations.
///
/// The store validates as well as persists, so an operation can fail with
/// a domain error (unresolvable date, malformed payload, missing row) or
/// a database error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
