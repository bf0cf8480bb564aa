//! Service errors - Esiti di fallimento del livello service
//!
//! L'assenza di una riga in lettura non è un errore (`Option::None`); questi sono i soli
//! fallimenti che un service può restituire.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A foreign key in the payload does not resolve to an existing row.
    /// Raised before any write, the caller can fix the input and retry.
    #[error("{0}")]
    InvalidReference(&'static str),

    /// Update or delete targeting a row that does not exist
    #[error("{0}")]
    NotFound(&'static str),

    /// The composite key of a join row is already taken
    #[error("{0}")]
    Conflict(&'static str),

    /// Failure from the database, propagated unchanged
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}
