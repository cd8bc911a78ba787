// SPDX-License-Identifier: GPL-3.0-only
use thiserror::Error;

/// Cafe store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a cafe named '{0}' already exists")]
    DuplicateName(String),

    #[error("cafe {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
