// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use crate::store::error::StoreResult;
use crate::store::models::{CafeRecord, NewCafe};

#[async_trait]
pub trait CafeStore: Send + Sync {
    /// Insert a new cafe and return it with its assigned ID.
    /// Fails with `DuplicateName` if the name is taken.
    async fn create(&self, cafe: NewCafe) -> StoreResult<CafeRecord>;

    /// List every cafe in insertion order
    async fn list_all(&self) -> StoreResult<Vec<CafeRecord>>;

    /// Get a cafe by ID, `NotFound` if absent
    async fn get_by_id(&self, id: i64) -> StoreResult<CafeRecord>;

    /// Delete a cafe by ID, `NotFound` if absent
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
