// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use crate::api::PageHandlers;
use crate::forms::FormInput;
use crate::store::{CafeStore, SqliteCafeStore, StoreResult};
use crate::workflow::{NoticeSlots, WorkflowController};

pub const TEST_SECRET: &str = "test-secret-key";

/// Create an in-memory SQLite store for testing
pub async fn setup_test_store() -> StoreResult<SqliteCafeStore> {
    SqliteCafeStore::in_memory().await
}

/// Page handlers over a fresh in-memory store, plus the store for assertions
pub async fn create_test_handlers() -> (PageHandlers, Arc<SqliteCafeStore>) {
    let store = Arc::new(setup_test_store().await.expect("Failed to create test store"));
    let dyn_store: Arc<dyn CafeStore> = store.clone();
    let controller = WorkflowController::new(dyn_store, Arc::new(NoticeSlots::new()));
    (PageHandlers::new(controller, TEST_SECRET.to_string()), store)
}

/// A complete, valid add-cafe submission
pub fn add_cafe_input(name: &str) -> FormInput {
    [
        ("name", name),
        ("map_url", "https://maps.example/a"),
        ("img_url", "https://img.example/a.png"),
        ("location", "Downtown"),
        ("seats", "0-10"),
        ("has_toilet", "y"),
        ("has_wifi", "y"),
        ("coffee_price", "£2.50"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
