// SPDX-License-Identifier: GPL-3.0-only
pub mod error;
pub mod models;
pub mod traits;
pub mod sqlite;

pub use error::{StoreError, StoreResult};
pub use models::{CafeRecord, NewCafe, CAFE_COLUMNS};
pub use traits::CafeStore;
pub use sqlite::SqliteCafeStore;
