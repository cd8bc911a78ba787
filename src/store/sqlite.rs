// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;
use std::str::FromStr;
use crate::store::error::{StoreError, StoreResult};
use crate::store::models::{CafeRecord, NewCafe};
use crate::store::traits::CafeStore;
use tracing::{debug, info};

pub struct SqliteCafeStore {
    pool: SqlitePool,
}

impl SqliteCafeStore {
    /// Open (creating if needed) the database file at `db_path`.
    /// The path `:memory:` opens a private in-memory database.
    pub async fn new(db_path: &Path) -> StoreResult<Self> {
        if db_path == Path::new(":memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let store = Self { pool };
        store.init_schema().await?;

        Ok(store)
    }

    /// Single-connection in-memory store. The connection is never recycled,
    /// since dropping it would drop the database with it.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;

        Ok(store)
    }

    async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cafes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(250) NOT NULL UNIQUE,
                map_url VARCHAR(500) NOT NULL,
                img_url VARCHAR(500) NOT NULL,
                location VARCHAR(250) NOT NULL,
                seats VARCHAR(250) NOT NULL,
                has_toilet BOOLEAN NOT NULL,
                has_wifi BOOLEAN NOT NULL,
                has_sockets BOOLEAN NOT NULL,
                can_take_calls BOOLEAN NOT NULL,
                coffee_price VARCHAR(250)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Initialized SQLite cafe schema");
        Ok(())
    }

    fn cafe_from_row(row: &SqliteRow) -> StoreResult<CafeRecord> {
        Ok(CafeRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            map_url: row.try_get("map_url")?,
            img_url: row.try_get("img_url")?,
            location: row.try_get("location")?,
            seats: row.try_get("seats")?,
            has_toilet: row.try_get("has_toilet")?,
            has_wifi: row.try_get("has_wifi")?,
            has_sockets: row.try_get("has_sockets")?,
            can_take_calls: row.try_get("can_take_calls")?,
            coffee_price: row.try_get("coffee_price")?,
        })
    }
}

#[async_trait]
impl CafeStore for SqliteCafeStore {
    async fn create(&self, cafe: NewCafe) -> StoreResult<CafeRecord> {
        let result = sqlx::query(
            r#"
            INSERT INTO cafes (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.img_url)
        .bind(&cafe.location)
        .bind(&cafe.seats)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(&cafe.coffee_price)
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            // SQLite error: "UNIQUE constraint failed: cafes.name"
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                debug!(name = %cafe.name, "Rejected duplicate cafe name");
                return Err(StoreError::DuplicateName(cafe.name));
            }
            Err(e) => return Err(e.into()),
        };

        let record = cafe.into_record(result.last_insert_rowid());
        info!(cafe_id = record.id, name = %record.name, "Added cafe to store");
        Ok(record)
    }

    async fn list_all(&self) -> StoreResult<Vec<CafeRecord>> {
        let rows = sqlx::query("SELECT * FROM cafes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::cafe_from_row).collect()
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<CafeRecord> {
        let row = sqlx::query("SELECT * FROM cafes WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Self::cafe_from_row(&row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM cafes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        info!(cafe_id = id, "Removed cafe from store");
        Ok(())
    }
}
