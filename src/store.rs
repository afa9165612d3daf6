//! Pool construction, table DDL, and sample data.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Open a pool for `database_url`, creating the database file if missing.
/// Foreign keys are not enforced: a baked good may reference a bakery that does not exist.
/// In-memory databases are per connection, so they get a single long-lived connection.
/// Writers contending for the database wait up to five seconds for the lock.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false)
        .busy_timeout(Duration::from_secs(5));
    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };
    tracing::debug!(database_url = %database_url, "connected");
    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS bakeries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS baked_goods (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        bakery_id INTEGER NOT NULL REFERENCES bakeries (id),
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_baked_goods_bakery_id ON baked_goods (bakery_id)",
    "CREATE INDEX IF NOT EXISTS idx_baked_goods_price ON baked_goods (price DESC, id)",
];

/// Create `bakeries` and `baked_goods` if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(*ddl).execute(pool).await?;
    }
    Ok(())
}

const SAMPLE_BAKERIES: &[&str] = &["Delightful donuts", "Incredible crullers", "Bread & Butter"];

/// (name, price, index into SAMPLE_BAKERIES)
const SAMPLE_BAKED_GOODS: &[(&str, f64, usize)] = &[
    ("Chocolate dipped donut", 2.75, 0),
    ("Apple-spice filled donut", 3.5, 0),
    ("Glazed honey cruller", 3.25, 1),
    ("Chocolate cruller", 100.0, 1),
    ("Sourdough loaf", 8.0, 2),
    ("Baguette", 4.25, 2),
];

/// Replace all rows with a fixed sample data set in one transaction.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM baked_goods").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM bakeries").execute(&mut *tx).await?;

    let mut bakery_ids = Vec::with_capacity(SAMPLE_BAKERIES.len());
    for name in SAMPLE_BAKERIES {
        let id: i64 = sqlx::query_scalar("INSERT INTO bakeries (name) VALUES (?) RETURNING id")
            .bind(*name)
            .fetch_one(&mut *tx)
            .await?;
        bakery_ids.push(id);
    }
    for (name, price, bakery) in SAMPLE_BAKED_GOODS {
        sqlx::query("INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)")
            .bind(*name)
            .bind(*price)
            .bind(bakery_ids[*bakery])
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::info!(
        bakeries = SAMPLE_BAKERIES.len(),
        baked_goods = SAMPLE_BAKED_GOODS.len(),
        "seeded sample data"
    );
    Ok(())
}
