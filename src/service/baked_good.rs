use crate::error::AppError;
use crate::model::{BakedGoodJoinRow, BakedGoodWithBakery};
use crate::service::validation::NewBakedGood;
use sqlx::SqlitePool;

/// Baked goods joined to their (possibly missing) bakery.
const SELECT_WITH_BAKERY: &str = "SELECT g.id, g.name, g.price, g.bakery_id, \
     g.created_at, g.updated_at, b.name AS bakery_name, \
     b.created_at AS bakery_created_at, b.updated_at AS bakery_updated_at \
     FROM baked_goods g LEFT JOIN bakeries b ON b.id = g.bakery_id";

/// Most expensive first; equal prices fall back to insertion order so repeated calls agree.
const ORDER_BY_PRICE: &str = "ORDER BY g.price DESC, g.id ASC";

pub struct BakedGoodService;

impl BakedGoodService {
    pub async fn list_by_price(pool: &SqlitePool) -> Result<Vec<BakedGoodWithBakery>, AppError> {
        let sql = format!("{SELECT_WITH_BAKERY} {ORDER_BY_PRICE}");
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<BakedGoodJoinRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// First row of the by-price ordering, or None when there are no baked goods.
    pub async fn most_expensive(
        pool: &SqlitePool,
    ) -> Result<Option<BakedGoodWithBakery>, AppError> {
        let sql = format!("{SELECT_WITH_BAKERY} {ORDER_BY_PRICE} LIMIT 1");
        tracing::debug!(sql = %sql, "query");
        let row: Option<BakedGoodJoinRow> = sqlx::query_as(&sql).fetch_optional(pool).await?;
        Ok(row.map(Into::into))
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<BakedGoodWithBakery>, AppError> {
        let sql = format!("{SELECT_WITH_BAKERY} WHERE g.id = ?");
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<BakedGoodJoinRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Insert one validated baked good in a transaction and return it. The bakery
    /// reference is stored as given, existing or not.
    pub async fn create(
        pool: &SqlitePool,
        new: &NewBakedGood,
    ) -> Result<BakedGoodWithBakery, AppError> {
        let mut tx = pool.begin().await?;
        let sql = "INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?) RETURNING id";
        tracing::debug!(sql = %sql, bakery_id = new.bakery_id, "query (tx)");
        let id: i64 = sqlx::query_scalar(sql)
            .bind(&new.name)
            .bind(new.price)
            .bind(new.bakery_id)
            .fetch_one(&mut *tx)
            .await?;

        let sql = format!("{SELECT_WITH_BAKERY} WHERE g.id = ?");
        let row: BakedGoodJoinRow = sqlx::query_as(&sql).bind(id).fetch_one(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!(id, bakery_id = new.bakery_id, "baked good created");
        Ok(row.into())
    }

    /// Delete by id in a transaction. Returns false when no such row existed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        let sql = "DELETE FROM baked_goods WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let result = sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "baked good deleted");
        }
        Ok(deleted)
    }
}
