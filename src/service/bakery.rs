use crate::error::AppError;
use crate::model::{BakedGood, Bakery, BakeryWithGoods};
use crate::service::validation::BakeryPatch;
use sqlx::SqlitePool;
use std::collections::HashMap;

const SELECT_BAKERY: &str = "SELECT id, name, created_at, updated_at FROM bakeries";
const SELECT_BAKED_GOOD: &str =
    "SELECT id, name, price, bakery_id, created_at, updated_at FROM baked_goods";

pub struct BakeryService;

impl BakeryService {
    /// All bakeries ordered by id, each with its baked goods.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<BakeryWithGoods>, AppError> {
        let sql = format!("{SELECT_BAKERY} ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let bakeries: Vec<Bakery> = sqlx::query_as(&sql).fetch_all(pool).await?;

        let sql = format!("{SELECT_BAKED_GOOD} ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let goods: Vec<BakedGood> = sqlx::query_as(&sql).fetch_all(pool).await?;

        let mut by_bakery: HashMap<i64, Vec<BakedGood>> = HashMap::new();
        for good in goods {
            by_bakery.entry(good.bakery_id).or_default().push(good);
        }
        Ok(bakeries
            .into_iter()
            .map(|bakery| {
                let baked_goods = by_bakery.remove(&bakery.id).unwrap_or_default();
                BakeryWithGoods { bakery, baked_goods }
            })
            .collect())
    }

    /// One bakery with its baked goods, or None.
    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<BakeryWithGoods>, AppError> {
        let sql = format!("{SELECT_BAKERY} WHERE id = ?");
        tracing::debug!(sql = %sql, id, "query");
        let bakery: Option<Bakery> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match bakery {
            Some(bakery) => {
                let baked_goods = Self::baked_goods_of(pool, bakery.id).await?;
                Ok(Some(BakeryWithGoods { bakery, baked_goods }))
            }
            None => Ok(None),
        }
    }

    pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "SELECT EXISTS (SELECT 1 FROM bakeries WHERE id = ?)";
        tracing::debug!(sql = %sql, id, "query");
        let found: bool = sqlx::query_scalar(sql).bind(id).fetch_one(pool).await?;
        Ok(found)
    }

    /// Apply the fields present in `patch` and return the bakery, or None when it does
    /// not exist. The write is the first statement of its transaction so SQLite takes the
    /// write lock up front; concurrent patches queue on the busy timeout and the last
    /// commit wins.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &BakeryPatch,
    ) -> Result<Option<BakeryWithGoods>, AppError> {
        let Some(name) = &patch.name else {
            return Self::find(pool, id).await;
        };

        let mut tx = pool.begin().await?;
        let sql = "UPDATE bakeries SET name = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ? \
                   RETURNING id, name, created_at, updated_at";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let bakery: Option<Bakery> = sqlx::query_as(sql)
            .bind(name)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(bakery) = bakery else {
            return Ok(None);
        };
        tx.commit().await?;

        let baked_goods = Self::baked_goods_of(pool, bakery.id).await?;
        Ok(Some(BakeryWithGoods { bakery, baked_goods }))
    }

    /// Baked goods referencing `bakery_id`, ordered by id. Served by the bakery_id index.
    pub async fn baked_goods_of(
        pool: &SqlitePool,
        bakery_id: i64,
    ) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!("{SELECT_BAKED_GOOD} WHERE bakery_id = ? ORDER BY id");
        tracing::debug!(sql = %sql, bakery_id, "query");
        let rows = sqlx::query_as(&sql).bind(bakery_id).fetch_all(pool).await?;
        Ok(rows)
    }
}
