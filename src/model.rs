//! Bakery and baked-good records plus their JSON shapes.
//!
//! Records never hold each other: a baked good carries `bakery_id`, and the
//! nested views below are assembled from separate queries.

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A bakery with its baked goods; the goods do not embed the bakery again.
#[derive(Clone, Debug, Serialize)]
pub struct BakeryWithGoods {
    #[serde(flatten)]
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGood>,
}

/// A baked good with its owning bakery (without that bakery's goods).
/// `bakery` is `null` when `bakery_id` points at no row.
#[derive(Clone, Debug, Serialize)]
pub struct BakedGoodWithBakery {
    #[serde(flatten)]
    pub baked_good: BakedGood,
    pub bakery: Option<Bakery>,
}

/// Row shape of `baked_goods LEFT JOIN bakeries`.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BakedGoodJoinRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub bakery_name: Option<String>,
    pub bakery_created_at: Option<NaiveDateTime>,
    pub bakery_updated_at: Option<NaiveDateTime>,
}

impl From<BakedGoodJoinRow> for BakedGoodWithBakery {
    fn from(row: BakedGoodJoinRow) -> Self {
        let bakery = match (row.bakery_name, row.bakery_created_at) {
            (Some(name), Some(created_at)) => Some(Bakery {
                id: row.bakery_id,
                name,
                created_at,
                updated_at: row.bakery_updated_at,
            }),
            _ => None,
        };
        Self {
            baked_good: BakedGood {
                id: row.id,
                name: row.name,
                price: row.price,
                bakery_id: row.bakery_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            bakery,
        }
    }
}
