//! Bakery API: CRUD over bakeries and their baked goods.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{BakedGood, BakedGoodWithBakery, Bakery, BakeryWithGoods};
pub use routes::{api_routes, app, common_routes};
pub use service::{BakedGoodService, BakeryService};
pub use state::AppState;
pub use store::{connect, ensure_tables, seed_sample_data};
