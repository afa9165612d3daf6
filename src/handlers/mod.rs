//! HTTP handlers: one per route, each a single validate → query → respond step.

pub mod baked_good;
pub mod bakery;
pub mod home;

use crate::error::AppError;

/// Integer path id. Anything else can never name a record, so it is a 404.
pub(crate) fn parse_id(id_str: &str, kind: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(format!("{} with id {} not found", kind, id_str)))
}
