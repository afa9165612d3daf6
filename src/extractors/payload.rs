//! Request body as a flat key-value map, from either JSON or form encoding.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Form, Json,
};
use serde_json::Value;
use std::collections::HashMap;

pub const INVALID_BODY: &str = "Invalid request body";
pub const BODY_NOT_AN_OBJECT: &str = "Request body must be a JSON object";

/// Normalized body. JSON bodies keep their value types; form fields are strings.
/// Bodies of any other content type are treated as carrying no fields.
#[derive(Clone, Debug, Default)]
pub struct Payload(pub HashMap<String, Value>);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(req.headers()) {
            BodyKind::Json => {
                let Json(value) = Json::<Value>::from_request(req, state).await.map_err(|e| {
                    tracing::debug!(error = %e, "rejected json body");
                    AppError::BadRequest(INVALID_BODY.into())
                })?;
                match value {
                    Value::Object(map) => Ok(Payload(map.into_iter().collect())),
                    _ => Err(AppError::BadRequest(BODY_NOT_AN_OBJECT.into())),
                }
            }
            BodyKind::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| {
                        tracing::debug!(error = %e, "rejected form body");
                        AppError::BadRequest(INVALID_BODY.into())
                    })?;
                Ok(Payload(
                    fields.into_iter().map(|(k, v)| (k, Value::String(v))).collect(),
                ))
            }
            BodyKind::Other => Ok(Payload::default()),
        }
    }
}
