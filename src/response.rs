//! Response helpers. Records are returned bare (no envelope).

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

#[derive(Serialize)]
pub struct Message {
    pub message: String,
}

pub fn message(message: String) -> (StatusCode, Json<Message>) {
    ok(Message { message })
}
