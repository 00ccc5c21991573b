//! Shared response envelope types for API handlers.
//!
//! All success responses use a `{ "data": ... }` envelope; errors use the
//! `{ "error": ..., "code": ... }` shape produced by
//! [`AppError`](crate::error::AppError). Use [`DataResponse`] instead of
//! ad-hoc `serde_json::json!({ "data": ... })` so payload types stay
//! checked at compile time.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
