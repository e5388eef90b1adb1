/**
 * Error Response Conversion
 *
 * Implements `IntoResponse` for `ApiError` so handlers and middleware can
 * return errors directly. Responses use the envelope
 * `{"status": "fail"|"error", "message": "..."}`; debug builds additionally
 * carry the internal detail for 5xx errors.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side failures are logged in full before the detail is
        // replaced with a generic client message.
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("request rejected: {}", self);
        }

        let mut body = json!({
            "status": self.status_label(),
            "message": self.public_message(),
        });

        if cfg!(debug_assertions) && status.is_server_error() {
            body["detail"] = json!(self.to_string());
        }

        (status, Json(body)).into_response()
    }
}
