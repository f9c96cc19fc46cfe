use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mintgate_core::GateError;

/// Body sent for every failure the client cannot fix.
pub const GENERIC_FAILURE: &str = "Hiba történt";

// ---------------------------------------------------------------------------
// Internal sentinel for 405 Method Not Allowed
// ---------------------------------------------------------------------------

/// Carries an explicit 405 through the `anyhow::Error` chain without adding
/// a transport concern to `GateError`.
#[derive(Debug)]
struct MethodNotAllowed;

impl std::fmt::Display for MethodNotAllowed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Method not allowed")
    }
}

impl std::error::Error for MethodNotAllowed {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn method_not_allowed() -> Self {
        Self(MethodNotAllowed.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.0.downcast_ref::<MethodNotAllowed>().is_some() {
            let body = serde_json::json!({ "error": MethodNotAllowed.to_string() });
            return (StatusCode::METHOD_NOT_ALLOWED, axum::Json(body)).into_response();
        }

        let (status, message) = match self.0.downcast_ref::<GateError>() {
            Some(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, client_message(e)),
            _ => {
                tracing::error!(error = %format!("{:#}", self.0), "frame request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Client-facing text for errors the caller can fix.
fn client_message(err: &GateError) -> &'static str {
    match err {
        GateError::MissingMessageBytes => "Missing messageBytes",
        GateError::InvalidStage(_) => "Invalid type",
        _ => GENERIC_FAILURE,
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
