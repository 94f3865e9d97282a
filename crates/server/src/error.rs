//! Translation of failures into the JSON error envelope.
//!
//! Every failure leaves the server as
//! `{ "error": { "message": <string>, "status": <integer> } }`.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::panic;
use std::sync::Once;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use numstat_core::StatsError;

const INTERNAL_MESSAGE: &str = "Internal Server Error";

thread_local! {
    /// Location and backtrace of the last panic on this thread.
    static PANIC_TRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Detail is logged server-side only.
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn not_found() -> Self {
        ApiError::NotFound("Not Found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err.status_code() {
            404 => ApiError::NotFound(err.to_string()),
            _ => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => {
                tracing::debug!(status = status.as_u16(), "{}", msg);
                msg
            }
            ApiError::Internal(detail) => {
                tracing::error!(status = status.as_u16(), "{}", detail);
                INTERNAL_MESSAGE.to_string()
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                message,
                status: status.as_u16(),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Install a panic hook that records the panic location and a backtrace.
///
/// The panic layer catches handler panics on the panicking thread, so
/// [`panic_response`] picks the trace up from a thread-local and logs it.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        panic::set_hook(Box::new(|info| {
            let trace = format!("{}\n{}", info, Backtrace::force_capture());
            PANIC_TRACE.with(|slot| *slot.borrow_mut() = Some(trace));
        }));
    });
}

fn take_panic_trace() -> Option<String> {
    PANIC_TRACE.with(|slot| slot.borrow_mut().take())
}

/// Response used by the panic layer when a handler panics.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    let trace = take_panic_trace().unwrap_or_else(|| "(no backtrace captured)".to_string());
    ApiError::Internal(format!("handler panicked: {}\n{}", detail, trace)).into_response()
}

/// Router fallback for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
