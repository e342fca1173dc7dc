use api_types::error::ErrorBody;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use engine::{EngineError, ErrorKind};

pub use server::{ServerState, router, run_with_listener};

mod companies;
mod invoices;
mod server;

/// Every failure a handler can return.
///
/// This is the only place where failures become HTTP statuses, so companies
/// and invoices are reported the same way.
#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// Body could not be read as the expected JSON.
    BadRequest(String),
    /// No route matches the path.
    NotFound(String),
    MethodNotAllowed,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err.kind() {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Engine(err) => {
                let status = status_for_engine_error(&err);
                if status.is_server_error() {
                    tracing::error!("engine error: {err}");
                }
                (status, err.to_string())
            }
            ServerError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ServerError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ServerError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
        };

        (status, Json(ErrorBody::new(message, status.as_u16()))).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}
