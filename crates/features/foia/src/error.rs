use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shub_kernel::server::AppStateError;

/// FOIA slice error type.
#[derive(Debug, thiserror::Error)]
pub enum FoiaError {
    /// The slice was not registered in the application state.
    #[error(transparent)]
    State(#[from] AppStateError),
}

impl IntoResponse for FoiaError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
