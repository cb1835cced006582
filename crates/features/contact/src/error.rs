use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shub_kernel::server::AppStateError;

/// Contact slice error type.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// The drop-box inbox could not be opened or written.
    #[error("Contact inbox error: {0}")]
    Inbox(#[from] std::io::Error),

    /// A recorded message could not be serialized.
    #[error("Contact message encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The slice was not registered in the application state.
    #[error(transparent)]
    State(#[from] AppStateError),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        // Collaborator failures surface on the framework's standard error path.
        tracing::error!("{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
