use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("metadata provider rejected the configured API key")]
    UpstreamAuth,

    #[error("metadata provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("\"{0}\" is already in the collection")]
    DuplicateTitle(String),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal detail goes to the log, never to the page.
        let (status, message) = match &self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "database failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong on our side.".to_string())
            }
            AppError::UpstreamUnavailable(detail) => {
                tracing::error!(detail = %detail, "movie metadata provider unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "The movie metadata service is currently unavailable. Try again in a moment."
                        .to_string(),
                )
            }
            AppError::UpstreamAuth => {
                tracing::error!("movie metadata provider rejected the API key");
                (
                    StatusCode::BAD_GATEWAY,
                    "The movie metadata service rejected our credentials.".to_string(),
                )
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            // The add flow intercepts duplicate titles and redirects back to
            // the search form; this arm covers any other caller of
            // `MovieStore::create`.
            AppError::DuplicateTitle(_) => (StatusCode::CONFLICT, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        (status, Html(crate::templates::error_page(&message))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
