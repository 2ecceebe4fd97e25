//! Error handling for the application

use askama::Template;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::trip::ValidationError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(e) => e.error_type(),
            AppError::Template(_) => "template_error",
        }
    }

    /// Message safe to show to the user; internal details are logged instead.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                "Template error".to_string()
            }
        }
    }
}

/// Error page template
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let template = ErrorTemplate {
            status: status.as_u16(),
            message: self.public_message(),
        };

        // Return simple HTML error page
        let html = template.render().unwrap_or_else(|e| {
            tracing::error!("Failed to render error page: {}", e);
            status.to_string()
        });

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
